use regex::Regex;
use std::collections::HashMap;
use std::sync::Mutex;

/// Matches logger names against a comma-separated list of glob patterns.
///
/// Patterns use shell-style globbing over the whole name: `*` matches any
/// sequence of characters including `.`, `?` matches one character, and
/// `[...]` / `[^...]` match character classes. A pattern prefixed with `-` is
/// an exclusion; a name matches the spec when at least one inclusion pattern
/// matches it and no exclusion pattern does.
///
/// Verdicts are memoized per distinct logger name, so repeated evaluations
/// for the handful of names a process actually uses cost one map lookup.
#[derive(Debug)]
pub struct NamespaceMatcher {
    includes: Vec<Pattern>,
    excludes: Vec<Pattern>,
    cache: Mutex<HashMap<String, bool>>,
}

/// One compiled glob pattern. `regex` is `None` when the glob was malformed,
/// in which case the pattern matches nothing; a single bad pattern never
/// poisons the rest of the spec.
#[derive(Debug)]
struct Pattern {
    /// The pattern as written in the spec, `-` prefix included
    source: String,
    regex: Option<Regex>,
}

impl Pattern {
    fn matches(&self, name: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(name))
    }
}

impl NamespaceMatcher {
    pub fn new(spec: &str) -> Self {
        let mut includes = Vec::new();
        let mut excludes = Vec::new();
        for source in spec.split(',') {
            if source.is_empty() {
                continue;
            }
            if let Some(glob) = source.strip_prefix('-') {
                excludes.push(Pattern {
                    source: source.to_string(),
                    regex: glob_to_regex(glob),
                });
            } else {
                includes.push(Pattern {
                    source: source.to_string(),
                    regex: glob_to_regex(source),
                });
            }
        }
        NamespaceMatcher {
            includes,
            excludes,
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Decide whether `name` matches this spec, consulting the cache first.
    pub fn matches(&self, name: &str) -> bool {
        let mut cache = self
            .cache
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if let Some(verdict) = cache.get(name) {
            return *verdict;
        }
        let verdict = self.compute(name);
        cache.insert(name.to_string(), verdict);
        verdict
    }

    // Matching is deterministic, so recomputing for the same name always
    // stores the same verdict. Each category stops at its first match; the
    // categories themselves are always combined with AND-NOT.
    fn compute(&self, name: &str) -> bool {
        let included = self.includes.iter().any(|p| p.matches(name));
        let excluded = self.excludes.iter().any(|p| p.matches(name));
        included && !excluded
    }

    /// Patterns whose glob failed to compile. Purely diagnostic; see
    /// [`print_rule_warnings`](super::parser::print_rule_warnings).
    pub fn malformed_patterns(&self) -> Vec<&str> {
        self.includes
            .iter()
            .chain(self.excludes.iter())
            .filter(|p| p.regex.is_none())
            .map(|p| p.source.as_str())
            .collect()
    }
}

/// Compile a glob pattern into an anchored regex. Returns `None` for
/// malformed patterns (unclosed character class, trailing backslash).
fn glob_to_regex(glob: &str) -> Option<Regex> {
    let mut re = String::with_capacity(glob.len() + 2);
    re.push('^');
    let mut chars = glob.chars();
    while let Some(c) = chars.next() {
        match c {
            '*' => re.push_str(".*"),
            '?' => re.push('.'),
            '\\' => {
                let escaped = chars.next()?;
                push_literal(&mut re, escaped);
            }
            '[' => {
                re.push('[');
                let mut cur = chars.next();
                if cur == Some('^') {
                    re.push('^');
                    cur = chars.next();
                }
                let mut closed = false;
                let mut nonempty = false;
                while let Some(cc) = cur {
                    match cc {
                        ']' if nonempty => {
                            closed = true;
                            break;
                        }
                        '\\' => {
                            let escaped = chars.next()?;
                            push_literal(&mut re, escaped);
                            nonempty = true;
                        }
                        // range separator passes through unescaped
                        '-' => {
                            re.push('-');
                            nonempty = true;
                        }
                        other => {
                            push_literal(&mut re, other);
                            nonempty = true;
                        }
                    }
                    cur = chars.next();
                }
                if !closed {
                    return None;
                }
                re.push(']');
            }
            other => push_literal(&mut re, other),
        }
    }
    re.push('$');
    Regex::new(&re).ok()
}

// Only ASCII punctuation can be regex-meta, and escaping anything else is
// itself a regex syntax error.
fn push_literal(re: &mut String, c: char) {
    if c.is_ascii_punctuation() {
        re.push('\\');
    }
    re.push(c);
}
