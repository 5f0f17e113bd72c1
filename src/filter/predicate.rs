use super::matcher::NamespaceMatcher;
use crate::entry::{Field, Level, LogEntry};
use std::fmt;
use std::sync::Arc;

type CustomFn = dyn Fn(&LogEntry, &[Field]) -> bool + Send + Sync;

/// A composable admission predicate over log entries.
///
/// Filters form a small boolean algebra: the leaves test an entry's level or
/// logger name, `any`/`all`/`not` combine them. Evaluation is pure — the only
/// internal state anywhere is the [`NamespaceMatcher`] verdict cache — so a
/// single filter can be shared freely across threads.
#[derive(Clone)]
pub enum Filter {
    /// Constant verdict; produced by the namespace fast paths
    Always(bool),
    /// True iff the entry has exactly this level
    ExactLevel(Level),
    /// True iff the entry's level is this severe or worse
    MinimumLevel(Level),
    /// True iff the entry's logger name matches the namespace spec
    Namespaces(Arc<NamespaceMatcher>),
    /// True iff at least one inner filter is true; empty means false
    Any(Vec<Filter>),
    /// True iff every inner filter is true AND there is at least one inner
    /// filter (an empty clause must not admit everything)
    All(Vec<Filter>),
    /// Logical negation
    Not(Box<Filter>),
    /// A caller-provided predicate; the only kind that typically looks at
    /// the write-time fields
    Custom(Arc<CustomFn>),
}

impl Filter {
    pub fn exact_level(level: Level) -> Filter {
        Filter::ExactLevel(level)
    }

    pub fn minimum_level(level: Level) -> Filter {
        Filter::MinimumLevel(level)
    }

    /// Compile a comma-separated namespace spec (see [`NamespaceMatcher`])
    /// into a filter over the entry's logger name.
    ///
    /// Two fast paths skip the matcher entirely without changing observable
    /// results: an empty spec never matches, and a spec with a bare `*`
    /// inclusion and no exclusions always matches.
    pub fn by_namespaces(spec: &str) -> Filter {
        if spec.is_empty() {
            return Filter::Always(false);
        }
        let has_include_wildcard = spec.split(',').any(|pattern| pattern == "*");
        let has_exclude = spec.split(',').any(|pattern| pattern.starts_with('-'));
        if has_include_wildcard && !has_exclude {
            return Filter::Always(true);
        }
        Filter::Namespaces(Arc::new(NamespaceMatcher::new(spec)))
    }

    pub fn any(filters: impl IntoIterator<Item = Filter>) -> Filter {
        Filter::Any(filters.into_iter().collect())
    }

    pub fn all(filters: impl IntoIterator<Item = Filter>) -> Filter {
        Filter::All(filters.into_iter().collect())
    }

    pub fn not(filter: Filter) -> Filter {
        Filter::Not(Box::new(filter))
    }

    /// Wrap an arbitrary predicate. The function must be pure; it may inspect
    /// the write-time fields, which all built-in filters ignore.
    pub fn custom(f: impl Fn(&LogEntry, &[Field]) -> bool + Send + Sync + 'static) -> Filter {
        Filter::Custom(Arc::new(f))
    }

    /// Decide whether `entry` is admitted. `fields` is empty during
    /// pre-checks and carries the structured context during actual writes.
    pub fn evaluate(&self, entry: &LogEntry, fields: &[Field]) -> bool {
        match self {
            Filter::Always(verdict) => *verdict,
            Filter::ExactLevel(level) => entry.level == *level,
            Filter::MinimumLevel(level) => entry.level >= *level,
            Filter::Namespaces(matcher) => matcher.matches(&entry.logger_name),
            Filter::Any(filters) => filters.iter().any(|f| f.evaluate(entry, fields)),
            Filter::All(filters) => {
                !filters.is_empty() && filters.iter().all(|f| f.evaluate(entry, fields))
            }
            Filter::Not(inner) => !inner.evaluate(entry, fields),
            Filter::Custom(f) => f(entry, fields),
        }
    }

    /// Collect the malformed glob patterns anywhere in this filter tree.
    pub fn malformed_patterns(&self) -> Vec<&str> {
        let mut sources = Vec::new();
        self.collect_malformed(&mut sources);
        sources
    }

    fn collect_malformed<'a>(&'a self, sources: &mut Vec<&'a str>) {
        match self {
            Filter::Namespaces(matcher) => sources.extend(matcher.malformed_patterns()),
            Filter::Any(filters) | Filter::All(filters) => {
                for filter in filters {
                    filter.collect_malformed(sources);
                }
            }
            Filter::Not(inner) => inner.collect_malformed(sources),
            _ => {}
        }
    }
}

impl fmt::Debug for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::Always(verdict) => f.debug_tuple("Always").field(verdict).finish(),
            Filter::ExactLevel(level) => f.debug_tuple("ExactLevel").field(level).finish(),
            Filter::MinimumLevel(level) => f.debug_tuple("MinimumLevel").field(level).finish(),
            Filter::Namespaces(matcher) => f.debug_tuple("Namespaces").field(matcher).finish(),
            Filter::Any(filters) => f.debug_tuple("Any").field(filters).finish(),
            Filter::All(filters) => f.debug_tuple("All").field(filters).finish(),
            Filter::Not(inner) => f.debug_tuple("Not").field(inner).finish(),
            Filter::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}
