use super::error::ParseError;
use super::level::LevelSet;
use super::predicate::Filter;

/// Compile a rule string into an admission filter.
///
/// Rules are separated by whitespace and OR together; each rule is
/// `[levels:]namespaces`. A rule without `:` applies to all levels; a rule
/// where either side of the `:` is empty is a syntax error. An empty input
/// compiles to a filter that rejects everything.
///
/// ```
/// use log_sieve::{Level, LogEntry, parse_rules};
///
/// let filter = parse_rules("*:myns info,warn:myns.* error:*").unwrap();
/// assert!(filter.evaluate(&LogEntry::new(Level::Debug, "myns"), &[]));
/// assert!(!filter.evaluate(&LogEntry::new(Level::Debug, "myns.foo"), &[]));
/// assert!(filter.evaluate(&LogEntry::new(Level::Info, "myns.foo"), &[]));
/// assert!(filter.evaluate(&LogEntry::new(Level::Error, "anything"), &[]));
/// ```
pub fn parse_rules(input: &str) -> Result<Filter, ParseError> {
    let mut clauses = Vec::new();

    for rule in input.split_whitespace() {
        let (levels_part, namespaces_part) = match rule.split_once(':') {
            // no separator: all levels, the whole token is the namespace spec
            None => ("", rule),
            Some((left, right)) => {
                if left.is_empty() || right.is_empty() {
                    return Err(ParseError::BadSyntax);
                }
                (left, right)
            }
        };

        let levels = LevelSet::parse_list(levels_part)?;
        let namespaces = Filter::by_namespaces(namespaces_part);

        // a full level set adds no information, the namespace filter alone
        // is the whole clause
        if levels.is_full() {
            clauses.push(namespaces);
        } else {
            let level_filter = Filter::any(levels.iter().map(Filter::exact_level));
            clauses.push(Filter::all([level_filter, namespaces]));
        }
    }

    Ok(Filter::any(clauses))
}

/// Like [`parse_rules`] but panics on error. For call sites that treat a bad
/// rule string as a startup-configuration fault; never use this on input that
/// arrives at runtime.
pub fn must_parse_rules(input: &str) -> Filter {
    match parse_rules(input) {
        Ok(filter) => filter,
        Err(err) => panic!("invalid rule string {input:?}: {err}"),
    }
}

/// Print a stderr warning for every malformed glob pattern in the filter.
///
/// Malformed patterns silently match nothing by design; this helps users
/// notice the typo without changing admission behavior.
pub fn print_rule_warnings(filter: &Filter) {
    for source in filter.malformed_patterns() {
        eprintln!("Warning: malformed namespace pattern '{}' will never match", source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::{Level, LogEntry};

    fn admits(filter: &Filter, level: Level, name: &str) -> bool {
        filter.evaluate(&LogEntry::new(level, name), &[])
    }

    #[test]
    fn test_empty_input_rejects_everything() {
        let filter = parse_rules("").unwrap();
        for level in Level::all() {
            assert!(!admits(&filter, level, ""));
            assert!(!admits(&filter, level, "anything"));
        }
    }

    #[test]
    fn test_wildcard_admits_everything() {
        let filter = parse_rules("*").unwrap();
        for level in Level::all() {
            assert!(admits(&filter, level, ""));
            assert!(admits(&filter, level, "deeply.nested.logger"));
        }
    }

    #[test]
    fn test_namespace_only_rule_applies_to_all_levels() {
        let filter = parse_rules("foo").unwrap();
        for level in Level::all() {
            assert!(admits(&filter, level, "foo"));
            assert!(!admits(&filter, level, "foo.bar"));
            assert!(!admits(&filter, level, "bar"));
        }
    }

    #[test]
    fn test_level_prefix_restricts_levels() {
        let filter = parse_rules("debug,info:foo").unwrap();
        assert!(admits(&filter, Level::Debug, "foo"));
        assert!(admits(&filter, Level::Info, "foo"));
        assert!(!admits(&filter, Level::Warn, "foo"));
        assert!(!admits(&filter, Level::Debug, "bar"));
    }

    #[test]
    fn test_rules_are_commutative() {
        let ab = parse_rules("debug:foo.* warn+:bar").unwrap();
        let ba = parse_rules("warn+:bar debug:foo.*").unwrap();
        let names = ["", "foo", "foo.x", "bar", "bar.x", "baz"];
        for level in Level::all() {
            for name in names {
                assert_eq!(
                    admits(&ab, level, name),
                    admits(&ba, level, name),
                    "disagreement at ({level}, {name:?})"
                );
            }
        }
    }

    #[test]
    fn test_redundant_rules_are_harmless() {
        let once = parse_rules("info:*").unwrap();
        let thrice = parse_rules("info,info:* info:*").unwrap();
        for level in Level::all() {
            for name in ["", "foo", "foo.bar"] {
                assert_eq!(admits(&once, level, name), admits(&thrice, level, name));
            }
        }
    }

    #[test]
    fn test_unsupported_keyword_error() {
        let err = parse_rules("invalid:*").unwrap_err();
        assert_eq!(err.to_string(), "unsupported keyword: \"invalid\"");
    }

    #[test]
    fn test_bad_syntax_on_empty_sides() {
        assert_eq!(parse_rules(":*").unwrap_err(), ParseError::BadSyntax);
        assert_eq!(parse_rules("info:").unwrap_err(), ParseError::BadSyntax);
        assert_eq!(parse_rules("foo :bar").unwrap_err(), ParseError::BadSyntax);
    }

    #[test]
    fn test_rules_split_on_any_whitespace() {
        let filter = parse_rules("debug:foo\terror:bar\ninfo:baz").unwrap();
        assert!(admits(&filter, Level::Debug, "foo"));
        assert!(admits(&filter, Level::Error, "bar"));
        assert!(admits(&filter, Level::Info, "baz"));
        assert!(!admits(&filter, Level::Debug, "bar"));
    }

    #[test]
    #[should_panic(expected = "unsupported keyword")]
    fn test_must_parse_rules_panics_on_error() {
        must_parse_rules("nope:*");
    }

    #[test]
    fn test_malformed_globs_surface_as_warnings_only() {
        let filter = parse_rules("info:ok*,bad[").unwrap();
        assert_eq!(filter.malformed_patterns(), vec!["bad["]);
        assert!(admits(&filter, Level::Info, "ok.core"));
        assert!(!admits(&filter, Level::Info, "bad["));
    }
}
