use super::error::ParseError;
use crate::entry::Level;
use std::collections::BTreeSet;

/// A set of severity levels selected by the level side of a rule.
///
/// Built from DSL keywords: `info` selects exactly info, `info+` selects info
/// and everything more severe, `*` and the empty token select all levels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelSet {
    levels: BTreeSet<Level>,
}

impl LevelSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of level tokens into a single set.
    pub fn parse_list(input: &str) -> Result<Self, ParseError> {
        let mut set = LevelSet::empty();
        for token in input.split(',') {
            set.insert_token(token)?;
        }
        Ok(set)
    }

    /// Add the levels selected by one keyword token (case-insensitive).
    pub fn insert_token(&mut self, token: &str) -> Result<(), ParseError> {
        match token.to_lowercase().as_str() {
            // the empty token and `*` are synonyms for "all levels", and
            // `debug+` selects everything anyway
            "" | "*" | "debug+" => self.levels.extend(Level::all()),
            "debug" => {
                self.levels.insert(Level::Debug);
            }
            "info" => {
                self.levels.insert(Level::Info);
            }
            "info+" => self.insert_at_and_above(Level::Info),
            "warn" => {
                self.levels.insert(Level::Warn);
            }
            "warn+" => self.insert_at_and_above(Level::Warn),
            "error" => {
                self.levels.insert(Level::Error);
            }
            "error+" => self.insert_at_and_above(Level::Error),
            "dpanic" => {
                self.levels.insert(Level::DPanic);
            }
            "dpanic+" => self.insert_at_and_above(Level::DPanic),
            "panic" => {
                self.levels.insert(Level::Panic);
            }
            "panic+" => self.insert_at_and_above(Level::Panic),
            // nothing is more severe than fatal
            "fatal" | "fatal+" => {
                self.levels.insert(Level::Fatal);
            }
            _ => return Err(ParseError::UnsupportedKeyword(token.to_string())),
        }
        Ok(())
    }

    fn insert_at_and_above(&mut self, floor: Level) {
        self.levels
            .extend(Level::all().into_iter().filter(|level| *level >= floor));
    }

    pub fn contains(&self, level: Level) -> bool {
        self.levels.contains(&level)
    }

    /// True when every severity level is selected, in which case a rule
    /// clause needs no level predicate at all.
    pub fn is_full(&self) -> bool {
        self.levels.len() == Level::all().len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Level> + '_ {
        self.levels.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_keywords() {
        let set = LevelSet::parse_list("info,warn").unwrap();
        assert!(set.contains(Level::Info));
        assert!(set.contains(Level::Warn));
        assert!(!set.contains(Level::Debug));
        assert!(!set.contains(Level::Error));
    }

    #[test]
    fn test_plus_suffix_selects_at_and_above() {
        let set = LevelSet::parse_list("warn+").unwrap();
        assert!(!set.contains(Level::Debug));
        assert!(!set.contains(Level::Info));
        assert!(set.contains(Level::Warn));
        assert!(set.contains(Level::Error));
        assert!(set.contains(Level::DPanic));
        assert!(set.contains(Level::Panic));
        assert!(set.contains(Level::Fatal));
    }

    #[test]
    fn test_wildcard_empty_and_debug_plus_are_synonyms() {
        for input in ["*", "", "debug+", "DEBUG+"] {
            let set = LevelSet::parse_list(input).unwrap();
            assert!(set.is_full(), "{input:?} should select all levels");
        }
    }

    #[test]
    fn test_keywords_are_case_insensitive() {
        let set = LevelSet::parse_list("ERROR,DPanic").unwrap();
        assert!(set.contains(Level::Error));
        assert!(set.contains(Level::DPanic));
    }

    #[test]
    fn test_fatal_plus_is_just_fatal() {
        let set = LevelSet::parse_list("fatal+").unwrap();
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Level::Fatal]);
    }

    #[test]
    fn test_unsupported_keyword_carries_token() {
        let err = LevelSet::parse_list("verbose").unwrap_err();
        assert_eq!(err, ParseError::UnsupportedKeyword("verbose".to_string()));
        assert_eq!(err.to_string(), "unsupported keyword: \"verbose\"");
    }

    #[test]
    fn test_duplicate_tokens_are_redundant() {
        let once = LevelSet::parse_list("info").unwrap();
        let twice = LevelSet::parse_list("info,info").unwrap();
        assert_eq!(once, twice);
    }
}
