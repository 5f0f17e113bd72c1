//! Rule parsing and the admission predicate algebra
//!
//! This module decides which log entries get through to the downstream sink.
//! Filters can be built by hand from the combinators on [`Filter`] or
//! compiled from a compact rule string.
//!
//! # Syntax
//!
//! ```text
//! rule         := [levels ':'] namespaces
//! levels       := levelToken (',' levelToken)*
//! levelToken   := 'debug'|'info'|'warn'|'error'|'dpanic'|'panic'|'fatal'
//!                 | <same> '+' | '*' | ''
//! namespaces   := pattern (',' pattern)*
//! pattern      := ['-'] glob
//! ```
//!
//! Multiple whitespace-separated rules OR together. A `+` suffix selects a
//! level and everything more severe; a `-` prefix excludes the namespaces a
//! glob matches.
//!
//! # Examples
//!
//! ```text
//! *                           # admit everything
//! debug:*                     # debug entries only, any namespace
//! info,warn:myns.*            # info or warn under myns.*
//! error:*                     # every error, regardless of namespace
//! foo*,-foo.foo               # namespaces matching foo* except foo.foo
//! *:myns info,warn:myns.* error:*   # three rules OR'd together
//! ```

pub mod error;
pub mod level;
pub mod matcher;
pub mod parser;
pub mod predicate;

pub use error::ParseError;
pub use level::LevelSet;
pub use matcher::NamespaceMatcher;
pub use parser::{must_parse_rules, parse_rules, print_rule_warnings};
pub use predicate::Filter;
