//! log-sieve — per-entry admission filtering for structured log pipelines
//!
//! A [`FilteringSink`] wraps any downstream [`Sink`] and decides, entry by
//! entry, whether to forward or silently drop. Decisions come from a
//! composable [`Filter`] predicate over the entry's severity level and its
//! dot-segmented logger name, usually compiled from a compact rule string:
//!
//! ```
//! use log_sieve::{FilteringSink, Level, LogEntry, NoopSink, parse_rules};
//! use std::sync::Arc;
//!
//! let filter = parse_rules("info+:api.* error:*")?;
//! let sink = FilteringSink::new(Arc::new(NoopSink), filter);
//!
//! assert!(sink.check(&LogEntry::new(Level::Info, "api.billing")));
//! assert!(!sink.check(&LogEntry::new(Level::Debug, "api.billing")));
//! assert!(sink.check(&LogEntry::new(Level::Error, "worker")));
//! # Ok::<(), log_sieve::ParseError>(())
//! ```
//!
//! The crate performs no I/O, formatting, or persistence of its own; all of
//! that belongs to the wrapped sink. See the [`filter`] module docs for the
//! full rule syntax.

pub mod entry;
pub mod filter;
pub mod sink;

pub use entry::{Field, Level, LogEntry};
pub use filter::{Filter, LevelSet, NamespaceMatcher, ParseError};
pub use filter::{must_parse_rules, parse_rules, print_rule_warnings};
pub use sink::{FilteringSink, NoopSink, Sink};
