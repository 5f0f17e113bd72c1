use chrono::{DateTime, Local};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Severity of a log entry, from least to most severe.
///
/// The ordering is total and fixed: `Debug < Info < Warn < Error < DPanic <
/// Panic < Fatal`. Filters rely on this ordering for `minimum_level` and for
/// the `+` suffix in rule strings (e.g. `warn+` means warn and everything
/// more severe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Verbose diagnostics, usually disabled in production
    Debug,
    /// General information
    Info,
    /// Something unexpected but recoverable
    Warn,
    /// A failure the process can survive
    Error,
    /// An error severe enough to panic in development builds
    DPanic,
    /// The process is about to panic
    Panic,
    /// The process is about to exit
    Fatal,
}

impl Level {
    /// All levels in ascending severity order.
    pub fn all() -> [Level; 7] {
        [
            Level::Debug,
            Level::Info,
            Level::Warn,
            Level::Error,
            Level::DPanic,
            Level::Panic,
            Level::Fatal,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::DPanic => "dpanic",
            Level::Panic => "panic",
            Level::Fatal => "fatal",
        };
        write!(f, "{}", name)
    }
}

/// One log event as seen by the admission filter.
///
/// Entries are owned by the caller and never mutated here. The filter only
/// reads `level` and `logger_name`; `message` and `timestamp` travel through
/// to the downstream sink untouched.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Severity of the event
    pub level: Level,
    /// Dot-segmented hierarchical logger name; "" is the root logger
    pub logger_name: String,
    /// Human-readable message
    pub message: String,
    /// When the event happened
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: Level, logger_name: impl Into<String>) -> Self {
        LogEntry {
            level,
            logger_name: logger_name.into(),
            message: String::new(),
            timestamp: Local::now(),
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }
}

/// A structured key-value pair attached to an entry at write time.
///
/// Built-in filters ignore fields entirely; they exist so that custom
/// predicates (see [`Filter::custom`](crate::filter::Filter::custom)) can
/// inspect them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    pub key: String,
    pub value: Value,
}

impl Field {
    pub fn new(key: impl Into<String>, value: impl Into<Value>) -> Self {
        Field {
            key: key.into(),
            value: value.into(),
        }
    }
}
