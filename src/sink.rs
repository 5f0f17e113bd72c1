//! The downstream sink contract and the filtering decorator

use crate::entry::{Field, Level, LogEntry};
use crate::filter::Filter;
use std::io;
use std::sync::Arc;

/// A downstream log sink: anything that can accept entries.
///
/// This crate never formats, encodes, or persists entries itself; it calls
/// these four methods on the wrapped sink and nothing else. Implementations
/// must be `Send + Sync` so a single sink can serve concurrent callers.
pub trait Sink: Send + Sync {
    /// Whether the sink wants entries at this level at all.
    fn enabled(&self, level: Level) -> bool;

    /// Write one entry with its structured fields.
    fn write(&self, entry: &LogEntry, fields: &[Field]) -> io::Result<()>;

    /// A sink that attaches these fields to every future write.
    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Sink>;

    /// Flush buffered entries, if the sink buffers.
    fn flush(&self) -> io::Result<()>;
}

/// A sink decorator that forwards an entry only when its filter admits it.
///
/// The decorator implements [`Sink`] itself, so filtering sinks chain: a
/// `FilteringSink` can wrap another `FilteringSink`. Rejected writes return
/// `Ok(())` without touching the downstream sink; admitted writes return the
/// downstream result verbatim.
#[derive(Clone)]
pub struct FilteringSink {
    next: Arc<dyn Sink>,
    filter: Arc<Filter>,
}

impl std::fmt::Debug for FilteringSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilteringSink")
            .field("filter", &self.filter)
            .finish_non_exhaustive()
    }
}

impl FilteringSink {
    pub fn new(next: Arc<dyn Sink>, filter: Filter) -> Self {
        FilteringSink {
            next,
            filter: Arc::new(filter),
        }
    }

    /// Cheap pre-write admission check, evaluated with an empty field set.
    ///
    /// Use this to gate expensive field computation before calling
    /// [`write`](Sink::write). Note that [`enabled`](Sink::enabled) delegates
    /// to the downstream sink unfiltered; manual admission checks must go
    /// through here to respect namespace rules.
    pub fn check(&self, entry: &LogEntry) -> bool {
        self.filter.evaluate(entry, &[])
    }

    /// Whether any level at all is admitted for this logger name.
    ///
    /// Probes every suppressible level through [`check`](Self::check); panic
    /// and fatal are skipped because they cannot be filtered away in
    /// practice.
    pub fn check_any_level(&self, logger_name: &str) -> bool {
        Level::all()
            .into_iter()
            .filter(|level| *level < Level::Panic)
            .any(|level| self.check(&LogEntry::new(level, logger_name)))
    }
}

impl Sink for FilteringSink {
    /// Delegates unfiltered: the level gate belongs to the downstream sink,
    /// the rule-based gate to [`check`](FilteringSink::check).
    fn enabled(&self, level: Level) -> bool {
        self.next.enabled(level)
    }

    fn write(&self, entry: &LogEntry, fields: &[Field]) -> io::Result<()> {
        if !self.filter.evaluate(entry, fields) {
            return Ok(());
        }
        self.next.write(entry, fields)
    }

    fn with_fields(&self, fields: &[Field]) -> Arc<dyn Sink> {
        Arc::new(FilteringSink {
            next: self.next.with_fields(fields),
            filter: Arc::clone(&self.filter),
        })
    }

    fn flush(&self) -> io::Result<()> {
        self.next.flush()
    }
}

/// A sink that accepts and discards everything. Useful as a chain terminator
/// and in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl Sink for NoopSink {
    fn enabled(&self, _level: Level) -> bool {
        true
    }

    fn write(&self, _entry: &LogEntry, _fields: &[Field]) -> io::Result<()> {
        Ok(())
    }

    fn with_fields(&self, _fields: &[Field]) -> Arc<dyn Sink> {
        Arc::new(NoopSink)
    }

    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}
