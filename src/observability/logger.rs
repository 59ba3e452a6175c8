//! Injected event log
//!
//! Store and service code never log through a global. They receive a
//! `SharedEventLog` and report typed events with key/value fields:
//! - `TracingEventLog` forwards to `tracing` (production)
//! - `MemoryEventLog` keeps records in memory (tests)

use std::fmt;
use std::sync::{Arc, Mutex};

use super::events::Event;

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Normal operations
    Info = 0,
    /// Expected misses, e.g. unknown ids
    Warn = 1,
    /// Operation failures
    Error = 2,
}

impl Severity {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sink for structured events
pub trait EventLog: Send + Sync {
    /// Record one event. Must not fail; logging never interrupts an operation.
    fn log(&self, severity: Severity, event: Event, fields: &[(&str, &str)]);

    fn info(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Info, event, fields);
    }

    fn warn(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Warn, event, fields);
    }

    fn error(&self, event: Event, fields: &[(&str, &str)]) {
        self.log(Severity::Error, event, fields);
    }
}

/// Event log shared between layers
pub type SharedEventLog = Arc<dyn EventLog>;

/// Forwards events to the `tracing` subscriber installed at boot
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventLog;

impl TracingEventLog {
    pub fn shared() -> SharedEventLog {
        Arc::new(Self)
    }
}

/// Renders fields as `key=value` pairs, sorted by key for stable output
struct Fields<'a>(&'a [(&'a str, &'a str)]);

impl fmt::Display for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sorted: Vec<_> = self.0.iter().collect();
        sorted.sort_by_key(|(k, _)| *k);
        for (i, (key, value)) in sorted.into_iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}={:?}", key, value)?;
        }
        Ok(())
    }
}

impl EventLog for TracingEventLog {
    fn log(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        let event = event.as_str();
        let fields = Fields(fields);
        match severity {
            Severity::Info => tracing::info!(event, %fields),
            Severity::Warn => tracing::warn!(event, %fields),
            Severity::Error => tracing::error!(event, %fields),
        }
    }
}

/// One captured event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub event: Event,
    pub fields: Vec<(String, String)>,
}

impl LogRecord {
    /// Value of a field, if present
    pub fn field(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// In-memory event log for testing
#[derive(Debug, Default, Clone)]
pub struct MemoryEventLog {
    records: Arc<Mutex<Vec<LogRecord>>>,
}

impl MemoryEventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records carrying the given event
    pub fn events(&self, event: Event) -> Vec<LogRecord> {
        self.lock()
            .iter()
            .filter(|r| r.event == event)
            .cloned()
            .collect()
    }

    /// True if the event was logged at least once
    pub fn contains(&self, event: Event) -> bool {
        self.lock().iter().any(|r| r.event == event)
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<LogRecord>> {
        // A panic while holding the lock cannot leave a Vec half-pushed.
        self.records.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventLog for MemoryEventLog {
    fn log(&self, severity: Severity, event: Event, fields: &[(&str, &str)]) {
        self.lock().push(LogRecord {
            severity,
            event,
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        });
    }
}
