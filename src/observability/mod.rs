//! Observability subsystem for company-api
//!
//! - Typed events (`Event`)
//! - An injected event log (`EventLog`), never a process-wide logger
//! - Installation of the JSON `tracing` subscriber used in production
//!
//! # Usage
//!
//! ```ignore
//! use company_api::observability::{Event, EventLog, TracingEventLog};
//!
//! let log = TracingEventLog::shared();
//! log.info(Event::CompanyCreated, &[("id", "c-1"), ("name", "Acme")]);
//! ```

mod events;
mod logger;
mod subscriber;

pub use events::Event;
pub use logger::{
    EventLog, LogRecord, MemoryEventLog, Severity, SharedEventLog, TracingEventLog,
};
pub use subscriber::init_logging;

use std::fmt;
use std::io;

/// Observability error
///
/// Raised only while installing logging at boot. Emitting an event never fails.
#[derive(Debug)]
pub struct ObservabilityError {
    message: String,
    source: Option<io::Error>,
}

impl ObservabilityError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            message: message.into(),
            source: Some(source),
        }
    }
}

impl fmt::Display for ObservabilityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref source) = self.source {
            write!(f, " (caused by: {})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for ObservabilityError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for observability setup
pub type ObservabilityResult<T> = Result<T, ObservabilityError>;
