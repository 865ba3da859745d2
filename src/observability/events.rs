//! Observability events for aerofacet
//!
//! Lifecycle events are explicit and typed.

use std::fmt;

/// Observable lifecycle events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Configuration loaded and validated
    ConfigLoaded,
    /// Dataset parsed and validated against its catalog
    DatasetLoaded,
    /// Dataset could not be loaded (FATAL)
    DatasetRejected,
    /// Index ready to serve searches
    IndexReady,
    /// A search request line was rejected
    SearchRejected,
    /// Request stream exhausted
    ServeComplete,
}

impl Event {
    /// Returns the event name as logged
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::DatasetRejected => "DATASET_REJECTED",
            Event::IndexReady => "INDEX_READY",
            Event::SearchRejected => "SEARCH_REJECTED",
            Event::ServeComplete => "SERVE_COMPLETE",
        }
    }

    /// Returns true if this event ends the process
    pub fn is_fatal(&self) -> bool {
        matches!(self, Event::DatasetRejected)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
