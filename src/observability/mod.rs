//! Observability subsystem for aerofacet
//!
//! Provides:
//! - Structured logging (JSON lines on stderr)
//! - Counter metrics
//! - Begin/complete scopes with timing
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. The search core never logs or counts; callers do
//! 3. No background threads
//!
//! # Usage
//!
//! ```ignore
//! use aerofacet::observability::{Logger, MetricsRegistry, ObservationScope};
//!
//! Logger::info("SEARCH_COMPLETE", &[("items", "42")]);
//!
//! let metrics = MetricsRegistry::new();
//! metrics.record_search(6, 42);
//!
//! let scope = ObservationScope::new("INDEX_BUILD");
//! // ... do work ...
//! scope.complete();
//! ```

mod events;
mod logger;
mod metrics;
mod scope;

pub use events::Event;
pub use logger::{Logger, Severity};
pub use metrics::{MetricsRegistry, MetricsSnapshot};
pub use scope::{ObservationScope, Timer};

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    let severity = if event.is_fatal() {
        Severity::Fatal
    } else {
        Severity::Info
    };
    Logger::log(severity, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        log_event_with_fields(Event::DatasetLoaded, &[("items", "3")]);
    }
}
