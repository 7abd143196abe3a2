//! Observability for tupledesc
//!
//! Structured JSON logging of descriptor lifecycle events.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on descriptor behavior
//! 3. No async or background threads
//! 4. Deterministic output
//! 5. Silent by default: descriptor events are TRACE, the default threshold is INFO
//!
//! # Usage
//!
//! ```ignore
//! use tupledesc::observability::{Logger, Severity};
//!
//! // Show per-descriptor TRACE events
//! Logger::set_min_severity(Severity::Trace);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

#[cfg(test)]
pub(crate) use logger::capture_events;

/// Severity every descriptor event is logged at
pub const EVENT_SEVERITY: Severity = Severity::Trace;

/// Returns true if descriptor events are written at the current threshold.
pub fn is_enabled() -> bool {
    Logger::enabled(EVENT_SEVERITY)
}

/// Log a lifecycle event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(EVENT_SEVERITY, event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_disabled_by_default() {
        assert!(!is_enabled());
    }

    #[test]
    fn test_events_silent_at_default_threshold() {
        let output = capture_events(Logger::min_severity(), || {
            log_event_with_fields(Event::DescriptorRejected, &[("reason", "empty")]);
        });
        assert!(output.is_empty());
    }

    #[test]
    fn test_events_written_at_trace() {
        let output = capture_events(Severity::Trace, || {
            assert!(is_enabled());
            log_event_with_fields(Event::DescriptorMerged, &[("size", "8")]);
        });

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["event"], "DESCRIPTOR_MERGED");
        assert_eq!(parsed["severity"], "TRACE");
        assert_eq!(parsed["size"], "8");
    }
}
