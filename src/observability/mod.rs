//! Observability subsystem
//!
//! Structured JSON logging for the registry and the decoders.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on decoding results
//! 3. No async or background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use datalist::observability::{Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Info);
//! Logger::info("REGISTRY_BUILT", &[("schemas", "34")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Returns true if the event would reach the output
#[inline]
pub fn event_enabled(event: Event) -> bool {
    Logger::enabled(event.severity())
}

/// Log an event with fields at its own severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event_with_fields() {
        // This just verifies no panic
        log_event_with_fields(Event::RegistryBuilt, &[]);
        log_event_with_fields(Event::EntryUnknownTag, &[("tag", "Mystery")]);
    }
}
