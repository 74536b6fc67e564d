//! Observability
//!
//! Structured JSON-line logging with typed events.
//!
//! # Usage
//!
//! ```ignore
//! use fixture_schema::observability::{log_event_with_fields, Event, Logger, Severity};
//!
//! Logger::set_min_severity(Severity::Warn);
//! log_event_with_fields(Event::DecodeFailed, &[("path", "current_data.date")]);
//! ```

mod events;
mod logger;

use std::io::{self, Write};

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a lifecycle event with fields at its default severity
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    write_event(event, fields, &mut io::stderr());
}

fn write_event<W: Write>(event: Event, fields: &[(&str, &str)], writer: &mut W) {
    Logger::log_to(event.severity(), event.as_str(), fields, writer);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(event: Event, fields: &[(&str, &str)]) -> String {
        let mut buffer = Vec::new();
        write_event(event, fields, &mut buffer);
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_event_line_uses_name_and_default_severity() {
        let line = captured(Event::DecodeFailed, &[("path", "current_data.date"), ("record", "GeneralFixtureData")]);

        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed["event"], "DECODE_FAILED");
        assert_eq!(parsed["severity"], "WARN");
        assert_eq!(parsed["path"], "current_data.date");
        assert_eq!(parsed["record"], "GeneralFixtureData");
    }

    #[test]
    fn test_trace_events_filtered_at_default_floor() {
        // Nothing in the test suite lowers the floor below INFO.
        assert!(captured(Event::RecordDecoded, &[("record", "Lineup")]).is_empty());
        assert!(captured(Event::ConvertStart, &[]).starts_with("{\"event\":\"CONVERT_BEGIN\""));
    }
}
