//! Observable events
//!
//! Every log line names one of these events.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Configuration
    /// Configuration loaded
    ConfigLoaded,

    // CLI conversions
    /// Conversion started
    ConvertStart,
    /// Conversion finished
    ConvertComplete,

    // Codec
    /// Record decoded from a projection
    RecordDecoded,
    /// Record encoded into a projection
    RecordEncoded,
    /// Input did not match the record schema
    DecodeFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ConfigLoaded => "CONFIG_LOADED",
            Event::ConvertStart => "CONVERT_BEGIN",
            Event::ConvertComplete => "CONVERT_COMPLETE",
            Event::RecordDecoded => "RECORD_DECODED",
            Event::RecordEncoded => "RECORD_ENCODED",
            Event::DecodeFailed => "DECODE_FAILED",
        }
    }

    /// Default severity for this event
    pub fn severity(&self) -> Severity {
        match self {
            Event::RecordDecoded | Event::RecordEncoded => Severity::Trace,
            Event::DecodeFailed => Severity::Warn,
            _ => Severity::Info,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Event; 6] = [
        Event::ConfigLoaded,
        Event::ConvertStart,
        Event::ConvertComplete,
        Event::RecordDecoded,
        Event::RecordEncoded,
        Event::DecodeFailed,
    ];

    #[test]
    fn test_event_names_unique() {
        let names: HashSet<&str> = ALL.iter().map(|e| e.as_str()).collect();
        assert_eq!(names.len(), ALL.len());
    }

    #[test]
    fn test_event_severity() {
        assert_eq!(Event::DecodeFailed.severity(), Severity::Warn);
        assert_eq!(Event::RecordDecoded.severity(), Severity::Trace);
        assert_eq!(Event::ConfigLoaded.severity(), Severity::Info);
    }
}
