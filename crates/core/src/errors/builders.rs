//! Builder methods for creating errors with context

use super::types::Error;

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an event decoding error for the given 1-based line number
    #[must_use]
    pub fn event_decode(line: usize, source: serde_json::Error) -> Self {
        Error::EventDecode {
            line,
            message: source.to_string(),
            source,
        }
    }

    /// Create an I/O error tagged with the operation that failed
    #[must_use]
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }
}
