//! Core error type definitions

/// Result type alias for progress operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the fallible edges of the renderer.
///
/// Event handlers never return these; they are raised while building
/// configuration tables and while reading the event stream.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid category table or simplifier configuration
    Configuration { message: String },

    /// A line of the event stream could not be decoded
    EventDecode {
        line: usize,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Reading events or writing the report failed
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}
