//! Conversion implementations for error types

use super::types::Error;

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io {
            operation: "terminal I/O".to_string(),
            source: error,
        }
    }
}
