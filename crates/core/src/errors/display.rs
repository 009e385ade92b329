//! Display implementations for error types

use super::types::Error;
use std::fmt;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Configuration { message } => {
                write!(f, "configuration error: {message}")
            }
            Error::EventDecode { line, message, .. } => {
                write!(f, "failed to decode event on line {line}: {message}")
            }
            Error::Io { operation, source } => {
                write!(f, "{operation} failed: {source}")
            }
        }
    }
}
