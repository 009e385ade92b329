//! Error types for progress rendering

mod builders;
mod conversions;
mod display;
mod types;

pub use types::{Error, Result};
