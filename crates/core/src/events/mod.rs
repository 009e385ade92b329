//! Engine lifecycle events and the line-delimited stream that carries them

mod stream;
pub mod types;

pub use stream::EventStream;
pub use types::{
    DisplayMessage, EngineEvent, TaskEvent, TaskOutcome, TaskResult, UNKNOWN_ERROR,
};
