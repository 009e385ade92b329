//! Event type definitions

mod display;
mod engine;
mod lenient;
mod task;

pub use display::DisplayMessage;
pub use engine::EngineEvent;
pub use task::{TaskEvent, TaskOutcome, TaskResult, UNKNOWN_ERROR};
