//! Structured progress rendering for provisioning runs.
//!
//! An orchestration engine reports the lifecycle of a run (plays starting,
//! tasks starting, tasks finishing) as a sequence of events. This crate turns
//! those events into a compact, tree-shaped terminal report in place of the
//! engine's verbose default output.
//!
//! ## Key Components
//!
//! - **`categories`**: maps a task name to an optional phase label through an
//!   ordered, immutable pattern table.
//! - **`simplify`**: shortens task names for the condensed lines of
//!   categorized tasks.
//! - **`state`**: the small record of the active play and task kept between
//!   events.
//! - **`listener`**: the callback surface the engine drives; it updates the
//!   state and delegates formatting.
//! - **`render`**: writes lines, placeholders and in-place overwrites to the
//!   terminal.
//! - **`suppress`**: swallows the engine's generic output.
//! - **`events`**: the wire form of engine events and a line-delimited
//!   stream decoder.

pub mod categories;
pub mod config;
pub mod errors;
pub mod events;
pub mod listener;
pub mod render;
pub mod simplify;
pub mod state;
pub mod suppress;

pub use self::{
    categories::{CategoryRule, PatternSpec, TaskCategories},
    config::ProgressConfig,
    errors::{Error, Result},
    events::{EngineEvent, EventStream, TaskEvent, TaskOutcome, TaskResult},
    listener::{EngineCallbacks, ProgressListener},
    render::{RenderMode, Renderer},
    simplify::NameSimplifier,
    state::{RunState, RunTally},
};
