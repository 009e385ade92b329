//! Task results and the normalized task event

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Message shown when a failed result carries no `msg`
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Outcome of a single task run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskOutcome {
    Ok,
    Failed,
    Skipped,
}

/// The result payload attached to a runner event.
///
/// Decoding is lenient: `changed` and `msg` fall back to their defaults when
/// absent or of an unexpected type, and every other key is kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct TaskResult {
    pub changed: bool,
    pub msg: Option<String>,
    pub extra: Map<String, Value>,
}

impl TaskResult {
    /// A successful result
    pub fn ok(changed: bool) -> Self {
        Self {
            changed,
            ..Self::default()
        }
    }

    /// A failed result carrying an error message
    pub fn failed(msg: impl Into<String>) -> Self {
        Self {
            msg: Some(msg.into()),
            ..Self::default()
        }
    }
}

impl From<Map<String, Value>> for TaskResult {
    fn from(mut extra: Map<String, Value>) -> Self {
        let changed = extra
            .remove("changed")
            .and_then(|v| v.as_bool())
            .unwrap_or(false);
        let msg = match extra.remove("msg") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s),
            Some(other) => Some(other.to_string()),
        };
        Self { changed, msg, extra }
    }
}

impl From<TaskResult> for Map<String, Value> {
    fn from(result: TaskResult) -> Self {
        let mut map = result.extra;
        map.insert("changed".to_string(), Value::Bool(result.changed));
        if let Some(msg) = result.msg {
            map.insert("msg".to_string(), Value::String(msg));
        }
        map
    }
}

/// A completed task, normalized from a runner event and the current task name.
///
/// Built once per runner event and dropped after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskEvent {
    pub name: String,
    pub outcome: TaskOutcome,
    pub changed: bool,
    pub error_message: Option<String>,
    pub ignore_errors: bool,
}

impl TaskEvent {
    /// Normalize a runner result for the named task
    pub fn from_result(
        name: impl Into<String>,
        outcome: TaskOutcome,
        result: &TaskResult,
        ignore_errors: bool,
    ) -> Self {
        Self {
            name: name.into(),
            outcome,
            changed: result.changed,
            error_message: result.msg.clone(),
            ignore_errors,
        }
    }

    /// The error message, or the fixed placeholder when the engine sent none
    pub fn error_message(&self) -> &str {
        self.error_message.as_deref().unwrap_or(UNKNOWN_ERROR)
    }
}
