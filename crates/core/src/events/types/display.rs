//! Generic display output from the engine

use serde::{Deserialize, Serialize};

/// A message the engine would print through its default output sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMessage {
    #[serde(default)]
    pub msg: String,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub stderr: bool,
    #[serde(default)]
    pub screen_only: bool,
    #[serde(default)]
    pub log_only: bool,
    #[serde(default = "default_newline")]
    pub newline: bool,
}

fn default_newline() -> bool {
    true
}

impl DisplayMessage {
    /// Wrap a raw line of engine output
    pub fn raw(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            color: None,
            stderr: false,
            screen_only: false,
            log_only: false,
            newline: true,
        }
    }
}
