//! Lifecycle events emitted by the orchestration engine

use super::lenient::or_default;
use super::{DisplayMessage, TaskResult};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One lifecycle callback from the engine, as carried on the wire.
///
/// Every field is defaulted when missing, null, or of the wrong type so that
/// a sparse payload still reaches its handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A play has started
    PlayStart {
        #[serde(default, deserialize_with = "or_default")]
        name: String,
    },
    /// A task is about to run
    TaskStart {
        #[serde(default, deserialize_with = "or_default")]
        name: String,
        #[serde(default, deserialize_with = "or_default")]
        is_conditional: bool,
    },
    /// The current task finished successfully
    RunnerOk {
        #[serde(default, deserialize_with = "or_default")]
        result: TaskResult,
    },
    /// The current task failed
    RunnerFailed {
        #[serde(default, deserialize_with = "or_default")]
        result: TaskResult,
        #[serde(default, deserialize_with = "or_default")]
        ignore_errors: bool,
    },
    /// The current task was skipped by a condition
    RunnerSkipped {
        #[serde(default, deserialize_with = "or_default")]
        result: TaskResult,
    },
    /// End-of-run statistics
    Stats {
        #[serde(flatten)]
        stats: Map<String, Value>,
    },
    /// Generic engine output destined for the default display sink
    Display(DisplayMessage),
}

impl EngineEvent {
    /// Wire name of the event, used for logging
    pub fn kind(&self) -> &'static str {
        match self {
            EngineEvent::PlayStart { .. } => "play_start",
            EngineEvent::TaskStart { .. } => "task_start",
            EngineEvent::RunnerOk { .. } => "runner_ok",
            EngineEvent::RunnerFailed { .. } => "runner_failed",
            EngineEvent::RunnerSkipped { .. } => "runner_skipped",
            EngineEvent::Stats { .. } => "stats",
            EngineEvent::Display(_) => "display",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_task_start_without_conditional_flag() {
        let event: EngineEvent =
            serde_json::from_str(r#"{"event":"task_start","name":"Install NVM"}"#).unwrap();
        assert_eq!(
            event,
            EngineEvent::TaskStart {
                name: "Install NVM".to_string(),
                is_conditional: false,
            }
        );
    }

    #[test]
    fn test_decode_runner_failed_with_sparse_payload() {
        let event: EngineEvent = serde_json::from_str(r#"{"event":"runner_failed"}"#).unwrap();
        match event {
            EngineEvent::RunnerFailed {
                result,
                ignore_errors,
            } => {
                assert!(!ignore_errors);
                assert!(result.msg.is_none());
                assert!(!result.changed);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_decode_stats_keeps_extra_fields() {
        let event: EngineEvent =
            serde_json::from_str(r#"{"event":"stats","ok":{"localhost":12}}"#).unwrap();
        match event {
            EngineEvent::Stats { stats } => assert!(stats.contains_key("ok")),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_decode_display_message() {
        let event: EngineEvent =
            serde_json::from_str(r#"{"event":"display","msg":"PLAY [all] ****"}"#).unwrap();
        assert_eq!(event.kind(), "display");
        match event {
            EngineEvent::Display(message) => {
                assert_eq!(message.msg, "PLAY [all] ****");
                assert!(message.newline);
            }
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let event: EngineEvent = serde_json::from_str(
            r#"{"event":"task_start","name":"Copy dotfiles","is_conditional":null}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            EngineEvent::TaskStart {
                name: "Copy dotfiles".to_string(),
                is_conditional: false,
            }
        );

        let event: EngineEvent =
            serde_json::from_str(r#"{"event":"runner_ok","result":null}"#).unwrap();
        assert_eq!(
            event,
            EngineEvent::RunnerOk {
                result: TaskResult::default()
            }
        );
    }

    #[test]
    fn test_mistyped_fields_fall_back_to_defaults() {
        let event: EngineEvent = serde_json::from_str(
            r#"{"event":"runner_failed","result":"boom","ignore_errors":"yes"}"#,
        )
        .unwrap();
        assert_eq!(
            event,
            EngineEvent::RunnerFailed {
                result: TaskResult::default(),
                ignore_errors: false,
            }
        );

        let event: EngineEvent =
            serde_json::from_str(r#"{"event":"play_start","name":42}"#).unwrap();
        assert_eq!(
            event,
            EngineEvent::PlayStart {
                name: String::new()
            }
        );
    }

    #[test]
    fn test_unknown_event_is_rejected() {
        let decoded = serde_json::from_str::<EngineEvent>(r#"{"event":"handler_start"}"#);
        assert!(decoded.is_err());
    }
}
