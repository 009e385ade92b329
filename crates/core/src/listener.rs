//! Event listener driven by the orchestration engine
//!
//! The engine calls one handler at a time, in event order. Handlers update the
//! [`RunState`], ask the categorizer and simplifier how a task should look, and
//! hand the result to the [`Renderer`]. No handler returns an error: a failed
//! write is logged and dropped so the observed run is never interrupted.

use crate::categories::TaskCategories;
use crate::config::ProgressConfig;
use crate::events::{DisplayMessage, EngineEvent, TaskEvent, TaskOutcome, TaskResult};
use crate::render::{Renderer, FAILURE_GLYPH, SUCCESS_GLYPH};
use crate::simplify::NameSimplifier;
use crate::state::{is_silent_task, RunState};
use crate::suppress::SuppressedDisplay;
use serde_json::{Map, Value};
use std::io::{self, Write};
use tracing::{debug, trace, warn};

/// The lifecycle callbacks an engine invokes during a run
pub trait EngineCallbacks {
    fn on_play_start(&mut self, play: &str);

    fn on_task_start(&mut self, task: &str, is_conditional: bool);

    fn on_runner_ok(&mut self, result: &TaskResult);

    fn on_runner_failed(&mut self, result: &TaskResult, ignore_errors: bool);

    fn on_runner_skipped(&mut self, result: &TaskResult);

    fn on_stats(&mut self, stats: &Map<String, Value>);

    /// The engine's generic output sink
    fn display(&mut self, message: &DisplayMessage);

    /// Route a decoded event to its handler
    fn dispatch(&mut self, event: &EngineEvent) {
        match event {
            EngineEvent::PlayStart { name } => self.on_play_start(name),
            EngineEvent::TaskStart {
                name,
                is_conditional,
            } => self.on_task_start(name, *is_conditional),
            EngineEvent::RunnerOk { result } => self.on_runner_ok(result),
            EngineEvent::RunnerFailed {
                result,
                ignore_errors,
            } => self.on_runner_failed(result, *ignore_errors),
            EngineEvent::RunnerSkipped { result } => self.on_runner_skipped(result),
            EngineEvent::Stats { stats } => self.on_stats(stats),
            EngineEvent::Display(message) => self.display(message),
        }
    }
}

/// Renders a run as a compact progress tree
#[derive(Debug)]
pub struct ProgressListener<W: Write> {
    renderer: Renderer<W>,
    categories: TaskCategories,
    simplifier: NameSimplifier,
    suppressed: SuppressedDisplay,
    state: RunState,
}

impl<W: Write> ProgressListener<W> {
    /// Create a listener with the built-in tables in interactive mode
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, ProgressConfig::default())
    }

    pub fn with_config(writer: W, config: ProgressConfig) -> Self {
        Self {
            renderer: Renderer::new(writer, config.mode),
            categories: config.categories,
            simplifier: config.simplifier,
            suppressed: SuppressedDisplay::new(),
            state: RunState::new(),
        }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    /// Number of generic display messages that were suppressed
    pub fn suppressed_messages(&self) -> usize {
        self.suppressed.discarded()
    }

    pub fn writer(&self) -> &W {
        self.renderer.get_ref()
    }

    /// Erase a placeholder left behind by the last task, flush the output and
    /// hand back the final run state
    pub fn finish(&mut self) -> RunState {
        let result = self
            .abandon_placeholder()
            .and_then(|()| self.renderer.flush());
        report(result, "finish");
        self.state.clone()
    }

    pub fn into_writer(self) -> W {
        self.renderer.into_inner()
    }

    fn abandon_placeholder(&mut self) -> io::Result<()> {
        if !self.state.pending_overwrite {
            return Ok(());
        }
        self.state.pending_overwrite = false;
        trace!("clearing placeholder of a task that produced no result line");
        self.renderer.clear_placeholder()
    }
}

impl<W: Write> EngineCallbacks for ProgressListener<W> {
    fn on_play_start(&mut self, play: &str) {
        debug!(play, "play started");
        self.state.current_play = Some(play.to_string());
    }

    fn on_task_start(&mut self, task: &str, _is_conditional: bool) {
        self.state.current_task = Some(task.to_string());
        // Any placeholder still on screen belongs to a task that never completed
        // visibly, so it is cleared even when the new task is itself silent
        report(self.abandon_placeholder(), "task_start");

        if is_silent_task(task) {
            trace!(task, "suppressing internal task");
            return;
        }

        if let Some(category) = self.categories.categorize(task) {
            debug!(task, category, "categorized task, rendering on completion");
            return;
        }

        match self.renderer.placeholder(task) {
            Ok(pending) => self.state.pending_overwrite = pending,
            Err(e) => report(Err(e), "task_start"),
        }
    }

    fn on_runner_ok(&mut self, result: &TaskResult) {
        let Some(task) = self.state.active_task() else {
            return;
        };
        let event = TaskEvent::from_result(task, TaskOutcome::Ok, result, false);
        self.state.tally.ok += 1;
        // Changed and unchanged results share the success glyph
        trace!(task = %event.name, changed = event.changed, "task ok");

        let written = if self.categories.categorize(&event.name).is_some() {
            let display_name = self.simplifier.simplify(&event.name);
            self.renderer.condensed_line(&display_name, SUCCESS_GLYPH)
        } else {
            self.renderer.task_line(&event.name, SUCCESS_GLYPH)
        };
        self.state.pending_overwrite = false;
        report(written, "runner_ok");
    }

    fn on_runner_failed(&mut self, result: &TaskResult, ignore_errors: bool) {
        let Some(task) = self.state.current_task.as_deref().filter(|t| !t.is_empty()) else {
            return;
        };
        if ignore_errors {
            debug!(task, "ignoring failure");
            self.state.tally.ignored += 1;
            return;
        }

        let event = TaskEvent::from_result(task, TaskOutcome::Failed, result, ignore_errors);
        self.state.tally.failed += 1;
        debug!(task = %event.name, error = event.error_message(), "task failed");

        let written = self
            .renderer
            .task_line(&event.name, FAILURE_GLYPH)
            .and_then(|()| self.renderer.error_detail(event.error_message()));
        self.state.pending_overwrite = false;
        report(written, "runner_failed");
    }

    fn on_runner_skipped(&mut self, result: &TaskResult) {
        let Some(task) = self.state.active_task() else {
            return;
        };
        let event = TaskEvent::from_result(task, TaskOutcome::Skipped, result, false);
        trace!(task = %event.name, outcome = ?event.outcome, "task skipped");
        self.state.tally.skipped += 1;
    }

    fn on_stats(&mut self, _stats: &Map<String, Value>) {
        let tally = self.state.tally;
        debug!(
            ok = tally.ok,
            failed = tally.failed,
            ignored = tally.ignored,
            skipped = tally.skipped,
            total = tally.total(),
            "run statistics received"
        );
    }

    fn display(&mut self, message: &DisplayMessage) {
        self.suppressed.discard(message);
    }
}

fn report(result: io::Result<()>, handler: &'static str) {
    if let Err(e) = result {
        warn!(handler, error = %e, "failed to write progress output");
    }
}
