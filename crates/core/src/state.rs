//! Mutable run state owned by the listener

/// Name prefix of the engine's internal fact-gathering step
pub const FACT_GATHERING_TASK: &str = "Gathering Facts";

/// Per-outcome counters for the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTally {
    pub ok: usize,
    pub failed: usize,
    /// Failures the engine was told to ignore
    pub ignored: usize,
    pub skipped: usize,
}

impl RunTally {
    pub fn total(&self) -> usize {
        self.ok + self.failed + self.ignored + self.skipped
    }
}

/// What the listener remembers between events
#[derive(Debug, Clone, Default)]
pub struct RunState {
    pub current_play: Option<String>,
    /// Name from the most recent task-start, until the next one replaces it
    pub current_task: Option<String>,
    /// A placeholder line is on screen without its trailing newline
    pub pending_overwrite: bool,
    pub tally: RunTally,
}

impl RunState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current task, unless it is absent, empty, or the fact-gathering step
    pub fn active_task(&self) -> Option<&str> {
        self.current_task
            .as_deref()
            .filter(|name| !is_silent_task(name))
    }
}

/// Tasks that never produce output
pub fn is_silent_task(name: &str) -> bool {
    name.is_empty() || name.starts_with(FACT_GATHERING_TASK)
}
