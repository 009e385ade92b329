//! Listener configuration
//!
//! There is no configuration file; tables are built in code once, before
//! the run starts, and handed to the listener.

use crate::categories::TaskCategories;
use crate::render::RenderMode;
use crate::simplify::NameSimplifier;

/// Immutable settings for one run
#[derive(Debug, Clone, Default)]
pub struct ProgressConfig {
    pub categories: TaskCategories,
    pub simplifier: NameSimplifier,
    pub mode: RenderMode,
}

impl ProgressConfig {
    #[must_use]
    pub fn with_categories(mut self, categories: TaskCategories) -> Self {
        self.categories = categories;
        self
    }

    #[must_use]
    pub fn with_simplifier(mut self, simplifier: NameSimplifier) -> Self {
        self.simplifier = simplifier;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }
}
