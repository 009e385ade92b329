//! Terminal capability detection for choosing a render mode

use provision_progress_core::RenderMode;
use std::io::{self, IsTerminal};

/// What the report's output stream can do
#[derive(Debug, Clone)]
pub struct TerminalCapabilities {
    /// Whether stdout is attached to a terminal
    pub is_terminal: bool,
    /// Whether a CI system is driving the run
    pub is_ci: bool,
}

impl TerminalCapabilities {
    /// Detect capabilities of the current stdout
    pub fn detect() -> Self {
        Self {
            is_terminal: io::stdout().is_terminal(),
            is_ci: Self::is_ci_environment(),
        }
    }

    /// Whether cursor-return overwrites will display correctly
    pub fn supports_overwrite(&self) -> bool {
        self.is_terminal && !self.is_ci
    }

    /// Pick the render mode, honouring an explicit request
    pub fn recommend_mode(&self, requested: Option<RenderMode>) -> RenderMode {
        if let Some(mode) = requested {
            return mode;
        }

        if self.supports_overwrite() {
            RenderMode::Interactive
        } else {
            RenderMode::Plain
        }
    }

    /// Detect if running in a CI environment
    pub fn is_ci_environment() -> bool {
        // Check common CI environment variables
        std::env::var("CI").is_ok()
            || std::env::var("GITHUB_ACTIONS").is_ok()
            || std::env::var("GITLAB_CI").is_ok()
            || std::env::var("JENKINS_URL").is_ok()
            || std::env::var("BUILDKITE").is_ok()
            || std::env::var("CIRCLECI").is_ok()
            || std::env::var("TRAVIS").is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_request_wins() {
        let caps = TerminalCapabilities {
            is_terminal: false,
            is_ci: true,
        };
        assert_eq!(
            caps.recommend_mode(Some(RenderMode::Interactive)),
            RenderMode::Interactive
        );
    }

    #[test]
    fn test_terminal_outside_ci_is_interactive() {
        let caps = TerminalCapabilities {
            is_terminal: true,
            is_ci: false,
        };
        assert_eq!(caps.recommend_mode(None), RenderMode::Interactive);
    }

    #[test]
    fn test_pipes_and_ci_are_plain() {
        let piped = TerminalCapabilities {
            is_terminal: false,
            is_ci: false,
        };
        let ci = TerminalCapabilities {
            is_terminal: true,
            is_ci: true,
        };
        assert_eq!(piped.recommend_mode(None), RenderMode::Plain);
        assert_eq!(ci.recommend_mode(None), RenderMode::Plain);
    }
}
