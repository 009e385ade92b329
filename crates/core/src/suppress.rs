//! Suppression of the engine's generic output

use crate::events::DisplayMessage;
use tracing::trace;

/// Sink for generic display output that must never reach the terminal.
///
/// Everything the engine would print on its own is dropped here so the
/// progress tree is the only visible report.
#[derive(Debug, Default)]
pub struct SuppressedDisplay {
    discarded: usize,
}

impl SuppressedDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn discard(&mut self, message: &DisplayMessage) {
        self.discarded += 1;
        trace!(
            stderr = message.stderr,
            len = message.msg.len(),
            "suppressed engine display output"
        );
    }

    /// Number of messages dropped so far
    pub fn discarded(&self) -> usize {
        self.discarded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discard_counts_messages() {
        let mut sink = SuppressedDisplay::new();
        sink.discard(&DisplayMessage::raw("TASK [Set hostname] ****"));
        sink.discard(&DisplayMessage::raw("ok: [localhost]"));
        assert_eq!(sink.discarded(), 2);
    }
}
