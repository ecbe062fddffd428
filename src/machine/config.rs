//! Per-instance machine configuration.

/// Options for a single machine instance.
///
/// The default records every transition. Set `record_history` to `false`
/// for machines that only need state and score, or bound the history with
/// `history_limit` for long-running instances. The score is tracked
/// separately and is never affected by either option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MachineConfig {
    /// Record each applied event in the machine's history
    pub record_history: bool,
    /// Keep at most this many transitions, dropping the oldest first
    pub history_limit: Option<usize>,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self {
            record_history: true,
            history_limit: None,
        }
    }
}

impl MachineConfig {
    /// Configuration that keeps no history at all.
    pub fn without_history() -> Self {
        Self {
            record_history: false,
            history_limit: None,
        }
    }

    /// Keep only the newest `limit` transitions.
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }
}
