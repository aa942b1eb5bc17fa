//! Read-only views a renderer draws from.

use serde::{Deserialize, Serialize};

/// Per-target state, as a hotspot would be coloured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetStatus {
    /// Playing, nothing placed.
    Empty,
    /// Playing, a label is placed.
    Placed,
    /// Finished, placed label matches.
    Correct,
    /// Finished, placed label is wrong or missing.
    Incorrect,
}

impl TargetStatus {
    #[must_use]
    pub fn is_graded(self) -> bool {
        matches!(self, TargetStatus::Correct | TargetStatus::Incorrect)
    }
}

/// Which controls the host should offer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Controls {
    /// Playing and every target holds a label.
    pub validate: bool,
    /// Finished, or playing with abort allowed.
    pub reset: bool,
}

/// How many targets hold a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub placed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn is_complete(self) -> bool {
        self.placed == self.total
    }

    #[must_use]
    pub fn remaining(self) -> usize {
        self.total.saturating_sub(self.placed)
    }
}

impl std::fmt::Display for Progress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.placed, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let progress = Progress { placed: 3, total: 12 };

        assert!(!progress.is_complete());
        assert_eq!(progress.remaining(), 9);
        assert_eq!(progress.to_string(), "3/12");
        assert!(Progress { placed: 12, total: 12 }.is_complete());
    }

    #[test]
    fn test_graded() {
        assert!(!TargetStatus::Empty.is_graded());
        assert!(!TargetStatus::Placed.is_graded());
        assert!(TargetStatus::Correct.is_graded());
        assert!(TargetStatus::Incorrect.is_graded());
    }
}
