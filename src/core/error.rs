//! Error taxonomy for engine operations and fixture loading.
//!
//! Every engine error is a caller-contract violation: the session is left
//! exactly as it was before the rejected call, and nothing is retryable.

use super::state::Phase;
use super::target::TargetId;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, MatchError>;

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// The operation referenced a target that is not in the fixed target set.
    #[error("unknown target: {0}")]
    InvalidTarget(TargetId),

    /// The operation is not allowed in the current phase.
    #[error("{operation} is not allowed while {phase}")]
    PreconditionViolation {
        operation: &'static str,
        phase: Phase,
    },

    /// Unplace was requested on a target that holds no label.
    #[error("no label placed on target: {0}")]
    NotPlaced(TargetId),

    /// The label is not currently in the pool of unplaced labels.
    #[error("label not available in pool: {0}")]
    LabelNotAvailable(String),

    #[error("target set must contain at least one target")]
    EmptyTargetSet,

    #[error("duplicate target id: {0}")]
    DuplicateTarget(TargetId),

    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl MatchError {
    /// Whether this error came from misusing a live session (as opposed to
    /// building one from bad fixtures).
    #[must_use]
    pub fn is_session_error(&self) -> bool {
        matches!(
            self,
            MatchError::InvalidTarget(_)
                | MatchError::PreconditionViolation { .. }
                | MatchError::NotPlaced(_)
                | MatchError::LabelNotAvailable(_)
        )
    }
}
