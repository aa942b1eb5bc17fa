//! Player actions.
//!
//! Each variant mirrors one discrete input from the presentation layer:
//!
//! | input | action |
//! |---|---|
//! | drag of label L ended over target T | `Place { label: L, target: T }` |
//! | target T activated while playing | `Unplace { target: T }` |
//! | validate requested | `Validate` |
//! | reset requested | `Reset` |

use serde::{Deserialize, Serialize};

use super::target::TargetId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    Place { label: String, target: TargetId },
    Unplace { target: TargetId },
    Validate,
    Reset,
}

impl Action {
    /// Convenience constructor for a placement.
    pub fn place(label: impl Into<String>, target: impl Into<String>) -> Self {
        Action::Place {
            label: label.into(),
            target: TargetId::new(target),
        }
    }

    /// Convenience constructor for a removal.
    pub fn unplace(target: impl Into<String>) -> Self {
        Action::Unplace {
            target: TargetId::new(target),
        }
    }

    /// Operation name, as used in logs and error messages.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Action::Place { .. } => "place",
            Action::Unplace { .. } => "unplace",
            Action::Validate => "validate",
            Action::Reset => "reset",
        }
    }
}

/// What an applied action did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Label placed. Carries the label it displaced, if any.
    Placed { displaced: Option<String> },
    /// Label removed from a target and returned to the pool.
    Unplaced { label: String },
    /// Session finished with this score.
    Validated { score: u8 },
    /// Session reinitialised.
    Reset,
}
