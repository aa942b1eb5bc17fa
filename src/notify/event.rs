//! The completion event.
//!
//! Serialized field names follow the host protocol (`type`, `blockId`,
//! `maxScore`) so a host can forward the JSON unchanged.

use serde::{Deserialize, Serialize};

use crate::scoring::MAX_SCORE;

/// Tag identifying a completion event.
pub const COMPLETION_KIND: &str = "BLOCK_COMPLETION";

/// One-shot notification that an activity finished.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionEvent {
    /// Always [`COMPLETION_KIND`].
    #[serde(rename = "type")]
    pub kind: String,

    /// The activity that finished.
    #[serde(rename = "blockId")]
    pub activity_id: String,

    /// Always true when emitted.
    pub completed: bool,

    /// Percentage score.
    pub score: u8,

    /// Always [`MAX_SCORE`].
    #[serde(rename = "maxScore")]
    pub max_score: u8,
}

impl CompletionEvent {
    /// Build the event for a finished activity.
    pub fn finished(activity_id: impl Into<String>, score: u8) -> Self {
        Self {
            kind: COMPLETION_KIND.to_string(),
            activity_id: activity_id.into(),
            completed: true,
            score,
            max_score: MAX_SCORE,
        }
    }

    /// Render as a JSON object, as posted to the host.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
