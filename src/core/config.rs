//! Activity configuration.
//!
//! Hosts configure an activity at startup by providing a `MatchConfig`,
//! either built in code:
//!
//! ```
//! use hotspot_match::core::{MatchConfig, OverwritePolicy};
//!
//! let config = MatchConfig::new("bone-quiz")
//!     .with_title("Bone quiz")
//!     .with_overwrite_policy(OverwritePolicy::ReturnToPool)
//!     .with_seed(7);
//! assert_eq!(config.seed, Some(7));
//! ```
//!
//! or loaded from JSON with [`MatchConfig::from_json`]. Every field has a
//! default, so a partial document is enough.

use serde::{Deserialize, Serialize};

use super::error::Result;

/// What happens to a label already on a target when another label is
/// dropped onto it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverwritePolicy {
    /// The displaced label is dropped and no longer available.
    #[default]
    Discard,
    /// The displaced label goes back into the pool.
    ReturnToPool,
}

/// How labels are reinserted into the pool.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolOrder {
    /// Append, then sort the whole pool alphabetically.
    #[default]
    SortOnReturn,
    /// Append, keeping the shuffled order of the rest.
    Append,
}

/// Configuration for one matching activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    /// Identifies this activity in completion notifications.
    pub activity_id: String,

    /// Human-readable title (for display).
    pub title: String,

    /// Optional instructions shown under the title.
    pub description: Option<String>,

    pub overwrite_policy: OverwritePolicy,

    pub pool_order: PoolOrder,

    /// Allow `reset` while still playing (abandon the attempt).
    pub allow_abort: bool,

    /// Seed for the default shuffler. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            activity_id: "matching-game".to_string(),
            title: "Matching game".to_string(),
            description: None,
            overwrite_policy: OverwritePolicy::default(),
            pool_order: PoolOrder::default(),
            allow_abort: false,
            seed: None,
        }
    }
}

impl MatchConfig {
    /// Create a configuration for the given activity id.
    pub fn new(activity_id: impl Into<String>) -> Self {
        Self {
            activity_id: activity_id.into(),
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn with_overwrite_policy(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite_policy = policy;
        self
    }

    #[must_use]
    pub fn with_pool_order(mut self, order: PoolOrder) -> Self {
        self.pool_order = order;
        self
    }

    #[must_use]
    pub fn with_abort(mut self) -> Self {
        self.allow_abort = true;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = MatchConfig::default();

        assert_eq!(config.overwrite_policy, OverwritePolicy::Discard);
        assert_eq!(config.pool_order, PoolOrder::SortOnReturn);
        assert!(!config.allow_abort);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_builder() {
        let config = MatchConfig::new("quiz")
            .with_title("Quiz")
            .with_description("Drag the labels")
            .with_pool_order(PoolOrder::Append)
            .with_abort();

        assert_eq!(config.activity_id, "quiz");
        assert_eq!(config.title, "Quiz");
        assert_eq!(config.description.as_deref(), Some("Drag the labels"));
        assert_eq!(config.pool_order, PoolOrder::Append);
        assert!(config.allow_abort);
    }

    #[test]
    fn test_from_partial_json() {
        let config = MatchConfig::from_json(
            r#"{"activityId": "bones", "overwritePolicy": "return_to_pool", "seed": 3}"#,
        )
        .unwrap();

        assert_eq!(config.activity_id, "bones");
        assert_eq!(config.overwrite_policy, OverwritePolicy::ReturnToPool);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.title, "Matching game");
    }

    #[test]
    fn test_from_bad_json() {
        assert!(MatchConfig::from_json(r#"{"poolOrder": "random"}"#).is_err());
    }
}
