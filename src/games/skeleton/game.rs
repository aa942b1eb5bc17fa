//! Skeleton fixture and builder.

use crate::core::{GameRng, MatchConfig, OverwritePolicy, Result, Target, TargetSet};
use crate::engine::MatchEngine;
use crate::notify::CompletionSink;

/// Activity id reported in completion events.
pub const ACTIVITY_ID: &str = "bone-recognition-game";

const TITLE: &str = "Jeu de Reconnaissance des Os";
const DESCRIPTION: &str = "Glissez les étiquettes vers les os correspondants";

/// (id, label, anchor, line end) on a 400x600 illustration.
const BONES: [(&str, &str, (f32, f32), (f32, f32)); 12] = [
    ("skull", "Crâne", (120.0, 40.0), (200.0, 70.0)),
    ("clavicle", "Clavicule", (80.0, 120.0), (170.0, 140.0)),
    ("sternum", "Sternum", (280.0, 160.0), (200.0, 180.0)),
    ("ribs", "Côtes", (100.0, 200.0), (160.0, 200.0)),
    ("humerus", "Humérus", (80.0, 180.0), (150.0, 200.0)),
    ("radius", "Radius", (60.0, 260.0), (140.0, 280.0)),
    ("ulna", "Cubitus", (40.0, 300.0), (150.0, 300.0)),
    ("spine", "Colonne vertébrale", (320.0, 240.0), (200.0, 260.0)),
    ("pelvis", "Bassin", (300.0, 320.0), (200.0, 340.0)),
    ("femur", "Fémur", (120.0, 380.0), (185.0, 420.0)),
    ("tibia", "Tibia", (100.0, 480.0), (180.0, 500.0)),
    ("fibula", "Péroné", (80.0, 520.0), (195.0, 530.0)),
];

/// The twelve bone targets, in illustration order.
pub fn targets() -> Result<TargetSet> {
    let targets = BONES
        .iter()
        .map(|&(id, label, (ax, ay), (lx, ly))| {
            Target::new(id, label)
                .with_anchor(ax, ay)
                .with_line_end(lx, ly)
        })
        .collect();
    TargetSet::new(targets)
}

/// Default configuration for the bone activity.
#[must_use]
pub fn config() -> MatchConfig {
    MatchConfig::new(ACTIVITY_ID)
        .with_title(TITLE)
        .with_description(DESCRIPTION)
}

/// Builder for a ready-to-play bone activity.
#[derive(Default)]
pub struct SkeletonGameBuilder {
    seed: Option<u64>,
    overwrite_policy: OverwritePolicy,
    allow_abort: bool,
}

impl SkeletonGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the pool order for reproducible sessions.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn overwrite_policy(mut self, policy: OverwritePolicy) -> Self {
        self.overwrite_policy = policy;
        self
    }

    /// Offer reset while still playing.
    pub fn allow_abort(mut self) -> Self {
        self.allow_abort = true;
        self
    }

    /// Build the engine, delivering completion events to `sink`.
    pub fn build<S: CompletionSink>(self, sink: S) -> Result<MatchEngine<S, GameRng>> {
        let mut config = config().with_overwrite_policy(self.overwrite_policy);
        config.seed = self.seed;
        config.allow_abort = self.allow_abort;

        Ok(MatchEngine::new(targets()?, config, sink))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;
    use crate::notify::NullSink;

    #[test]
    fn test_twelve_unique_bones() {
        let set = targets().unwrap();

        assert_eq!(set.len(), 12);
        let mut labels = set.expected_labels();
        labels.sort();
        labels.dedup();
        assert_eq!(labels.len(), 12);
    }

    #[test]
    fn test_fixture_coordinates() {
        let set = targets().unwrap();
        let femur = set.get("femur").unwrap();

        assert_eq!(femur.expected_label, "Fémur");
        assert_eq!((femur.anchor.x, femur.anchor.y), (120.0, 380.0));
        assert_eq!((femur.line_end.x, femur.line_end.y), (185.0, 420.0));
    }

    #[test]
    fn test_config() {
        let config = config();

        assert_eq!(config.activity_id, ACTIVITY_ID);
        assert_eq!(config.title, TITLE);
        assert_eq!(config.overwrite_policy, OverwritePolicy::Discard);
    }

    #[test]
    fn test_builder() {
        let engine = SkeletonGameBuilder::new()
            .seed(42)
            .allow_abort()
            .overwrite_policy(OverwritePolicy::ReturnToPool)
            .build(NullSink)
            .unwrap();

        assert_eq!(engine.phase(), Phase::Playing);
        assert_eq!(engine.pool().len(), 12);
        assert_eq!(engine.config().seed, Some(42));
        assert!(engine.config().allow_abort);
        assert_eq!(engine.config().overwrite_policy, OverwritePolicy::ReturnToPool);
    }
}
