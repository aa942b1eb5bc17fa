//! Bone recognition activity.
//!
//! Twelve bones of a front-view skeleton. Labels are the French anatomical
//! names used by the activity:
//! - Drag each label onto the matching hotspot
//! - Click a hotspot to take its label back
//! - Validate once every hotspot holds a label
//!
//! Other skeleton layouts only move the hotspots; pass a different
//! `TargetSet` to `MatchEngine` for those.

mod game;

pub use game::{config, targets, SkeletonGameBuilder, ACTIVITY_ID};
