//! Built-in activities.
//!
//! Each activity is a `TargetSet` plus a `MatchConfig`; the engine is the
//! same for all of them.

pub mod skeleton;
