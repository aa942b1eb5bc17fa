//! The matching game engine.
//!
//! `MatchEngine` is a synchronous, single-owner state machine. Every
//! operation takes `&mut self` and completes before returning, so one engine
//! never sees interleaved mutations. Hosts that share an engine across
//! threads wrap it in their own lock.

mod match_engine;
pub mod view;

pub use match_engine::MatchEngine;
pub use view::{Controls, Progress, TargetStatus};
