//! Core engine types: targets, session state, actions, RNG, configuration.
//!
//! This module contains the building blocks that know nothing about any
//! particular illustration. Activities configure them via `TargetSet` and
//! `MatchConfig` rather than modifying the core.

pub mod action;
pub mod config;
pub mod error;
pub mod rng;
pub mod state;
pub mod target;

pub use action::{Action, ActionOutcome};
pub use config::{MatchConfig, OverwritePolicy, PoolOrder};
pub use error::{MatchError, Result};
pub use rng::{FixedOrder, GameRng, GameRngState, LabelShuffler};
pub use state::{GameSession, Phase};
pub use target::{Point, Target, TargetId, TargetSet};
