//! # hotspot-match
//!
//! A drag-and-drop label matching engine for educational activities: the
//! player drags term labels onto hotspots of an illustration, then asks for
//! a score.
//!
//! ## Design Principles
//!
//! 1. **Rendering-Agnostic**: The engine never draws. Hosts feed it discrete
//!    inputs (label dropped on target, target clicked, validate, reset) and
//!    read state back.
//!
//! 2. **Injected Edges**: Randomness (`LabelShuffler`) and the completion
//!    notification (`CompletionSink`) are supplied at construction, never
//!    reached for globally.
//!
//! 3. **Configuration Over Convention**: Activities differ only in their
//!    `TargetSet` and `MatchConfig`; the engine is shared.
//!
//! ## Modules
//!
//! - `core`: Targets, session state, actions, RNG, configuration, errors
//! - `scoring`: Percentage scores and feedback bands
//! - `notify`: Completion event and sinks
//! - `engine`: The `MatchEngine` state machine and renderer views
//! - `games`: Built-in activities

pub mod core;
pub mod scoring;
pub mod notify;
pub mod engine;
pub mod games;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionOutcome,
    GameRng, GameRngState, LabelShuffler, FixedOrder,
    MatchConfig, OverwritePolicy, PoolOrder,
    MatchError, Result,
    GameSession, Phase,
    Point, Target, TargetId, TargetSet,
};

pub use crate::scoring::{percentage, score_message, ScoreBand, MAX_SCORE};

pub use crate::notify::{
    CompletionEvent, CompletionSink, COMPLETION_KIND,
    CollectingSink, HostRelay, JsonLineSink, NullSink,
};

pub use crate::engine::{Controls, MatchEngine, Progress, TargetStatus};
