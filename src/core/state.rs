//! Session state: the label pool, placements, results, and score.
//!
//! `GameSession` is plain data with low-level mutators. It does not check
//! phases or target ids; `MatchEngine` enforces those rules before calling
//! in.
//!
//! Uses `im` persistent collections so `MatchEngine::snapshot` is O(1).

use im::{OrdMap, Vector};
use serde::{Deserialize, Serialize};

use super::config::PoolOrder;
use super::target::TargetId;

/// Coarse engine state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Playing,
    Finished,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Playing => f.write_str("playing"),
            Phase::Finished => f.write_str("finished"),
        }
    }
}

/// One attempt at the activity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    /// Current phase.
    pub phase: Phase,

    /// Labels not yet placed, in display order.
    pool: Vector<String>,

    /// Target id -> placed label.
    placements: OrdMap<TargetId, String>,

    /// Target id -> correctness. Empty until validated.
    results: OrdMap<TargetId, bool>,

    /// Percentage score. Zero until validated.
    score: u8,
}

impl GameSession {
    /// Create a session whose pool is `labels`, in the given order.
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            phase: Phase::Playing,
            pool: labels.into_iter().collect(),
            placements: OrdMap::new(),
            results: OrdMap::new(),
            score: 0,
        }
    }

    // === Pool ===

    #[must_use]
    pub fn pool(&self) -> &Vector<String> {
        &self.pool
    }

    #[must_use]
    pub fn pool_contains(&self, label: &str) -> bool {
        self.pool.iter().any(|l| l == label)
    }

    /// Remove one occurrence of `label` from the pool.
    ///
    /// Returns true if the label was found and removed.
    pub fn take_from_pool(&mut self, label: &str) -> bool {
        if let Some(pos) = self.pool.iter().position(|l| l == label) {
            self.pool.remove(pos);
            true
        } else {
            false
        }
    }

    /// Put a label back into the pool.
    pub fn return_to_pool(&mut self, label: String, order: PoolOrder) {
        self.pool.push_back(label);
        if order == PoolOrder::SortOnReturn {
            self.pool.sort();
        }
    }

    // === Placements ===

    #[must_use]
    pub fn placements(&self) -> &OrdMap<TargetId, String> {
        &self.placements
    }

    #[must_use]
    pub fn placement(&self, target: &str) -> Option<&str> {
        self.placements.get(target).map(String::as_str)
    }

    /// Place a label, returning whatever was there before.
    pub fn set_placement(&mut self, target: TargetId, label: String) -> Option<String> {
        self.placements.insert(target, label)
    }

    /// Clear a target, returning its label.
    pub fn remove_placement(&mut self, target: &str) -> Option<String> {
        self.placements.remove(target)
    }

    #[must_use]
    pub fn placed_count(&self) -> usize {
        self.placements.len()
    }

    // === Results ===

    #[must_use]
    pub fn results(&self) -> &OrdMap<TargetId, bool> {
        &self.results
    }

    #[must_use]
    pub fn result(&self, target: &str) -> Option<bool> {
        self.results.get(target).copied()
    }

    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }

    /// Record validation results and move to `Finished`.
    pub fn finish(&mut self, results: OrdMap<TargetId, bool>, score: u8) {
        self.results = results;
        self.score = score;
        self.phase = Phase::Finished;
    }
}
