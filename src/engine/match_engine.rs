//! The matching game state machine.

use im::{OrdMap, Vector};
use tracing::{debug, info, warn};

use crate::core::{
    Action, ActionOutcome, GameRng, GameSession, LabelShuffler, MatchConfig, MatchError,
    OverwritePolicy, Phase, Result, Target, TargetId, TargetSet,
};
use crate::notify::{CompletionEvent, CompletionSink};
use crate::scoring::{self, ScoreBand};

use super::view::{Controls, Progress, TargetStatus};

/// Drives one matching activity.
///
/// Owns the fixed `TargetSet`, the current `GameSession`, the sink that
/// receives the completion event, and the shuffler that orders the pool.
///
/// ## Lifecycle
///
/// ```text
/// Playing --validate--> Finished --reset--> Playing
/// ```
///
/// `place` and `unplace` are only accepted while playing. `validate` emits
/// one `CompletionEvent`; `reset` emits nothing.
///
/// Every method that returns `Err` leaves the session untouched.
pub struct MatchEngine<S, R = GameRng> {
    targets: TargetSet,
    config: MatchConfig,
    session: GameSession,
    sink: S,
    shuffler: R,
}

impl<S: CompletionSink> MatchEngine<S, GameRng> {
    /// Create an engine with the default shuffler.
    ///
    /// Seeds from `config.seed` when set, otherwise from entropy.
    pub fn new(targets: TargetSet, config: MatchConfig, sink: S) -> Self {
        let rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
        Self::with_shuffler(targets, config, sink, rng)
    }
}

impl<S: CompletionSink, R: LabelShuffler> MatchEngine<S, R> {
    /// Create an engine with an explicit shuffler.
    pub fn with_shuffler(targets: TargetSet, config: MatchConfig, sink: S, mut shuffler: R) -> Self {
        let session = fresh_session(&targets, &mut shuffler);
        debug!(
            activity_id = %config.activity_id,
            targets = targets.len(),
            "created matching session"
        );
        Self {
            targets,
            config,
            session,
            sink,
            shuffler,
        }
    }

    // === Operations ===

    /// Drop `label` onto `target`.
    ///
    /// Consumes one occurrence of the label from the pool. Returns the label
    /// that was on the target before, if any; what happens to it depends on
    /// `MatchConfig::overwrite_policy`.
    pub fn place(&mut self, label: &str, target: &str) -> Result<Option<String>> {
        self.require_phase("place", Phase::Playing)?;
        let target_id = self.require_target(target)?.id.clone();

        if !self.session.take_from_pool(label) {
            warn!(label, target_id = target, "label not available in pool");
            return Err(MatchError::LabelNotAvailable(label.to_string()));
        }

        let displaced = self.session.set_placement(target_id, label.to_string());
        if let Some(old) = &displaced {
            match self.config.overwrite_policy {
                OverwritePolicy::Discard => {
                    debug!(target_id = target, discarded = %old, "overwrote placed label");
                }
                OverwritePolicy::ReturnToPool => {
                    self.session.return_to_pool(old.clone(), self.config.pool_order);
                }
            }
        }

        debug!(label, target_id = target, pool = self.session.pool().len(), "placed label");
        Ok(displaced)
    }

    /// Take the label off `target` and return it to the pool.
    pub fn unplace(&mut self, target: &str) -> Result<String> {
        self.require_phase("unplace", Phase::Playing)?;
        let target_id = self.require_target(target)?.id.clone();

        let Some(label) = self.session.remove_placement(target) else {
            return Err(MatchError::NotPlaced(target_id));
        };
        self.session
            .return_to_pool(label.clone(), self.config.pool_order);

        debug!(label = %label, target_id = target, pool = self.session.pool().len(), "removed label");
        Ok(label)
    }

    /// Grade every target, finish the session, and notify the host.
    ///
    /// Empty targets count as incorrect. Returns the score.
    pub fn validate(&mut self) -> Result<u8> {
        self.require_phase("validate", Phase::Playing)?;

        let mut results = OrdMap::new();
        let mut correct = 0;
        for target in &self.targets {
            let is_correct = self.session.placement(target.id.as_str())
                == Some(target.expected_label.as_str());
            if is_correct {
                correct += 1;
            }
            results.insert(target.id.clone(), is_correct);
        }

        let score = scoring::percentage(correct, self.targets.len());
        self.session.finish(results, score);

        info!(
            activity_id = %self.config.activity_id,
            score,
            correct,
            total = self.targets.len(),
            "activity finished"
        );

        let event = CompletionEvent::finished(self.config.activity_id.clone(), score);
        self.sink.notify(&event);

        Ok(score)
    }

    /// Start over with a freshly shuffled pool.
    ///
    /// Only allowed once finished, unless `MatchConfig::allow_abort` is set.
    pub fn reset(&mut self) -> Result<()> {
        if !self.config.allow_abort {
            self.require_phase("reset", Phase::Finished)?;
        }

        let previous = self.session.phase;
        self.session = fresh_session(&self.targets, &mut self.shuffler);

        info!(activity_id = %self.config.activity_id, from = %previous, "session reset");
        Ok(())
    }

    /// Apply a presentation input.
    pub fn apply(&mut self, action: &Action) -> Result<ActionOutcome> {
        match action {
            Action::Place { label, target } => {
                let displaced = self.place(label, target.as_str())?;
                Ok(ActionOutcome::Placed { displaced })
            }
            Action::Unplace { target } => {
                let label = self.unplace(target.as_str())?;
                Ok(ActionOutcome::Unplaced { label })
            }
            Action::Validate => {
                let score = self.validate()?;
                Ok(ActionOutcome::Validated { score })
            }
            Action::Reset => {
                self.reset()?;
                Ok(ActionOutcome::Reset)
            }
        }
    }

    /// Every action the engine would currently accept.
    ///
    /// Place actions are listed once per distinct pool label and target.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::new();

        match self.session.phase {
            Phase::Playing => {
                let mut labels: Vec<&String> = Vec::new();
                for label in self.session.pool() {
                    if !labels.contains(&label) {
                        labels.push(label);
                    }
                }

                for label in labels {
                    for target in &self.targets {
                        actions.push(Action::Place {
                            label: label.clone(),
                            target: target.id.clone(),
                        });
                    }
                }

                for target in self.session.placements().keys() {
                    actions.push(Action::Unplace {
                        target: target.clone(),
                    });
                }

                actions.push(Action::Validate);
                if self.config.allow_abort {
                    actions.push(Action::Reset);
                }
            }
            Phase::Finished => actions.push(Action::Reset),
        }

        actions
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.session.phase
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.session.phase == Phase::Finished
    }

    /// Unplaced labels, in display order.
    #[must_use]
    pub fn pool(&self) -> &Vector<String> {
        self.session.pool()
    }

    #[must_use]
    pub fn placements(&self) -> &OrdMap<TargetId, String> {
        self.session.placements()
    }

    #[must_use]
    pub fn placement(&self, target: &str) -> Option<&str> {
        self.session.placement(target)
    }

    /// Placed labels in target order, for an answers list.
    #[must_use]
    pub fn placed_answers(&self) -> Vec<(&Target, &str)> {
        self.targets
            .iter()
            .filter_map(|t| self.session.placement(t.id.as_str()).map(|label| (t, label)))
            .collect()
    }

    /// Validation results. Empty while playing.
    #[must_use]
    pub fn results(&self) -> &OrdMap<TargetId, bool> {
        self.session.results()
    }

    #[must_use]
    pub fn result(&self, target: &str) -> Option<bool> {
        self.session.result(target)
    }

    /// Current score. Zero until validated.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.session.score()
    }

    /// Feedback band, once finished.
    #[must_use]
    pub fn band(&self) -> Option<ScoreBand> {
        self.is_finished()
            .then(|| ScoreBand::for_score(self.session.score()))
    }

    /// Feedback message, once finished.
    #[must_use]
    pub fn score_message(&self) -> Option<&'static str> {
        self.band().map(ScoreBand::message)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            placed: self.session.placed_count(),
            total: self.targets.len(),
        }
    }

    #[must_use]
    pub fn controls(&self) -> Controls {
        match self.session.phase {
            Phase::Playing => Controls {
                validate: self.progress().is_complete(),
                reset: self.config.allow_abort,
            },
            Phase::Finished => Controls {
                validate: false,
                reset: true,
            },
        }
    }

    pub fn target_status(&self, target: &str) -> Result<TargetStatus> {
        self.require_target(target)?;

        let status = match self.session.phase {
            Phase::Playing if self.session.placement(target).is_some() => TargetStatus::Placed,
            Phase::Playing => TargetStatus::Empty,
            Phase::Finished if self.session.result(target) == Some(true) => TargetStatus::Correct,
            Phase::Finished => TargetStatus::Incorrect,
        };
        Ok(status)
    }

    /// Cheap copy of the session, for hosts that mirror state.
    #[must_use]
    pub fn snapshot(&self) -> GameSession {
        self.session.clone()
    }

    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    #[must_use]
    pub fn targets(&self) -> &TargetSet {
        &self.targets
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    // === Helpers ===

    fn require_phase(&self, operation: &'static str, phase: Phase) -> Result<()> {
        if self.session.phase == phase {
            Ok(())
        } else {
            warn!(operation, phase = %self.session.phase, "operation rejected");
            Err(MatchError::PreconditionViolation {
                operation,
                phase: self.session.phase,
            })
        }
    }

    fn require_target(&self, target: &str) -> Result<&Target> {
        self.targets.require(target).map_err(|e| {
            warn!(target_id = target, "unknown target");
            e
        })
    }
}

fn fresh_session<R: LabelShuffler>(targets: &TargetSet, shuffler: &mut R) -> GameSession {
    let mut labels = targets.expected_labels();
    shuffler.shuffle_labels(&mut labels);
    GameSession::new(labels)
}
