//! Score computation and feedback bands.
//!
//! Scores are integer percentages. Rounding is half-up, computed in integer
//! arithmetic so `k / n` never picks up float error at the .5 boundary.

use serde::{Deserialize, Serialize};

/// Highest possible score. Reported as `maxScore` on completion.
pub const MAX_SCORE: u8 = 100;

/// `round(100 * correct / total)`, half-up.
///
/// Returns 0 when `total` is 0. `correct` is clamped to `total`.
#[must_use]
pub fn percentage(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let correct = correct.min(total);
    let pct = (200 * correct + total) / (2 * total);
    // pct <= 100 because correct <= total
    u8::try_from(pct).unwrap_or(MAX_SCORE)
}

/// Feedback category for a finished attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBand {
    /// 90 and above.
    Exemplary,
    /// 75 to 89.
    Strong,
    /// 60 to 74.
    Adequate,
    /// 40 to 59.
    Weak,
    /// Below 40.
    NeedsReview,
}

impl ScoreBand {
    #[must_use]
    pub fn for_score(score: u8) -> Self {
        match score {
            90..=u8::MAX => ScoreBand::Exemplary,
            75..=89 => ScoreBand::Strong,
            60..=74 => ScoreBand::Adequate,
            40..=59 => ScoreBand::Weak,
            _ => ScoreBand::NeedsReview,
        }
    }

    /// Fixed feedback string for this band.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            ScoreBand::Exemplary => "Excellent! You have mastered this anatomy! 🏆",
            ScoreBand::Strong => "Very good! You have solid anatomical knowledge! 👏",
            ScoreBand::Adequate => "Good! Keep studying to improve! 📚",
            ScoreBand::Weak => "Fair. You need to review a bit more! 💪",
            ScoreBand::NeedsReview => "You need to study the anatomy further. Don't give up! 📖",
        }
    }
}

/// Feedback message for a score.
#[must_use]
pub fn score_message(score: u8) -> &'static str {
    ScoreBand::for_score(score).message()
}
