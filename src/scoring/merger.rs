use tracing::debug;

use crate::constants::{
    CARS_CONSISTENCY_WEIGHT, CARS_EVIDENCE_WEIGHT, CARS_FACTUAL_WEIGHT, CARS_REASONING_WEIGHT,
    ELIMINATED_CARS, ELIMINATION_FLOOR, GROUNDED_WEIGHT, JUDGE_WEIGHT,
};
use crate::judge::JudgeVerdict;
use crate::signals::GroundedSignals;

use super::types::{CompositeScores, MergeStrategy, MergedSignals};

/// `0.6 * judge + 0.4 * grounded`, clamped to `[0, 1]`.
pub fn merge(judge: f64, grounded: f64) -> f64 {
    (JUDGE_WEIGHT * judge + GROUNDED_WEIGHT * grounded).clamp(0.0, 1.0)
}

impl MergedSignals {
    /// Merges each grounded signal with its judge counterpart.
    pub fn from_parts(grounded: &GroundedSignals, verdict: &JudgeVerdict) -> Self {
        Self {
            factual_accuracy: merge(verdict.factual_accuracy, grounded.factual_accuracy()),
            reasoning: merge(verdict.reasoning, grounded.reasoning_integrity()),
            evidence_alignment: merge(verdict.alignment, grounded.evidence_alignment),
            consistency: merge(verdict.consistency, grounded.consistency_score()),
            fake_news: merge(verdict.fake_news, grounded.fake_news_likelihood()),
        }
    }

    /// Weighted composite of the four positive signals.
    pub fn cars(&self) -> f64 {
        CARS_FACTUAL_WEIGHT * self.factual_accuracy
            + CARS_REASONING_WEIGHT * self.reasoning
            + CARS_EVIDENCE_WEIGHT * self.evidence_alignment
            + CARS_CONSISTENCY_WEIGHT * self.consistency
    }
}

/// Derives CARS, TCS and HP.
///
/// Elimination is decided on the grounded factual accuracy, not the merged one.
pub fn compose(
    strategy: MergeStrategy,
    grounded: &GroundedSignals,
    merged: &MergedSignals,
) -> CompositeScores {
    if strategy == MergeStrategy::Eliminating && grounded.factual_accuracy() < ELIMINATION_FLOOR {
        debug!(
            grounded_factual = grounded.factual_accuracy(),
            floor = ELIMINATION_FLOOR,
            "Response eliminated"
        );
        return CompositeScores {
            cars: ELIMINATED_CARS,
            tcs: 0.0,
            hp: 1.0,
            eliminated: true,
        };
    }

    let cars = merged.cars().clamp(0.0, 1.0);
    let tcs = ((1.0 - merged.fake_news) * cars).clamp(0.0, 1.0);
    CompositeScores {
        cars,
        tcs,
        hp: 1.0 - tcs,
        eliminated: false,
    }
}
