use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ScoringError;

/// How merged signals become composite scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergeStrategy {
    /// Weighted composite, never eliminates.
    #[default]
    Blended,
    /// Like `Blended`, but a response whose grounded factual accuracy falls
    /// below [`ELIMINATION_FLOOR`](crate::constants::ELIMINATION_FLOOR) gets
    /// the sentinel CARS.
    Eliminating,
}

impl MergeStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MergeStrategy::Blended => "blended",
            MergeStrategy::Eliminating => "eliminating",
        }
    }
}

impl FromStr for MergeStrategy {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blended" => Ok(MergeStrategy::Blended),
            "eliminating" => Ok(MergeStrategy::Eliminating),
            _ => Err(ScoringError::UnknownStrategy {
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for MergeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The five signals after merging judge and grounded values, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergedSignals {
    pub factual_accuracy: f64,
    pub reasoning: f64,
    pub evidence_alignment: f64,
    pub consistency: f64,
    pub fake_news: f64,
}

/// Final scores for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeScores {
    /// Composite accuracy/reasoning score, or the sentinel when eliminated.
    pub cars: f64,
    /// Trust-confidence score.
    pub tcs: f64,
    /// Hallucination probability, `1 - tcs`.
    pub hp: f64,
    pub eliminated: bool,
}

impl CompositeScores {
    pub fn is_eliminated(&self) -> bool {
        self.eliminated
    }
}

impl std::fmt::Display for CompositeScores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.eliminated {
            return write!(f, "ELIMINATED (cars: {:.1})", self.cars);
        }
        write!(
            f,
            "SCORED (cars: {:.4}, tcs: {:.4}, hp: {:.4})",
            self.cars, self.tcs, self.hp
        )
    }
}
