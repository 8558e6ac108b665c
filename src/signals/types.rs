use serde::{Deserialize, Serialize};

/// Grounded factual accuracy and the counts behind it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactualAccuracy {
    pub score: f64,
    pub facts_extracted: usize,
    pub facts_matched: usize,
}

/// Causal-connective reasoning signal.
///
/// `total_steps` is `valid_steps + 1`, or `1` when nothing was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReasoningIntegrity {
    pub score: f64,
    pub total_steps: usize,
    pub valid_steps: usize,
}

/// Antonym co-occurrence signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyCheck {
    pub score: f64,
    pub contradictions: usize,
}

/// Per-list fake-news sub-scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FakeNewsBreakdown {
    #[serde(rename = "Sensational")]
    pub sensational: f64,
    #[serde(rename = "Unverifiable")]
    pub unverifiable: f64,
    #[serde(rename = "Conspiracy")]
    pub conspiracy: f64,
}

impl FakeNewsBreakdown {
    /// Unweighted mean of the three sub-scores.
    pub fn mean(&self) -> f64 {
        (self.sensational + self.unverifiable + self.conspiracy) / 3.0
    }
}

/// Fake-news likelihood and its breakdown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FakeNewsAssessment {
    pub score: f64,
    pub breakdown: FakeNewsBreakdown,
}

/// All five grounded signals for one (query, response) pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundedSignals {
    pub factual: FactualAccuracy,
    pub reasoning: ReasoningIntegrity,
    pub evidence_alignment: f64,
    pub consistency: ConsistencyCheck,
    pub fake_news: FakeNewsAssessment,
}

impl GroundedSignals {
    pub fn factual_accuracy(&self) -> f64 {
        self.factual.score
    }

    pub fn reasoning_integrity(&self) -> f64 {
        self.reasoning.score
    }

    pub fn consistency_score(&self) -> f64 {
        self.consistency.score
    }

    pub fn fake_news_likelihood(&self) -> f64 {
        self.fake_news.score
    }
}
