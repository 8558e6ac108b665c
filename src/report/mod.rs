//! Serialized result payload.
//!
//! Field names are part of the wire contract and must not change. Composite
//! and merged scores are reported as percentages rounded to two decimals;
//! the raw judge and grounded values are reported unscaled.

use serde::{Deserialize, Serialize};

use crate::constants::ELIMINATED_CARS;
use crate::judge::JudgeVerdict;
use crate::scoring::MergeStrategy;
use crate::signals::FakeNewsBreakdown;

/// `round(x * 100, 2)`.
pub fn to_percent(value: f64) -> f64 {
    (value * 10_000.0).round() / 100.0
}

/// Like [`to_percent`], except the elimination sentinel passes through as `-1.0`.
pub fn cars_to_percent(cars: f64, eliminated: bool) -> f64 {
    if eliminated { ELIMINATED_CARS } else { to_percent(cars) }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub query: String,
    pub response: String,
    pub scores: ScoreBlock,
    pub details: DetailBlock,
}

/// Merged and composite scores as percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBlock {
    #[serde(rename = "Factual_Accuracy")]
    pub factual_accuracy: f64,
    #[serde(rename = "Reasoning_Integrity")]
    pub reasoning_integrity: f64,
    #[serde(rename = "Evidence_Alignment")]
    pub evidence_alignment: f64,
    #[serde(rename = "Consistency")]
    pub consistency: f64,
    #[serde(rename = "Fake_News_Likelihood")]
    pub fake_news_likelihood: f64,
    #[serde(rename = "CARS")]
    pub cars: f64,
    #[serde(rename = "Trust_Confidence_Score")]
    pub trust_confidence_score: f64,
    #[serde(rename = "Hallucination_Probability")]
    pub hallucination_probability: f64,
}

/// Grounded signal values before merging, keyed by their short names.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroundedRaw {
    #[serde(rename = "F")]
    pub factual_accuracy: f64,
    #[serde(rename = "R")]
    pub reasoning: f64,
    #[serde(rename = "E")]
    pub evidence_alignment: f64,
    #[serde(rename = "C")]
    pub consistency: f64,
    #[serde(rename = "FNLS")]
    pub fake_news: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailBlock {
    #[serde(rename = "Facts_Extracted")]
    pub facts_extracted: usize,
    #[serde(rename = "Facts_Matched")]
    pub facts_matched: usize,
    #[serde(rename = "Reasoning_Steps")]
    pub reasoning_steps: usize,
    #[serde(rename = "Valid_Steps")]
    pub valid_steps: usize,
    #[serde(rename = "FakeNews_Breakdown")]
    pub fake_news_breakdown: FakeNewsBreakdown,
    #[serde(rename = "OpenAI_Raw")]
    pub judge_raw: JudgeVerdict,
    #[serde(rename = "Grounded_Raw")]
    pub grounded_raw: GroundedRaw,
    #[serde(rename = "Judge_Status")]
    pub judge_status: String,
    #[serde(
        rename = "Judge_Degraded_Reason",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub judge_degraded_reason: Option<String>,
    #[serde(rename = "Merge_Strategy")]
    pub merge_strategy: MergeStrategy,
    #[serde(rename = "Eliminated")]
    pub eliminated: bool,
}
