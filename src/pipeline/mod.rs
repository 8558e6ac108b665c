//! One evaluation, end to end.
//!
//! ```text
//! response ──► extract_facts ──┐
//!                              ├─► GroundedSignals ─┐
//! query, response ─► embedder ─┘                    ├─► MergedSignals ─► CompositeScores ─► ScoreReport
//! query, response ─► Judge ─► JudgeOutcome ─────────┘
//! ```


use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{Instrument, info, info_span};
use uuid::Uuid;

use crate::embedding::LexicalEmbedder;
use crate::extraction::{FactRecord, extract_facts};
use crate::judge::{Judge, JudgeMode, JudgeOutcome};
use crate::report::{
    DetailBlock, GroundedRaw, ScoreBlock, ScoreReport, cars_to_percent, to_percent,
};
use crate::scoring::{CompositeScores, MergeStrategy, MergedSignals, compose};
use crate::signals::GroundedSignals;

/// A (query, response) pair to score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub query: String,
    pub response: String,
}

impl EvaluationRequest {
    pub fn new(query: impl Into<String>, response: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            response: response.into(),
        }
    }
}

/// Every intermediate value of one evaluation.
#[derive(Debug, Clone)]
pub struct Evaluation {
    pub id: Uuid,
    pub request: EvaluationRequest,
    pub facts: Vec<FactRecord>,
    pub grounded: GroundedSignals,
    pub outcome: JudgeOutcome,
    pub merged: MergedSignals,
    pub composite: CompositeScores,
    pub strategy: MergeStrategy,
}

impl Evaluation {
    pub fn report(&self) -> ScoreReport {
        let merged = &self.merged;
        let composite = &self.composite;
        let grounded = &self.grounded;

        ScoreReport {
            query: self.request.query.clone(),
            response: self.request.response.clone(),
            scores: ScoreBlock {
                factual_accuracy: to_percent(merged.factual_accuracy),
                reasoning_integrity: to_percent(merged.reasoning),
                evidence_alignment: to_percent(merged.evidence_alignment),
                consistency: to_percent(merged.consistency),
                fake_news_likelihood: to_percent(merged.fake_news),
                cars: cars_to_percent(composite.cars, composite.eliminated),
                trust_confidence_score: to_percent(composite.tcs),
                hallucination_probability: to_percent(composite.hp),
            },
            details: DetailBlock {
                facts_extracted: grounded.factual.facts_extracted,
                facts_matched: grounded.factual.facts_matched,
                reasoning_steps: grounded.reasoning.total_steps,
                valid_steps: grounded.reasoning.valid_steps,
                fake_news_breakdown: grounded.fake_news.breakdown,
                judge_raw: *self.outcome.verdict(),
                grounded_raw: GroundedRaw {
                    factual_accuracy: grounded.factual_accuracy(),
                    reasoning: grounded.reasoning_integrity(),
                    evidence_alignment: grounded.evidence_alignment,
                    consistency: grounded.consistency_score(),
                    fake_news: grounded.fake_news_likelihood(),
                },
                judge_status: self.outcome.status().to_string(),
                judge_degraded_reason: self.outcome.reason().map(ToString::to_string),
                merge_strategy: self.strategy,
                eliminated: composite.eliminated,
            },
        }
    }
}

impl From<Evaluation> for ScoreReport {
    fn from(evaluation: Evaluation) -> Self {
        evaluation.report()
    }
}

/// Scores requests. Holds no per-request state and is shared behind an `Arc`.
#[derive(Clone)]
pub struct TrustEngine {
    judge: Arc<dyn Judge>,
    embedder: LexicalEmbedder,
    strategy: MergeStrategy,
}

impl std::fmt::Debug for TrustEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrustEngine")
            .field("judge_mode", &self.judge.mode())
            .field("embedder", &self.embedder)
            .field("strategy", &self.strategy)
            .finish()
    }
}

impl TrustEngine {
    pub fn new(judge: Arc<dyn Judge>, strategy: MergeStrategy) -> Self {
        Self {
            judge,
            embedder: LexicalEmbedder::default(),
            strategy,
        }
    }

    pub fn with_embedder(mut self, embedder: LexicalEmbedder) -> Self {
        self.embedder = embedder;
        self
    }

    pub fn judge_mode(&self) -> JudgeMode {
        self.judge.mode()
    }

    /// Strategy used when a request does not choose one.
    pub fn default_strategy(&self) -> MergeStrategy {
        self.strategy
    }

    /// Runs the full pipeline. Never fails: a judge failure yields a degraded
    /// outcome with the fallback verdict.
    pub async fn evaluate(
        &self,
        request: &EvaluationRequest,
        strategy: Option<MergeStrategy>,
    ) -> Evaluation {
        let id = Uuid::new_v4();
        let strategy = strategy.unwrap_or(self.strategy);
        let span = info_span!("evaluate", evaluation_id = %id, %strategy);

        async move {
            let facts = extract_facts(&request.response);
            let grounded =
                GroundedSignals::compute(&self.embedder, &request.query, &request.response, &facts);

            let outcome = self.judge.judge(&request.query, &request.response).await;

            let merged = MergedSignals::from_parts(&grounded, outcome.verdict());
            let composite = compose(strategy, &grounded, &merged);

            info!(
                judge = outcome.status(),
                cars = composite.cars,
                tcs = composite.tcs,
                hp = composite.hp,
                eliminated = composite.eliminated,
                "Evaluation complete"
            );

            Evaluation {
                id,
                request: request.clone(),
                facts,
                grounded,
                outcome,
                merged,
                composite,
                strategy,
            }
        }
        .instrument(span)
        .await
    }
}
