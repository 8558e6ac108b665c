//! Grounded (judge-free) signals.
//!
//! Five independent heuristics computed from the query, the response and the facts
//! extracted from it:
//!
//! | Signal | Source |
//! |--------|--------|
//! | factual accuracy | word overlap between facts and query |
//! | reasoning integrity | causal connectives present |
//! | evidence alignment | lexical embedding similarity |
//! | consistency | co-occurring antonym pairs |
//! | fake-news likelihood | sensational / unverifiable / conspiracy cues |
//!
//! All of them are pure, synchronous and linear in the text length.

pub mod consistency;
pub mod factual;
pub mod fake_news;
pub mod reasoning;
pub mod types;


pub use consistency::consistency;
pub use factual::factual_accuracy;
pub use fake_news::fake_news_likelihood;
pub use reasoning::reasoning_integrity;
pub use types::{
    ConsistencyCheck, FactualAccuracy, FakeNewsAssessment, FakeNewsBreakdown, GroundedSignals,
    ReasoningIntegrity,
};

use tracing::debug;

use crate::embedding::LexicalEmbedder;
use crate::extraction::FactRecord;

/// Rescaled similarity between the query and response embeddings.
pub fn evidence_alignment(embedder: &LexicalEmbedder, query: &str, response: &str) -> f64 {
    embedder.similarity(query, response)
}

impl GroundedSignals {
    /// Computes every grounded signal for one request.
    pub fn compute(
        embedder: &LexicalEmbedder,
        query: &str,
        response: &str,
        facts: &[FactRecord],
    ) -> Self {
        let signals = Self {
            factual: factual_accuracy(query, facts),
            reasoning: reasoning_integrity(response),
            evidence_alignment: evidence_alignment(embedder, query, response),
            consistency: consistency(response),
            fake_news: fake_news_likelihood(response),
        };

        debug!(
            factual = signals.factual.score,
            facts_extracted = signals.factual.facts_extracted,
            facts_matched = signals.factual.facts_matched,
            reasoning = signals.reasoning.score,
            evidence_alignment = signals.evidence_alignment,
            consistency = signals.consistency.score,
            contradictions = signals.consistency.contradictions,
            fake_news = signals.fake_news.score,
            "Grounded signals computed"
        );

        signals
    }
}
