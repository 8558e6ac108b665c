//! Trustlens library crate (used by the server binary and integration tests).
//!
//! Scores an AI-generated answer against the question it was given. Five
//! grounded signals are computed from surface text, an external judge scores
//! the same five dimensions, and the two are merged into a trust-confidence
//! score and a hallucination probability.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`TrustEngine`], [`EvaluationRequest`], [`Evaluation`]: one request, end to end
//! - [`ScoreReport`]: the serialized payload
//!
//! ## Signals
//! - [`LexicalEmbedder`]: deterministic character-trigram embedding
//! - [`extract_facts`], [`FactRecord`]: candidate factual sentences
//! - [`GroundedSignals`]: the five text heuristics
//!
//! ## Judge
//! - [`Judge`], [`build_judge`], [`OpenAiJudge`], [`FallbackJudge`]
//! - [`JudgeOutcome`], [`JudgeVerdict`], [`JudgeError`]
//!
//! ## Scoring
//! - [`MergeStrategy`], [`MergedSignals`], [`CompositeScores`]
//!
//! ## Test/Mock Support
//! `MockJudge` is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod config;
pub mod constants;
pub mod embedding;
pub mod extraction;
pub mod gateway;
pub mod hashing;
pub mod judge;
pub mod pipeline;
pub mod report;
pub mod scoring;
pub mod signals;

pub use config::{Config, ConfigError};
pub use constants::HASH_CONTRACT_VERSION;
pub use embedding::{EmbeddingError, LexicalEmbedder};
pub use extraction::{FactRecord, extract_facts};
pub use gateway::{HandlerState, create_router_with_state};
pub use hashing::{bucket_for, hash_to_u64};
#[cfg(any(test, feature = "mock"))]
pub use judge::MockJudge;
pub use judge::{
    FallbackJudge, Judge, JudgeConfig, JudgeError, JudgeMode, JudgeOutcome, JudgeVerdict,
    OpenAiJudge, build_judge,
};
pub use pipeline::{Evaluation, EvaluationRequest, TrustEngine};
pub use report::ScoreReport;
pub use scoring::{CompositeScores, MergeStrategy, MergedSignals, ScoringError};
pub use signals::GroundedSignals;
