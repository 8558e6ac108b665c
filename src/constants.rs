//! Cross-cutting, shared constants.
//!
//! Weights and defaults are treated as compile-time invariants of the scoring
//! contract. Changing any of them changes every score the service reports, so
//! the tests pin them explicitly.
//!
//! # Weight Invariants
//!
//! - [`JUDGE_WEIGHT`] + [`GROUNDED_WEIGHT`] == 1.0
//! - [`CARS_FACTUAL_WEIGHT`] + [`CARS_REASONING_WEIGHT`] + [`CARS_EVIDENCE_WEIGHT`]
//!   + [`CARS_CONSISTENCY_WEIGHT`] == 1.0

/// Lexical embedding dimension (number of trigram buckets).
pub const DEFAULT_EMBEDDING_DIM: usize = 512;

/// Sliding window length, in characters, used by the lexical embedder.
pub const TRIGRAM_LEN: usize = 3;

/// Added to the embedding norm so near-empty text never divides by zero.
pub const EMBEDDING_EPSILON: f32 = 1e-6;

/// Version of the trigram bucket hash. Bump on any change to bucket assignment.
pub const HASH_CONTRACT_VERSION: u32 = 1;

pub const JUDGE_WEIGHT: f64 = 0.6;
pub const GROUNDED_WEIGHT: f64 = 0.4;

pub const CARS_FACTUAL_WEIGHT: f64 = 0.40;
pub const CARS_REASONING_WEIGHT: f64 = 0.25;
pub const CARS_EVIDENCE_WEIGHT: f64 = 0.20;
pub const CARS_CONSISTENCY_WEIGHT: f64 = 0.15;

/// Grounded factual accuracy below this floor eliminates the answer
/// under [`MergeStrategy::Eliminating`](crate::scoring::MergeStrategy::Eliminating).
pub const ELIMINATION_FLOOR: f64 = 0.15;

/// CARS value reported for an eliminated answer. Outside `[0, 1]` on purpose.
pub const ELIMINATED_CARS: f64 = -1.0;

/// Neutral value used for every field of the fallback judge verdict.
pub const FALLBACK_JUDGE_SCORE: f64 = 0.5;

/// Grounded factual accuracy when the response yields no candidate facts.
pub const NO_FACTS_SCORE: f64 = 0.35;

/// Minimum number of shared words for a fact to count as matching the query.
pub const MIN_SHARED_WORDS: usize = 2;

/// Reasoning integrity when no causal connective is present.
pub const NO_REASONING_SCORE: f64 = 0.3;

/// Consistency when no antonym pair co-occurs.
pub const NO_CONTRADICTION_SCORE: f64 = 0.9;

/// Lower bound on consistency regardless of contradiction count.
pub const MIN_CONSISTENCY_SCORE: f64 = 0.1;

/// Cue-word hits needed to saturate a fake-news sub-score.
pub const FAKE_NEWS_SATURATION: f64 = 2.0;

pub const DEFAULT_JUDGE_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

pub const DEFAULT_JUDGE_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_JUDGE_TIMEOUT_SECS: u64 = 20;

/// Largest judge reply body read before giving up on it.
pub const MAX_JUDGE_REPLY_BYTES: usize = 1024 * 1024;

/// Response header carrying the judge outcome (`verdict` / `degraded`).
pub const JUDGE_STATUS_HEADER: &str = "X-Trustlens-Judge";
