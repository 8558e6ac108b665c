//! Deterministic character-trigram embedder.
//!
//! Text is lower-cased, every window of [`TRIGRAM_LEN`] characters is hashed to a
//! bucket with [`bucket_for`], and the bucket counts are L2-normalized. There is no
//! model, no tokenizer and no randomness: the same text yields the same vector on
//! every machine.


use tracing::trace;

use crate::constants::{DEFAULT_EMBEDDING_DIM, EMBEDDING_EPSILON, TRIGRAM_LEN};
use crate::embedding::error::EmbeddingError;
use crate::hashing::bucket_for;

/// Fixed-dimension lexical embedder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexicalEmbedder {
    dims: usize,
}

impl Default for LexicalEmbedder {
    fn default() -> Self {
        Self {
            dims: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl LexicalEmbedder {
    /// Creates an embedder with a custom bucket count.
    pub fn new(dims: usize) -> Result<Self, EmbeddingError> {
        if dims == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "embedding dimension must be non-zero".to_string(),
            });
        }
        Ok(Self { dims })
    }

    /// Output dimension.
    pub fn embedding_dim(&self) -> usize {
        self.dims
    }

    /// Embeds `text` into a unit-length (or all-zero) vector of [`Self::embedding_dim`] floats.
    ///
    /// Text shorter than three characters has no trigrams and yields all zeros.
    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut vector = vec![0.0f32; self.dims];

        let lowered = text.to_lowercase();
        let chars: Vec<char> = lowered.chars().collect();

        let mut gram = String::with_capacity(TRIGRAM_LEN * 4);
        for window in chars.windows(TRIGRAM_LEN) {
            gram.clear();
            gram.extend(window);
            vector[bucket_for(&gram, self.dims)] += 1.0;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        let denom = norm + EMBEDDING_EPSILON;
        for v in &mut vector {
            *v /= denom;
        }

        trace!(
            text_len = text.len(),
            trigrams = chars.len().saturating_sub(TRIGRAM_LEN - 1),
            norm,
            "Lexical embedding computed"
        );

        vector
    }

    /// Embeds both texts and returns their similarity rescaled to `[0, 1]`.
    pub fn similarity(&self, a: &str, b: &str) -> f64 {
        rescaled_similarity(&self.embed(a), &self.embed(b))
    }
}

/// Dot product of two embeddings.
///
/// Embeddings from [`LexicalEmbedder::embed`] are already normalized, so this is
/// their cosine similarity.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    debug_assert_eq!(a.len(), b.len(), "embedding dimensions must match");
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Maps cosine similarity from `[-1, 1]` to `[0, 1]` via `(1 + dot) / 2`.
pub fn rescaled_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot = f64::from(cosine_similarity(a, b));
    ((1.0 + dot) / 2.0).clamp(0.0, 1.0)
}
