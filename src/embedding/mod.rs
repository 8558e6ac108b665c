//! Embedding utilities.
//!
//! - [`lexical`] provides the deterministic character-trigram embedder used for
//!   the evidence-alignment signal.

mod error;
/// Character-trigram embedder.
pub mod lexical;

pub use error::EmbeddingError;
pub use lexical::{LexicalEmbedder, cosine_similarity, rescaled_similarity};
