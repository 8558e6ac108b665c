use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EmbeddingError {
    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },
}
