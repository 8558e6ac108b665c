use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoringError {
    #[error("unknown merge strategy `{value}` (expected `blended` or `eliminating`)")]
    UnknownStrategy { value: String },
}
