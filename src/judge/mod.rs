//! External judge adapter.
//!
//! A judge scores the same five dimensions as the grounded signals. The remote
//! judge is a black box reached over HTTPS; when it cannot be used the adapter
//! substitutes [`JudgeVerdict::FALLBACK`] and reports the outcome as
//! [`JudgeOutcome::Degraded`] instead of failing the request.
//!
//! # Implementations
//!
//! - [`OpenAiJudge`]: OpenAI-compatible chat-completions endpoint.
//! - [`FallbackJudge`]: no network; always degraded with a fixed reason.
//! - `MockJudge` (behind `cfg(any(test, feature = "mock"))`): scripted outcome.

pub mod config;
pub mod error;
pub mod fallback;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod openai;
pub mod types;


pub use config::JudgeConfig;
pub use error::JudgeError;
pub use fallback::FallbackJudge;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockJudge;
pub use openai::{OpenAiJudge, build_prompt};
pub use types::{JudgeOutcome, JudgeVerdict};

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

/// How a judge produces its verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeMode {
    Remote,
    Fallback,
    Mock,
}

impl JudgeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            JudgeMode::Remote => "remote",
            JudgeMode::Fallback => "fallback",
            JudgeMode::Mock => "mock",
        }
    }
}

#[async_trait]
/// Scores a (query, response) pair. Never fails; see [`JudgeOutcome`].
pub trait Judge: Send + Sync {
    async fn judge(&self, query: &str, response: &str) -> JudgeOutcome;

    fn mode(&self) -> JudgeMode;
}

/// Builds the judge for `config`.
///
/// Without a credential no client is built and every request takes the
/// fallback path. A client that fails to build degrades the same way.
pub fn build_judge(config: &JudgeConfig) -> Arc<dyn Judge> {
    if !config.has_credential() {
        warn!("No judge credential configured, judge running in fallback mode");
        return Arc::new(FallbackJudge::new(JudgeError::MissingCredential));
    }

    match OpenAiJudge::new(config.clone()) {
        Ok(judge) => Arc::new(judge),
        Err(e) => {
            warn!(error = %e, "Failed to build judge client, running in fallback mode");
            Arc::new(FallbackJudge::new(e))
        }
    }
}
