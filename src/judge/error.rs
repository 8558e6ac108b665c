use std::time::Duration;

use thiserror::Error;

/// Why a judge call did not produce a usable verdict.
///
/// None of these reach the HTTP caller; they tag a degraded outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JudgeError {
    #[error("judge credential not configured")]
    MissingCredential,

    #[error("judge request timed out after {timeout:?}")]
    Timeout { timeout: Duration },

    #[error("judge transport error: {reason}")]
    Transport { reason: String },

    #[error("judge returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    #[error("malformed judge reply: {reason}")]
    MalformedReply { reason: String },

    #[error("failed to build judge client: {reason}")]
    ClientBuild { reason: String },
}

impl JudgeError {
    /// Short machine-readable tag for logs and response details.
    pub fn kind(&self) -> &'static str {
        match self {
            JudgeError::MissingCredential => "missing_credential",
            JudgeError::Timeout { .. } => "timeout",
            JudgeError::Transport { .. } => "transport",
            JudgeError::UpstreamStatus { .. } => "upstream_status",
            JudgeError::MalformedReply { .. } => "malformed_reply",
            JudgeError::ClientBuild { .. } => "client_build",
        }
    }

    pub(crate) fn from_transport(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            JudgeError::Timeout { timeout }
        } else {
            JudgeError::Transport {
                reason: err.to_string(),
            }
        }
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        JudgeError::MalformedReply {
            reason: reason.into(),
        }
    }
}
