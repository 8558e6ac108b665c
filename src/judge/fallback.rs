use async_trait::async_trait;

use super::error::JudgeError;
use super::types::JudgeOutcome;
use super::{Judge, JudgeMode};

/// Judge that never calls out and always degrades for a fixed reason.
#[derive(Debug, Clone)]
pub struct FallbackJudge {
    reason: JudgeError,
}

impl FallbackJudge {
    pub fn new(reason: JudgeError) -> Self {
        Self { reason }
    }

    pub fn reason(&self) -> &JudgeError {
        &self.reason
    }
}

#[async_trait]
impl Judge for FallbackJudge {
    async fn judge(&self, _query: &str, _response: &str) -> JudgeOutcome {
        JudgeOutcome::degraded(self.reason.clone())
    }

    fn mode(&self) -> JudgeMode {
        JudgeMode::Fallback
    }
}
