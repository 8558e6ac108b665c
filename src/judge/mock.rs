//! Scripted judge for tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::error::JudgeError;
use super::types::{JudgeOutcome, JudgeVerdict};
use super::{Judge, JudgeMode};

/// Returns a fixed outcome and counts how often it was asked.
#[derive(Debug, Clone)]
pub struct MockJudge {
    outcome: JudgeOutcome,
    calls: Arc<AtomicUsize>,
}

impl MockJudge {
    pub fn with_verdict(verdict: JudgeVerdict) -> Self {
        Self {
            outcome: JudgeOutcome::Verdict(verdict),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing(reason: JudgeError) -> Self {
        Self {
            outcome: JudgeOutcome::degraded(reason),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Judge for MockJudge {
    async fn judge(&self, _query: &str, _response: &str) -> JudgeOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.outcome.clone()
    }

    fn mode(&self) -> JudgeMode {
        JudgeMode::Mock
    }
}
