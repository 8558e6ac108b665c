use std::time::Duration;

use crate::constants::{DEFAULT_JUDGE_ENDPOINT, DEFAULT_JUDGE_MODEL, DEFAULT_JUDGE_TIMEOUT_SECS};

/// Connection settings for the remote judge.
///
/// The credential is carried here explicitly; nothing in the judge reads the
/// process environment.
#[derive(Clone)]
pub struct JudgeConfig {
    /// Chat-completions URL.
    pub endpoint: String,
    /// Model name sent with each request.
    pub model: String,
    /// Bearer credential. `None` puts the judge in fallback mode.
    pub api_key: Option<String>,
    /// Whole-request timeout.
    pub timeout: Duration,
}

impl std::fmt::Debug for JudgeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JudgeConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for JudgeConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_JUDGE_ENDPOINT.to_string(),
            model: DEFAULT_JUDGE_MODEL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(DEFAULT_JUDGE_TIMEOUT_SECS),
        }
    }
}

impl JudgeConfig {
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns `true` if a non-blank credential is configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.as_deref().is_some_and(|k| !k.trim().is_empty())
    }
}
