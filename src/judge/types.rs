use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::FALLBACK_JUDGE_SCORE;

use super::error::JudgeError;

/// Five judge scores, each clamped to `[0, 1]`.
///
/// Field names match the JSON the judge is asked to return and are reported
/// verbatim under `OpenAI_Raw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JudgeVerdict {
    pub factual_accuracy: f64,
    pub consistency: f64,
    pub reasoning: f64,
    pub alignment: f64,
    pub fake_news: f64,
}

impl JudgeVerdict {
    pub const FIELDS: [&'static str; 5] = [
        "factual_accuracy",
        "consistency",
        "reasoning",
        "alignment",
        "fake_news",
    ];

    /// Neutral verdict substituted whenever the judge is unavailable.
    pub const FALLBACK: Self = Self {
        factual_accuracy: FALLBACK_JUDGE_SCORE,
        consistency: FALLBACK_JUDGE_SCORE,
        reasoning: FALLBACK_JUDGE_SCORE,
        alignment: FALLBACK_JUDGE_SCORE,
        fake_news: FALLBACK_JUDGE_SCORE,
    };

    pub fn fallback() -> Self {
        Self::FALLBACK
    }

    /// Returns a copy with every field clamped to `[0, 1]`.
    pub fn clamped(self) -> Self {
        Self {
            factual_accuracy: clamp_unit(self.factual_accuracy),
            consistency: clamp_unit(self.consistency),
            reasoning: clamp_unit(self.reasoning),
            alignment: clamp_unit(self.alignment),
            fake_news: clamp_unit(self.fake_news),
        }
    }

    /// Parses the judge's message content.
    ///
    /// The content must be a JSON object with all five fields as numbers. A
    /// surrounding Markdown code fence is tolerated. Out-of-range numbers are
    /// clamped rather than rejected.
    pub fn from_reply(content: &str) -> Result<Self, JudgeError> {
        let body = strip_code_fence(content);
        let value: Value = serde_json::from_str(body)
            .map_err(|e| JudgeError::malformed(format!("content is not JSON: {e}")))?;

        let object = value
            .as_object()
            .ok_or_else(|| JudgeError::malformed("content is not a JSON object"))?;

        let field = |name: &str| -> Result<f64, JudgeError> {
            object
                .get(name)
                .and_then(Value::as_f64)
                .ok_or_else(|| JudgeError::malformed(format!("missing or non-numeric `{name}`")))
        };

        let verdict = Self {
            factual_accuracy: field("factual_accuracy")?,
            consistency: field("consistency")?,
            reasoning: field("reasoning")?,
            alignment: field("alignment")?,
            fake_news: field("fake_news")?,
        };

        Ok(verdict.clamped())
    }
}

impl Default for JudgeVerdict {
    fn default() -> Self {
        Self::FALLBACK
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return FALLBACK_JUDGE_SCORE;
    }
    value.clamp(0.0, 1.0)
}

fn strip_code_fence(content: &str) -> &str {
    let trimmed = content.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };

    // Drop the info string (e.g. "json") on the opening fence line.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };

    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

/// Result of one judge invocation.
///
/// `Degraded` always carries [`JudgeVerdict::FALLBACK`], so downstream math is
/// unchanged, but callers can still tell a real verdict from a substitute.
#[derive(Debug, Clone, PartialEq)]
pub enum JudgeOutcome {
    Verdict(JudgeVerdict),
    Degraded {
        verdict: JudgeVerdict,
        reason: JudgeError,
    },
}

impl JudgeOutcome {
    pub fn degraded(reason: JudgeError) -> Self {
        JudgeOutcome::Degraded {
            verdict: JudgeVerdict::FALLBACK,
            reason,
        }
    }

    /// The verdict to merge with, genuine or fallback.
    pub fn verdict(&self) -> &JudgeVerdict {
        match self {
            JudgeOutcome::Verdict(verdict) | JudgeOutcome::Degraded { verdict, .. } => verdict,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, JudgeOutcome::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&JudgeError> {
        match self {
            JudgeOutcome::Verdict(_) => None,
            JudgeOutcome::Degraded { reason, .. } => Some(reason),
        }
    }

    /// `"verdict"` or `"degraded"`.
    pub fn status(&self) -> &'static str {
        match self {
            JudgeOutcome::Verdict(_) => "verdict",
            JudgeOutcome::Degraded { .. } => "degraded",
        }
    }
}

impl std::fmt::Display for JudgeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JudgeOutcome::Verdict(v) => write!(
                f,
                "VERDICT (factual: {:.2}, reasoning: {:.2}, fake_news: {:.2})",
                v.factual_accuracy, v.reasoning, v.fake_news
            ),
            JudgeOutcome::Degraded { reason, .. } => write!(f, "DEGRADED ({})", reason),
        }
    }
}
