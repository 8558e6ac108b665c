use crate::constants::NO_REASONING_SCORE;

use super::types::ReasoningIntegrity;

pub const CAUSAL_CONNECTIVES: [&str; 9] = [
    "because",
    "therefore",
    "hence",
    "thus",
    "as a result",
    "implies",
    "so",
    "consequently",
    "which means",
];

/// Scores reasoning by how many distinct causal connectives appear.
///
/// Each connective counts once however often it occurs. The score is
/// `steps / (steps + 1)`, which approaches but never reaches 1.
pub fn reasoning_integrity(response: &str) -> ReasoningIntegrity {
    let lowered = response.to_lowercase();
    let steps = CAUSAL_CONNECTIVES
        .iter()
        .filter(|k| lowered.contains(*k))
        .count();

    if steps == 0 {
        return ReasoningIntegrity {
            score: NO_REASONING_SCORE,
            total_steps: 1,
            valid_steps: 0,
        };
    }

    let total_steps = steps + 1;
    ReasoningIntegrity {
        score: steps as f64 / total_steps as f64,
        total_steps,
        valid_steps: steps,
    }
}
