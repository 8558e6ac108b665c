use crate::constants::{MIN_CONSISTENCY_SCORE, NO_CONTRADICTION_SCORE};

use super::types::ConsistencyCheck;

pub const ANTONYM_PAIRS: [(&str, &str); 6] = [
    ("always", "never"),
    ("true", "false"),
    ("yes", "no"),
    ("can", "cannot"),
    ("did", "did not"),
    ("is", "is not"),
];

/// Counts antonym pairs whose members both appear in the response.
///
/// Matching is plain substring presence on the lowercased text: "no" matches
/// inside "not", and "did" is always present when "did not" is. Negation scope
/// is not modelled.
pub fn consistency(response: &str) -> ConsistencyCheck {
    let lowered = response.to_lowercase();
    let contradictions = ANTONYM_PAIRS
        .iter()
        .filter(|(a, b)| lowered.contains(a) && lowered.contains(b))
        .count();

    let score = if contradictions == 0 {
        NO_CONTRADICTION_SCORE
    } else {
        (1.0 / (contradictions as f64 + 1.0)).max(MIN_CONSISTENCY_SCORE)
    };

    ConsistencyCheck {
        score,
        contradictions,
    }
}
