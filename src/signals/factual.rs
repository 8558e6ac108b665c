use crate::constants::{MIN_SHARED_WORDS, NO_FACTS_SCORE};
use crate::extraction::{FactRecord, word_set};

use super::types::FactualAccuracy;

/// Fraction of extracted facts that share at least two words with the query.
///
/// With no facts there is nothing to check, so a fixed low-confidence score is
/// returned instead of dividing by zero.
pub fn factual_accuracy(query: &str, facts: &[FactRecord]) -> FactualAccuracy {
    if facts.is_empty() {
        return FactualAccuracy {
            score: NO_FACTS_SCORE,
            facts_extracted: 0,
            facts_matched: 0,
        };
    }

    let query_words = word_set(query);
    let facts_matched = facts
        .iter()
        .filter(|f| f.shared_word_count(&query_words) >= MIN_SHARED_WORDS)
        .count();

    FactualAccuracy {
        score: facts_matched as f64 / facts.len() as f64,
        facts_extracted: facts.len(),
        facts_matched,
    }
}
