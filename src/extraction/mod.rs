//! Rule-based extraction of candidate factual statements.
//!
//! A response is split into sentences on `.`, `?` and `!`. A sentence is kept as a
//! candidate fact when it carries a copular/possessive cue, a digit, or a run of two
//! capitalized words (a crude proper-noun detector). None of this understands
//! syntax; it only decides which sentences are worth checking against the query.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

const SENTENCE_TERMINATORS: [char; 3] = ['.', '?', '!'];

const FACT_CUES: [&str; 4] = [" is ", " was ", " has ", " contains "];

static RE_DIGIT: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\d").ok());

static RE_PROPER_NOUN_SPAN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]+ [A-Z][a-z]+").ok());

/// A candidate factual sentence and its lowercase word set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactRecord {
    text: String,
    words: HashSet<String>,
}

impl FactRecord {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let words = word_set(&text);
        Self { text, words }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn words(&self) -> &HashSet<String> {
        &self.words
    }

    /// Number of words this fact shares with `other`.
    pub fn shared_word_count(&self, other: &HashSet<String>) -> usize {
        self.words.intersection(other).count()
    }
}

/// Lowercase whitespace-delimited tokens. Punctuation stays attached.
pub fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Splits `text` into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

/// Returns `true` if `sentence` looks like a factual claim.
pub fn is_candidate_fact(sentence: &str) -> bool {
    let lowered = sentence.to_lowercase();
    if FACT_CUES.iter().any(|cue| lowered.contains(cue)) {
        return true;
    }

    if RE_DIGIT.as_ref().is_some_and(|re| re.is_match(sentence)) {
        return true;
    }

    RE_PROPER_NOUN_SPAN
        .as_ref()
        .is_some_and(|re| re.is_match(sentence))
}

/// Extracts candidate facts in order of appearance. Duplicates are kept.
pub fn extract_facts(text: &str) -> Vec<FactRecord> {
    split_sentences(text)
        .filter(|s| is_candidate_fact(s))
        .map(FactRecord::new)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(facts: &[FactRecord]) -> Vec<&str> {
        facts.iter().map(FactRecord::text).collect()
    }

    #[test]
    fn test_capital_of_france() {
        let facts = extract_facts("The capital of France is Paris.");
        assert_eq!(texts(&facts), vec!["The capital of France is Paris"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(extract_facts("").is_empty());
        assert!(extract_facts("   ...?!  ").is_empty());
    }

    #[test]
    fn test_no_qualifying_sentence() {
        assert!(extract_facts("hello there. how are you? fine!").is_empty());
    }

    #[test]
    fn test_each_cue_kind() {
        let text = "It was late. Water contains hydrogen. She has a dog. \
                    There are 3 apples. I met Ada Lovelace. nothing here";
        let facts = extract_facts(text);
        assert_eq!(
            texts(&facts),
            vec![
                "It was late",
                "Water contains hydrogen",
                "She has a dog",
                "There are 3 apples",
                "I met Ada Lovelace",
            ]
        );
    }

    #[test]
    fn test_cue_needs_surrounding_spaces() {
        // "Is" at the start has no leading space; "this" contains "is" but not " is ".
        assert!(!is_candidate_fact("Is this right"));
        assert!(is_candidate_fact("the sky is blue"));
    }

    #[test]
    fn test_single_capitalized_word_is_not_enough() {
        assert!(!is_candidate_fact("Paris rocks"));
        assert!(is_candidate_fact("New York rocks"));
    }

    #[test]
    fn test_duplicates_and_order_preserved() {
        let facts = extract_facts("It is 5. Skip me. It is 5!");
        assert_eq!(texts(&facts), vec!["It is 5", "It is 5"]);
    }

    #[test]
    fn test_idempotent() {
        let text = "Mount Everest is 8849 metres tall. Wow! It was climbed in 1953.";
        assert_eq!(extract_facts(text), extract_facts(text));
    }

    #[test]
    fn test_word_set_lowercases_and_keeps_punctuation() {
        let words = word_set("What is the capital of France?");
        assert!(words.contains("france?"));
        assert!(words.contains("what"));
        assert_eq!(words.len(), 6);
    }

    #[test]
    fn test_shared_word_count() {
        let fact = FactRecord::new("The capital of France is Paris");
        let query = word_set("What is the capital of France?");
        // the, capital, of, is
        assert_eq!(fact.shared_word_count(&query), 4);
    }
}
