use crate::constants::FAKE_NEWS_SATURATION;

use super::types::{FakeNewsAssessment, FakeNewsBreakdown};

pub const SENSATIONAL_CUES: [&str; 5] =
    ["shocking", "exposed", "unbelievable", "secret", "breaking"];

pub const UNVERIFIABLE_CUES: [&str; 5] =
    ["allegedly", "some say", "it is said", "rumor", "might be"];

pub const CONSPIRACY_CUES: [&str; 5] = ["agenda", "cover up", "fake", "hoax", "propaganda"];

fn cue_score(text: &str, cues: &[&str]) -> f64 {
    let hits = cues.iter().filter(|c| text.contains(*c)).count();
    (hits as f64 / FAKE_NEWS_SATURATION).min(1.0)
}

/// Mean of three capped cue-list scores (sensational, unverifiable, conspiracy).
pub fn fake_news_likelihood(response: &str) -> FakeNewsAssessment {
    let lowered = response.to_lowercase();
    let breakdown = FakeNewsBreakdown {
        sensational: cue_score(&lowered, &SENSATIONAL_CUES),
        unverifiable: cue_score(&lowered, &UNVERIFIABLE_CUES),
        conspiracy: cue_score(&lowered, &CONSPIRACY_CUES),
    };

    FakeNewsAssessment {
        score: breakdown.mean(),
        breakdown,
    }
}
