use proptest::prelude::*;

use trustlens::report::{cars_to_percent, to_percent};
use trustlens::scoring::{MergeStrategy, MergedSignals, compose, merge};
use trustlens::{GroundedSignals, JudgeVerdict, LexicalEmbedder, extract_facts};

fn unit() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn verdict() -> impl Strategy<Value = JudgeVerdict> {
    (unit(), unit(), unit(), unit(), unit()).prop_map(|(f, c, r, a, n)| JudgeVerdict {
        factual_accuracy: f,
        consistency: c,
        reasoning: r,
        alignment: a,
        fake_news: n,
    })
}

proptest! {
    #[test]
    fn embedding_is_unit_or_zero(s in ".{0,200}") {
        let v = LexicalEmbedder::default().embed(&s);
        let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        prop_assert!(v.iter().all(|x| x.is_finite()));
        if s.to_lowercase().chars().count() >= 3 {
            prop_assert!((norm - 1.0).abs() < 1e-3, "norm {}", norm);
        } else {
            prop_assert_eq!(norm, 0.0);
        }
    }

    #[test]
    fn similarity_is_symmetric_and_bounded(a in ".{0,80}", b in ".{0,80}") {
        let embedder = LexicalEmbedder::default();
        let ab = embedder.similarity(&a, &b);
        let ba = embedder.similarity(&b, &a);
        prop_assert!((0.0..=1.0).contains(&ab));
        prop_assert!((ab - ba).abs() < 1e-6);
    }

    #[test]
    fn extraction_is_idempotent(s in ".{0,300}") {
        prop_assert_eq!(extract_facts(&s), extract_facts(&s));
    }

    #[test]
    fn extracted_fact_re_extracts_to_itself(s in "[A-Za-z0-9 .?!]{0,200}") {
        for fact in extract_facts(&s) {
            prop_assert_eq!(extract_facts(fact.text()), vec![fact.clone()]);
        }
    }

    #[test]
    fn merge_stays_in_unit_range(j in unit(), g in unit()) {
        let m = merge(j, g);
        prop_assert!((0.0..=1.0).contains(&m));
        prop_assert!(m >= j.min(g) - 1e-12 && m <= j.max(g) + 1e-12);
    }

    #[test]
    fn verdict_clamping_handles_any_number(x in proptest::num::f64::ANY) {
        let v = JudgeVerdict {
            factual_accuracy: x,
            consistency: x,
            reasoning: x,
            alignment: x,
            fake_news: x,
        }
        .clamped();
        prop_assert!((0.0..=1.0).contains(&v.factual_accuracy));
    }

    #[test]
    fn grounded_signals_in_unit_range(query in ".{0,120}", response in ".{0,300}") {
        let facts = extract_facts(&response);
        let g = GroundedSignals::compute(&LexicalEmbedder::default(), &query, &response, &facts);
        for value in [
            g.factual_accuracy(),
            g.reasoning_integrity(),
            g.evidence_alignment,
            g.consistency_score(),
            g.fake_news_likelihood(),
        ] {
            prop_assert!((0.0..=1.0).contains(&value), "out of range: {}", value);
        }
    }

    #[test]
    fn percentages_in_range_except_sentinel(
        query in "[a-zA-Z0-9 ?]{0,80}",
        response in "[a-zA-Z0-9 .,!?]{0,200}",
        v in verdict(),
        eliminating in any::<bool>(),
    ) {
        let strategy = if eliminating { MergeStrategy::Eliminating } else { MergeStrategy::Blended };
        let facts = extract_facts(&response);
        let grounded = GroundedSignals::compute(&LexicalEmbedder::default(), &query, &response, &facts);
        let merged = MergedSignals::from_parts(&grounded, &v);
        let scores = compose(strategy, &grounded, &merged);

        let cars = cars_to_percent(scores.cars, scores.eliminated);
        if scores.eliminated {
            prop_assert_eq!(strategy, MergeStrategy::Eliminating);
            prop_assert!(grounded.factual_accuracy() < 0.15);
            prop_assert_eq!(cars, -1.0);
        } else {
            prop_assert!((0.0..=100.0).contains(&cars));
        }

        for value in [
            merged.factual_accuracy,
            merged.reasoning,
            merged.evidence_alignment,
            merged.consistency,
            merged.fake_news,
            scores.tcs,
            scores.hp,
        ] {
            prop_assert!((0.0..=100.0).contains(&to_percent(value)));
        }
    }
}
