//! Property tests for extraction and classification.

use std::sync::Arc;

use align_analysis::{normalize, CognitiveLevelClassifier, ConceptExtractor, TextProfiler};
use align_catalog::{ConceptCatalog, LevelCatalog};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "analyze", "evaluate", "sustainable", "design", "apply", "lifecycle", "assessment",
    "management", "strategy", "research", "methods", "practical", "real-world", "basic",
    "describe", "innovative", "teamwork", "communicate", "the", "and", "students", "will",
    "of", "products", "net", "zero", "carbon", "footprint", "critical", "thinking",
];

fn profiler() -> TextProfiler {
    TextProfiler::new(
        ConceptExtractor::new(Arc::new(ConceptCatalog::builtin().unwrap())),
        CognitiveLevelClassifier::new(Arc::new(LevelCatalog::builtin().unwrap())),
    )
}

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..40).prop_map(|w| w.join(" "))
}

proptest! {
    #[test]
    fn prop_extraction_is_bounded_and_sorted(text in sentence()) {
        let p = profiler();
        let catalog = p.extractor().catalog();
        let matches = p.extractor().extract(&text);
        for m in &matches {
            let c = m.confidence.value();
            prop_assert!(c > 0.0 && c <= 1.0);
            prop_assert!(catalog.get(&m.concept_id).is_some());
        }
        let ranks: Vec<f64> = matches
            .iter()
            .map(|m| m.confidence.value() * catalog.weight(&m.concept_id))
            .collect();
        prop_assert!(ranks.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn prop_classification_is_bounded(text in sentence()) {
        let c = profiler().classifier().classify(&text);
        let v = c.confidence.value();
        prop_assert!((0.0..=1.0).contains(&v));
        if !c.has_evidence {
            prop_assert_eq!(v, 0.3);
        }
    }

    #[test]
    fn prop_arbitrary_unicode_never_panics(text in "\\PC{0,300}") {
        let profile = profiler().profile(&text);
        prop_assert!(profile.level.confidence.value() <= 1.0);
        prop_assert_eq!(normalize(&profile.normalized), profile.normalized);
    }
}

#[test]
fn long_text_stays_linear() {
    let text = "Students will analyze sustainable design methods. ".repeat(2_000);
    let started = std::time::Instant::now();
    let profile = profiler().profile(&text);
    assert!(!profile.concepts.is_empty());
    assert!(started.elapsed().as_secs() < 10);
}
