//! Property tests for the sub-scores and the combined score.

use std::sync::Arc;

use align_analysis::{CognitiveLevelClassifier, ConceptExtractor, TextProfiler};
use align_catalog::{ConceptCatalog, LevelCatalog};
use align_scoring::{ConceptOverlapBackend, ScoreCombiner, SimilarityEngine};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "analyze", "evaluate", "apply", "design", "create", "describe", "sustainability",
    "innovation", "management", "strategy", "lifecycle", "assessment", "methods",
    "research", "students", "green", "technology", "the", "and", "of", "practical",
];

fn sentence() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCABULARY), 0..12).prop_map(|w| w.join(" "))
}

fn setup() -> (TextProfiler, SimilarityEngine) {
    let catalog = Arc::new(ConceptCatalog::builtin().unwrap());
    let levels = Arc::new(LevelCatalog::builtin().unwrap());
    let profiler = TextProfiler::new(
        ConceptExtractor::new(catalog.clone()),
        CognitiveLevelClassifier::new(levels),
    );
    let backend = Arc::new(ConceptOverlapBackend::new(catalog.clone(), 0.6));
    (profiler, SimilarityEngine::new(catalog, backend))
}

proptest! {
    #[test]
    fn sub_scores_and_score_stay_in_bounds(a in sentence(), b in sentence(), baseline in 0.0f64..5.0) {
        let (profiler, engine) = setup();
        let r = engine.compare(&profiler.profile(&a), &profiler.profile(&b)).unwrap();
        prop_assert!((0.0..=1.0).contains(&r.semantic_similarity));
        prop_assert!((0.0..=1.0).contains(&r.concept_alignment));
        prop_assert!((0.0..=1.0).contains(&r.cognitive_coherence));

        let c = ScoreCombiner::default().combine(
            r.semantic_similarity,
            r.concept_alignment,
            r.cognitive_coherence,
            Some(baseline),
        );
        prop_assert!((1.0..=5.0).contains(&c.enhanced_score));
        prop_assert!((0.0..=1.0).contains(&c.confidence));
    }

    #[test]
    fn concept_outcomes_partition_source_concepts(a in sentence(), b in sentence()) {
        let (profiler, engine) = setup();
        let source = profiler.profile(&a);
        let r = engine.compare(&source, &profiler.profile(&b)).unwrap();

        let mut seen: Vec<String> = r.concepts.aligned();
        seen.extend(r.concepts.missing.iter().cloned());
        let mut expected: Vec<String> = source.concept_ids().map(str::to_string).collect();
        seen.sort();
        expected.sort();
        prop_assert_eq!(seen, expected);
        for m in &r.concepts.missing {
            prop_assert!(!r.concepts.aligned().contains(m));
        }
    }

    #[test]
    fn self_comparison_is_perfect_when_concepts_exist(a in sentence()) {
        let (profiler, engine) = setup();
        let p = profiler.profile(&a);
        prop_assume!(!p.concepts.is_empty());
        let r = engine.compare(&p, &p).unwrap();
        prop_assert!((r.semantic_similarity - 1.0).abs() < 1e-9);
        prop_assert!((r.concept_alignment - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_is_monotonic_in_each_sub_score(
        s in 0.0f64..1.0, c in 0.0f64..1.0, h in 0.0f64..1.0, bump in 0.0f64..0.5,
    ) {
        let combiner = ScoreCombiner::default();
        let base = combiner.combine(s, c, h, None).enhanced_score;
        prop_assert!(combiner.combine((s + bump).min(1.0), c, h, None).enhanced_score >= base);
        prop_assert!(combiner.combine(s, (c + bump).min(1.0), h, None).enhanced_score >= base);
        prop_assert!(combiner.combine(s, c, (h + bump).min(1.0), None).enhanced_score >= base);
    }
}
