//! Concept extraction against the catalog.

use std::sync::Arc;

use align_catalog::ConceptCatalog;
use align_core::constants::{CONTEXT_BOOST, PATTERN_MATCH_CONFIDENCE, SYNONYM_CONFIDENCE};
use align_core::models::{ConceptMatch, Confidence};

use crate::normalize::normalize;

/// Scans text for catalog concepts.
///
/// Confidence per concept: each pattern contributes `min(1, hits × 0.3)`,
/// a synonym hit implies at least 0.7, and the best of those is boosted by
/// 0.2 when a related concept's own patterns also fire in the text. The boost
/// applies even without direct evidence, so a concept whose neighbour fires
/// is emitted at 0.2.
#[derive(Debug, Clone)]
pub struct ConceptExtractor {
    catalog: Arc<ConceptCatalog>,
}

impl ConceptExtractor {
    pub fn new(catalog: Arc<ConceptCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ConceptCatalog {
        &self.catalog
    }

    /// Normalize `text` and extract concepts from it.
    pub fn extract(&self, text: &str) -> Vec<ConceptMatch> {
        self.extract_normalized(&normalize(text))
    }

    /// Extract from text that is already normalized.
    ///
    /// Sorted descending by `confidence × weight`; ties keep catalog order.
    pub fn extract_normalized(&self, text: &str) -> Vec<ConceptMatch> {
        let _span = align_core::extract_span!(text.len()).entered();
        if text.is_empty() {
            return Vec::new();
        }

        // One pass over every pattern; the boost step reuses these flags.
        let pattern_hits: Vec<bool> = self.catalog.iter().map(|c| c.matches(text)).collect();

        let mut matches: Vec<(ConceptMatch, f64)> = Vec::new();
        for (idx, concept) in self.catalog.iter().enumerate() {
            let mut confidence = Confidence::ZERO;

            if pattern_hits[idx] {
                for pattern in concept.patterns() {
                    let count = pattern.find_iter(text).count();
                    if count > 0 {
                        confidence = confidence.max(Confidence::new(
                            count as f64 * PATTERN_MATCH_CONFIDENCE,
                        ));
                    }
                }
            }

            if concept.synonyms().iter().any(|s| text.contains(s.as_str())) {
                confidence = confidence.max(Confidence::new(SYNONYM_CONFIDENCE));
            }

            let related_present = concept.related().iter().any(|related| {
                self.catalog
                    .index_of(related)
                    .is_some_and(|i| pattern_hits[i])
            });
            if related_present {
                confidence = confidence + Confidence::new(CONTEXT_BOOST);
            }

            if confidence.is_zero() {
                continue;
            }

            let rank = confidence.value() * concept.weight();
            matches.push((
                ConceptMatch {
                    concept_id: concept.id().to_string(),
                    confidence,
                },
                rank,
            ));
        }

        matches.sort_by(|a, b| b.1.total_cmp(&a.1));
        matches.into_iter().map(|(m, _)| m).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extractor() -> ConceptExtractor {
        ConceptExtractor::new(Arc::new(ConceptCatalog::builtin().unwrap()))
    }

    fn confidence_of(matches: &[ConceptMatch], id: &str) -> Option<f64> {
        matches
            .iter()
            .find(|m| m.concept_id == id)
            .map(|m| m.confidence.value())
    }

    #[test]
    fn empty_text_yields_nothing() {
        let e = extractor();
        assert!(e.extract("").is_empty());
        assert!(e.extract("   \n\t ").is_empty());
    }

    #[test]
    fn single_pattern_hit_scores_point_three() {
        let m = extractor().extract("Describe basic sustainability terminology");
        assert_eq!(confidence_of(&m, "sustainability"), Some(0.3));
        // sustainability's neighbours ride on the boost
        assert_eq!(confidence_of(&m, "lifecycle_assessment"), Some(0.2));
        assert_eq!(m.len(), 4);
        assert_eq!(m[0].concept_id, "sustainability");
    }

    #[test]
    fn repeated_hits_accumulate() {
        let m = extractor().extract("sustainable design, sustainable sourcing, sustainable use");
        // three hits of one pattern, plus a design concept
        let c = confidence_of(&m, "sustainability").unwrap();
        assert!((c - 0.9).abs() < 1e-9, "got {c}");
    }

    #[test]
    fn synonym_implies_point_seven() {
        let m = extractor().extract("Reach net zero by 2030");
        assert_eq!(confidence_of(&m, "sustainability"), Some(0.7));
    }

    #[test]
    fn related_concept_boosts_by_point_two() {
        let m = extractor().extract("Evaluate management strategies");
        // management is related to strategy, and both fire.
        let management = confidence_of(&m, "management").unwrap();
        assert!((management - 0.5).abs() < 1e-9, "got {management}");
    }

    #[test]
    fn related_hit_alone_emits_concept_at_boost() {
        // only strategy's own patterns fire; management rides on the boost.
        let m = extractor().extract("strategic planning");
        assert_eq!(confidence_of(&m, "management"), Some(0.2));
        assert_eq!(confidence_of(&m, "strategy"), Some(0.3));
    }

    #[test]
    fn boost_is_applied_once() {
        // resource_management has two related concepts firing here.
        let m = extractor().extract("sustainable practice and managing teams");
        assert_eq!(confidence_of(&m, "resource_management"), Some(0.2));
    }

    #[test]
    fn word_boundaries_prevent_partial_matches() {
        let m = extractor().extract("economic growth in a misleading market");
        assert!(confidence_of(&m, "sustainability").is_none());
        assert!(confidence_of(&m, "management").is_none());
    }

    #[test]
    fn sorted_by_weighted_confidence() {
        let m = extractor().extract(
            "Students will analyze environmental sustainability frameworks and evaluate \
             lifecycle assessment methodologies",
        );
        let catalog = ConceptCatalog::builtin().unwrap();
        let ranks: Vec<f64> = m
            .iter()
            .map(|c| c.confidence.value() * catalog.weight(&c.concept_id))
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] >= w[1]), "{ranks:?}");
    }

    #[test]
    fn confidences_stay_in_unit_interval() {
        let text = "sustainable ".repeat(50);
        let m = extractor().extract(&text);
        assert!(m.iter().all(|c| c.confidence.value() > 0.0 && c.confidence.value() <= 1.0));
    }
}
