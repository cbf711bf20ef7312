//! Weighted concept overlap, the default semantic backend.

use std::sync::Arc;

use align_catalog::ConceptCatalog;
use align_core::errors::AlignResult;
use align_core::traits::{ISimilarityBackend, SemanticInput};

pub const NAME: &str = "concept_overlap";

/// Semantic similarity from extracted concepts alone.
///
/// Only the source's concepts are scored; a concept found only in the target
/// never moves the result. A concept both texts hold adds `w·min(cs, ct)` to
/// the score and `w·max(cs, ct)` to the total. A source concept the target
/// lacks adds `w·cs` to the total, and earns discounted credit back for each
/// related concept the target holds, at the pair's mean weight times the
/// discount.
#[derive(Debug, Clone)]
pub struct ConceptOverlapBackend {
    catalog: Arc<ConceptCatalog>,
    related_discount: f64,
}

impl ConceptOverlapBackend {
    pub fn new(catalog: Arc<ConceptCatalog>, related_discount: f64) -> Self {
        Self {
            catalog,
            related_discount,
        }
    }

    pub fn overlap(&self, input: SemanticInput<'_>) -> f64 {
        let SemanticInput { source, target } = input;
        let mut score = 0.0;
        let mut total = 0.0;

        for s in &source.concepts {
            let w = self.catalog.weight(&s.concept_id);
            let cs = s.confidence.value();

            if let Some(ct) = target.confidence_of(&s.concept_id) {
                score += w * cs.min(ct);
                total += w * cs.max(ct);
                continue;
            }

            total += w * cs;
            for t in &target.concepts {
                if !self.catalog.is_related(&s.concept_id, &t.concept_id) {
                    continue;
                }
                let pair_weight =
                    self.related_discount * (w + self.catalog.weight(&t.concept_id)) / 2.0;
                let ct = t.confidence.value();
                score += pair_weight * cs.min(ct);
                total += pair_weight * cs.max(ct);
            }
        }

        if total > 0.0 {
            (score / total).min(1.0)
        } else {
            0.0
        }
    }
}

impl ISimilarityBackend for ConceptOverlapBackend {
    fn semantic_similarity(&self, input: SemanticInput<'_>) -> AlignResult<f64> {
        Ok(self.overlap(input))
    }

    fn name(&self) -> &str {
        NAME
    }
}
