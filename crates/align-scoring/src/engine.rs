//! Similarity engine: the three sub-scores for a pair of profiles.

use std::sync::Arc;

use align_catalog::ConceptCatalog;
use align_core::errors::{AlignError, AlignResult};
use align_core::models::{CognitiveLevelClassification, TextProfile};
use align_core::traits::{ISimilarityBackend, SemanticInput};
use tracing::debug;

use crate::coherence::cognitive_coherence;
use crate::concept_alignment::{align_concepts, ConceptAlignment};

/// Everything the combiner and explainer need from a comparison.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityReport {
    pub semantic_similarity: f64,
    pub concept_alignment: f64,
    pub cognitive_coherence: f64,
    pub concepts: ConceptAlignment,
    pub source_level: CognitiveLevelClassification,
    pub target_level: CognitiveLevelClassification,
    /// Name of the semantic backend used.
    pub method: String,
}

#[derive(Clone)]
pub struct SimilarityEngine {
    catalog: Arc<ConceptCatalog>,
    backend: Arc<dyn ISimilarityBackend>,
}

impl SimilarityEngine {
    pub fn new(catalog: Arc<ConceptCatalog>, backend: Arc<dyn ISimilarityBackend>) -> Self {
        Self { catalog, backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn compare(&self, source: &TextProfile, target: &TextProfile) -> AlignResult<SimilarityReport> {
        let _span = align_core::compare_span!(self.backend.name()).entered();

        let semantic = self
            .backend
            .semantic_similarity(SemanticInput { source, target })?;
        if !semantic.is_finite() {
            return Err(AlignError::AnalysisFailed {
                reason: format!("{} produced a non-finite similarity", self.backend.name()),
            });
        }

        let alignment = align_concepts(&self.catalog, source, target);
        let coherence = cognitive_coherence(&source.level, &target.level);

        debug!(
            semantic,
            concept = alignment.score,
            coherence,
            direct = alignment.direct.len(),
            bridged = alignment.bridges.len(),
            missing = alignment.missing.len(),
            "compared profiles"
        );

        Ok(SimilarityReport {
            semantic_similarity: semantic.clamp(0.0, 1.0),
            concept_alignment: alignment.score,
            cognitive_coherence: coherence,
            concepts: alignment,
            source_level: source.level,
            target_level: target.level,
            method: self.backend.name().to_string(),
        })
    }
}
