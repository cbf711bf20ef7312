//! The three-clause reasoning paragraph.

use crate::bands::{CoherenceBand, ConceptBand, SemanticBand};
use crate::explainer::ExplanationInput;
use crate::templates;

/// Semantic, concept, and coherence clauses joined by ". " with a closing period.
pub fn build_reasoning(input: &ExplanationInput<'_>) -> String {
    let clauses = [
        templates::semantic_clause(
            SemanticBand::from_score(input.semantic_similarity),
            input.semantic_similarity,
        ),
        templates::concept_clause(
            ConceptBand::from_score(input.concept_alignment),
            input.aligned,
        ),
        templates::coherence_clause(
            CoherenceBand::from_score(input.cognitive_coherence),
            input.source_level,
            input.target_level,
        ),
    ];
    format!("{}.", clauses.join(". "))
}
