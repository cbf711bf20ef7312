use crate::errors::AlignResult;
use crate::models::TextProfile;

/// Both sides of a comparison, already extracted and classified.
#[derive(Debug, Clone, Copy)]
pub struct SemanticInput<'a> {
    pub source: &'a TextProfile,
    pub target: &'a TextProfile,
}

/// Produces the `semantic_similarity` sub-score.
///
/// Chosen once at engine construction; never swapped per call.
pub trait ISimilarityBackend: Send + Sync {
    /// Similarity in [0, 1].
    fn semantic_similarity(&self, input: SemanticInput<'_>) -> AlignResult<f64>;

    /// Backend name, reported as `analysis_method`.
    fn name(&self) -> &str;
}
