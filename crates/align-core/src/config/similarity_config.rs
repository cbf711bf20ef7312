use serde::{Deserialize, Serialize};

use super::defaults;

/// Similarity engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimilarityConfig {
    /// Semantic backend: "concept_overlap" or "embedding".
    pub backend: String,
    /// Discount applied to related-concept (bridged) credit.
    pub related_discount: f64,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            backend: defaults::DEFAULT_SIMILARITY_BACKEND.to_string(),
            related_discount: defaults::DEFAULT_RELATED_DISCOUNT,
        }
    }
}

impl SimilarityConfig {
    pub const BACKENDS: [&'static str; 2] = ["concept_overlap", "embedding"];
}
