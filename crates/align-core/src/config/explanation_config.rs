use serde::{Deserialize, Serialize};

use super::defaults;

/// Explanation generator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExplanationConfig {
    /// Suggestion cap, at most 5.
    pub max_suggestions: usize,
    /// Concepts weighted above this earn their own suggestion when missing.
    pub high_weight_threshold: f64,
}

impl Default for ExplanationConfig {
    fn default() -> Self {
        Self {
            max_suggestions: defaults::DEFAULT_MAX_SUGGESTIONS,
            high_weight_threshold: defaults::DEFAULT_HIGH_WEIGHT_THRESHOLD,
        }
    }
}
