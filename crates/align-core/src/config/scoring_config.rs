use serde::{Deserialize, Serialize};

use super::defaults;

/// Score combiner configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Weight of semantic similarity in the raw score.
    pub semantic_weight: f64,
    /// Weight of concept alignment in the raw score.
    pub concept_weight: f64,
    /// Weight of cognitive coherence in the raw score.
    pub coherence_weight: f64,
    /// Share of the baseline score when one is supplied.
    pub baseline_blend: f64,
    /// Semantic similarity below this penalises confidence.
    pub low_signal_threshold: f64,
    /// Confidence multiplier applied under the low-signal threshold.
    pub low_signal_penalty: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            semantic_weight: defaults::DEFAULT_SEMANTIC_WEIGHT,
            concept_weight: defaults::DEFAULT_CONCEPT_WEIGHT,
            coherence_weight: defaults::DEFAULT_COHERENCE_WEIGHT,
            baseline_blend: defaults::DEFAULT_BASELINE_BLEND,
            low_signal_threshold: defaults::DEFAULT_LOW_SIGNAL_THRESHOLD,
            low_signal_penalty: defaults::DEFAULT_LOW_SIGNAL_PENALTY,
        }
    }
}

impl ScoringConfig {
    /// Scoring config with custom sub-score weights and default everything else.
    pub fn with_weights(semantic: f64, concept: f64, coherence: f64) -> Self {
        Self {
            semantic_weight: semantic,
            concept_weight: concept,
            coherence_weight: coherence,
            ..Self::default()
        }
    }

    pub fn weight_sum(&self) -> f64 {
        self.semantic_weight + self.concept_weight + self.coherence_weight
    }
}
