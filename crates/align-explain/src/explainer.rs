//! Explanation generator entry point.

use std::sync::Arc;

use align_catalog::ConceptCatalog;
use align_core::config::ExplanationConfig;
use align_core::constants::MAX_SUGGESTIONS;
use align_core::models::{CognitiveLevel, ConceptBridge, Suggestion};
use tracing::trace;

use crate::reasoning::build_reasoning;
use crate::suggestions::build_suggestions;

/// Everything the explanation depends on for one analyzed pair.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationInput<'a> {
    pub enhanced_score: f64,
    pub semantic_similarity: f64,
    pub concept_alignment: f64,
    pub cognitive_coherence: f64,
    /// Direct matches first, then bridged.
    pub aligned: &'a [String],
    pub missing: &'a [String],
    pub bridges: &'a [ConceptBridge],
    pub source_level: CognitiveLevel,
    pub target_level: CognitiveLevel,
    /// Normalized source text.
    pub source_text: &'a str,
    /// Normalized target text.
    pub target_text: &'a str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Explanation {
    pub reasoning: String,
    pub suggestions: Vec<Suggestion>,
}

impl Explanation {
    /// Suggestion texts in priority order.
    pub fn texts(&self) -> Vec<String> {
        self.suggestions.iter().map(|s| s.text.clone()).collect()
    }
}

#[derive(Debug, Clone)]
pub struct Explainer {
    catalog: Arc<ConceptCatalog>,
    config: ExplanationConfig,
}

impl Explainer {
    pub fn new(catalog: Arc<ConceptCatalog>, config: ExplanationConfig) -> Self {
        Self { catalog, config }
    }

    pub fn explain(&self, input: &ExplanationInput<'_>) -> Explanation {
        let cap = self.config.max_suggestions.min(MAX_SUGGESTIONS);
        let reasoning = build_reasoning(input);
        let suggestions =
            build_suggestions(input, &self.catalog, self.config.high_weight_threshold, cap);
        trace!(suggestions = suggestions.len(), "explanation built");
        Explanation {
            reasoning,
            suggestions,
        }
    }
}
