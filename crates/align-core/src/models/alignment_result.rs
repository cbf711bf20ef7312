use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CognitiveLevel, ConceptBridge, ConceptMatch};
use crate::constants::{FAILED_METHOD, MAX_SCORE, MIN_SCORE};

/// Which cascade stage produced a suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SuggestionKind {
    Level,
    Concept,
    Score,
    Assessment,
}

/// One improvement suggestion, without iconography.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub text: String,
}

impl Suggestion {
    pub fn new(kind: SuggestionKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

/// The engine's sole output type.
///
/// `enhanced_score` is in [1, 5]; `confidence` and the three sub-scores are in [0, 1].
/// `aligned_concepts` lists direct matches before bridged ones and never overlaps
/// `missing_concepts`. `suggestions` holds at most five entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AlignmentResult {
    pub enhanced_score: f64,
    pub confidence: f64,
    pub semantic_similarity: f64,
    pub concept_alignment: f64,
    pub cognitive_coherence: f64,
    pub aligned_concepts: Vec<String>,
    pub missing_concepts: Vec<String>,
    pub bridges: Vec<ConceptBridge>,
    pub source_level: CognitiveLevel,
    pub target_level: CognitiveLevel,
    pub source_level_confidence: f64,
    pub target_level_confidence: f64,
    pub source_concepts: Vec<ConceptMatch>,
    pub target_concepts: Vec<ConceptMatch>,
    pub reasoning: String,
    pub suggestions: Vec<String>,
    pub suggestion_details: Vec<Suggestion>,
    /// Semantic backend that produced `semantic_similarity`, or "failed".
    pub analysis_method: String,
    /// The baseline that was blended in, if any.
    pub baseline_score: Option<f64>,
}

impl AlignmentResult {
    /// Result returned when analysis fails internally.
    ///
    /// The score falls back to the baseline (clamped to the scale) or the scale minimum.
    pub fn failed(baseline: Option<f64>, reason: &str) -> Self {
        let enhanced_score = baseline
            .filter(|b| b.is_finite() && *b > 0.0)
            .map(|b| b.clamp(MIN_SCORE, MAX_SCORE))
            .unwrap_or(MIN_SCORE);
        Self {
            enhanced_score,
            confidence: 0.0,
            semantic_similarity: 0.0,
            concept_alignment: 0.0,
            cognitive_coherence: 0.0,
            aligned_concepts: Vec::new(),
            missing_concepts: Vec::new(),
            bridges: Vec::new(),
            source_level: CognitiveLevel::DEFAULT,
            target_level: CognitiveLevel::DEFAULT,
            source_level_confidence: 0.0,
            target_level_confidence: 0.0,
            source_concepts: Vec::new(),
            target_concepts: Vec::new(),
            reasoning: format!("Analysis failed: {reason}. The score falls back to the baseline."),
            suggestions: Vec::new(),
            suggestion_details: Vec::new(),
            analysis_method: FAILED_METHOD.to_string(),
            baseline_score: baseline,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.analysis_method == FAILED_METHOD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failed_result_uses_baseline() {
        let r = AlignmentResult::failed(Some(3.5), "boom");
        assert_eq!(r.enhanced_score, 3.5);
        assert_eq!(r.confidence, 0.0);
        assert!(r.reasoning.starts_with("Analysis failed: boom"));
        assert!(r.is_failure());
    }

    #[test]
    fn failed_result_without_baseline_scores_minimum() {
        assert_eq!(AlignmentResult::failed(None, "x").enhanced_score, 1.0);
        assert_eq!(AlignmentResult::failed(Some(0.0), "x").enhanced_score, 1.0);
        assert_eq!(AlignmentResult::failed(Some(0.4), "x").enhanced_score, 1.0);
    }
}
