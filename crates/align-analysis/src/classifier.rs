//! Cognitive-level classification.

use std::sync::Arc;

use align_catalog::LevelCatalog;
use align_core::constants::LEVEL_PATTERN_WEIGHT;
use align_core::models::{CognitiveLevel, CognitiveLevelClassification, Confidence};

use crate::normalize::normalize;

/// Picks the dominant cognitive level of a text.
///
/// Each level scores `2 × pattern occurrences + distinct indicators found`.
/// The highest score wins, ties go to the lower level, and confidence is the
/// winner's share of the total. Texts with no evidence get the default level
/// at confidence 0.3.
#[derive(Debug, Clone)]
pub struct CognitiveLevelClassifier {
    levels: Arc<LevelCatalog>,
}

impl CognitiveLevelClassifier {
    pub fn new(levels: Arc<LevelCatalog>) -> Self {
        Self { levels }
    }

    pub fn classify(&self, text: &str) -> CognitiveLevelClassification {
        self.classify_normalized(&normalize(text))
    }

    pub fn classify_normalized(&self, text: &str) -> CognitiveLevelClassification {
        let _span = align_core::classify_span!(text.len()).entered();
        let scores = self.level_scores(text);
        let total: u32 = scores.iter().map(|(_, s)| s).sum();
        if total == 0 {
            return CognitiveLevelClassification::fallback();
        }

        // Ascending order plus a strict comparison keeps the lowest level on ties.
        let mut best = (CognitiveLevel::DEFAULT, 0u32);
        for &(level, score) in &scores {
            if score > best.1 {
                best = (level, score);
            }
        }

        CognitiveLevelClassification {
            level: best.0,
            confidence: Confidence::new(f64::from(best.1) / f64::from(total.max(1))),
            has_evidence: true,
        }
    }

    /// Raw score per level, ascending.
    pub fn level_scores(&self, text: &str) -> Vec<(CognitiveLevel, u32)> {
        self.levels
            .iter()
            .map(|rule| {
                let pattern_hits: usize = rule.patterns.iter().map(|p| p.find_iter(text).count()).sum();
                let indicator_hits = rule.indicators.iter().filter(|i| i.is_match(text)).count();
                let score = LEVEL_PATTERN_WEIGHT as usize * pattern_hits + indicator_hits;
                (rule.level, u32::try_from(score).unwrap_or(u32::MAX))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> CognitiveLevelClassifier {
        CognitiveLevelClassifier::new(Arc::new(LevelCatalog::builtin().unwrap()))
    }

    #[test]
    fn no_evidence_returns_default_level() {
        let c = classifier().classify("abc");
        assert_eq!(c.level, CognitiveLevel::Understand);
        assert_eq!(c.confidence.value(), 0.3);
        assert!(!c.has_evidence);

        assert_eq!(classifier().classify("").level, CognitiveLevel::Understand);
    }

    #[test]
    fn single_verb_wins_outright() {
        let c = classifier().classify("Design a bridge");
        assert_eq!(c.level, CognitiveLevel::Create);
        assert_eq!(c.confidence.value(), 1.0);
    }

    #[test]
    fn ties_go_to_the_lower_level() {
        // analyze (2) and evaluate (2) tie.
        let c = classifier().classify(
            "Students will analyze environmental sustainability frameworks and evaluate \
             lifecycle assessment methodologies",
        );
        assert_eq!(c.level, CognitiveLevel::Analyze);
        assert_eq!(c.confidence.value(), 0.5);
    }

    #[test]
    fn indicators_count_once_per_distinct_word() {
        let scores = classifier().level_scores("basic basic basic facts");
        let remember = scores
            .iter()
            .find(|(l, _)| *l == CognitiveLevel::Remember)
            .unwrap()
            .1;
        assert_eq!(remember, 2);
    }

    #[test]
    fn patterns_count_per_occurrence() {
        let scores = classifier().level_scores("compare and contrast, then compare again");
        let analyze = scores
            .iter()
            .find(|(l, _)| *l == CognitiveLevel::Analyze)
            .unwrap()
            .1;
        assert_eq!(analyze, 6);
    }
}
