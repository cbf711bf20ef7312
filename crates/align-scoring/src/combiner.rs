//! Blends the three sub-scores (and an optional baseline) into the final score.

use align_core::config::ScoringConfig;
use align_core::constants::{MAX_SCORE, MIN_SCORE};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedScore {
    /// Final score, always within [1, 5].
    pub enhanced_score: f64,
    /// Within [0, 1].
    pub confidence: f64,
    /// Weighted sub-scores on the 0–5 scale, before blending and clamping.
    pub raw_score: f64,
    pub baseline_applied: bool,
}

#[derive(Debug, Clone)]
pub struct ScoreCombiner {
    config: ScoringConfig,
}

impl Default for ScoreCombiner {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

impl ScoreCombiner {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// `raw = 5 × (ws·semantic + wa·concept + wc·coherence)`; a baseline above
    /// zero is blended in at `baseline_blend`; the result is clamped to [1, 5].
    /// Confidence is the sub-score mean, scaled down when semantic similarity
    /// is under the low-signal threshold.
    pub fn combine(
        &self,
        semantic: f64,
        concept: f64,
        coherence: f64,
        baseline: Option<f64>,
    ) -> CombinedScore {
        let c = &self.config;
        let (semantic, concept, coherence) = (unit(semantic), unit(concept), unit(coherence));

        let raw_score = (c.semantic_weight * semantic
            + c.concept_weight * concept
            + c.coherence_weight * coherence)
            * MAX_SCORE;

        let baseline = baseline.filter(|b| b.is_finite() && *b > 0.0);
        let blended = match baseline {
            Some(b) => (1.0 - c.baseline_blend) * raw_score + c.baseline_blend * b,
            None => raw_score,
        };

        let mut confidence = (semantic + concept + coherence) / 3.0;
        if semantic < c.low_signal_threshold {
            confidence *= c.low_signal_penalty;
        }

        CombinedScore {
            enhanced_score: blended.clamp(MIN_SCORE, MAX_SCORE),
            confidence: confidence.clamp(0.0, 1.0),
            raw_score,
            baseline_applied: baseline.is_some(),
        }
    }
}

/// Clamp into [0, 1], mapping NaN to 0.
fn unit(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn perfect_subscores_give_five() {
        let r = ScoreCombiner::default().combine(1.0, 1.0, 1.0, None);
        assert!(approx(r.enhanced_score, 5.0));
        assert!(approx(r.confidence, 1.0));
        assert!(!r.baseline_applied);
    }

    #[test]
    fn zero_subscores_clamp_to_one() {
        let r = ScoreCombiner::default().combine(0.0, 0.0, 0.0, None);
        assert_eq!(r.enhanced_score, 1.0);
        assert_eq!(r.confidence, 0.0);
        assert_eq!(r.raw_score, 0.0);
    }

    #[test]
    fn baseline_is_blended_at_thirty_percent() {
        let r = ScoreCombiner::default().combine(0.5, 0.5, 0.5, Some(5.0));
        // raw 2.5 -> 0.7 * 2.5 + 0.3 * 5 = 3.25
        assert!(approx(r.enhanced_score, 3.25));
        assert!(r.baseline_applied);
    }

    #[test]
    fn non_positive_baseline_means_none() {
        let with_zero = ScoreCombiner::default().combine(0.5, 0.5, 0.5, Some(0.0));
        let without = ScoreCombiner::default().combine(0.5, 0.5, 0.5, None);
        assert_eq!(with_zero, without);
        assert!(!ScoreCombiner::default().combine(0.5, 0.5, 0.5, Some(-2.0)).baseline_applied);
    }

    #[test]
    fn low_semantic_signal_penalizes_confidence() {
        let r = ScoreCombiner::default().combine(0.1, 0.8, 0.9, None);
        assert!(approx(r.confidence, 0.6 * 0.7));
        let r = ScoreCombiner::default().combine(0.2, 0.8, 0.8, None);
        assert!(approx(r.confidence, 0.6));
    }

    #[test]
    fn custom_weights_are_honoured() {
        let combiner = ScoreCombiner::new(ScoringConfig::with_weights(0.3, 0.4, 0.3));
        let r = combiner.combine(1.0, 0.0, 0.0, None);
        assert!(approx(r.raw_score, 1.5));
        assert!(approx(r.enhanced_score, 1.5));
    }

    #[test]
    fn out_of_range_inputs_are_clamped() {
        let r = ScoreCombiner::default().combine(f64::NAN, 7.0, -1.0, Some(f64::INFINITY));
        assert!((1.0..=5.0).contains(&r.enhanced_score));
        assert!((0.0..=1.0).contains(&r.confidence));
        assert!(!r.baseline_applied);
    }
}
