//! Cognitive coherence between two classified texts.

use align_core::models::{CognitiveLevel, CognitiveLevelClassification};

/// Coherence from the level distance: 1.0, 0.8, 0.6, then 0.3 for three or
/// more levels apart, plus 0.1 (capped at 1) when the target is at or above
/// the source.
///
/// When neither text carries level evidence there is nothing to compare and
/// coherence is 0. When only one side has evidence, the other side counts at
/// the default level.
pub fn cognitive_coherence(
    source: &CognitiveLevelClassification,
    target: &CognitiveLevelClassification,
) -> f64 {
    if !source.has_evidence && !target.has_evidence {
        return 0.0;
    }
    level_coherence(source.level, target.level)
}

/// The distance table alone, without the evidence check.
pub fn level_coherence(source: CognitiveLevel, target: CognitiveLevel) -> f64 {
    let base = match source.distance(target) {
        0 => 1.0,
        1 => 0.8,
        2 => 0.6,
        _ => 0.3,
    };
    if target >= source {
        (base + 0.1_f64).min(1.0)
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_core::models::Confidence;
    use CognitiveLevel::*;

    fn classified(level: CognitiveLevel) -> CognitiveLevelClassification {
        CognitiveLevelClassification {
            level,
            confidence: Confidence::new(1.0),
            has_evidence: true,
        }
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn distance_table() {
        assert!(approx(level_coherence(Apply, Apply), 1.0));
        assert!(approx(level_coherence(Analyze, Apply), 0.8));
        assert!(approx(level_coherence(Evaluate, Apply), 0.6));
        assert!(approx(level_coherence(Create, Remember), 0.3));
    }

    #[test]
    fn target_at_or_above_source_gets_bonus() {
        assert!(approx(level_coherence(Apply, Analyze), 0.9));
        assert!(approx(level_coherence(Apply, Evaluate), 0.7));
        assert!(approx(level_coherence(Remember, Create), 0.4));
    }

    #[test]
    fn no_evidence_on_either_side_is_zero() {
        let fallback = CognitiveLevelClassification::fallback();
        assert_eq!(cognitive_coherence(&fallback, &fallback), 0.0);
    }

    #[test]
    fn one_sided_evidence_uses_default_level() {
        let fallback = CognitiveLevelClassification::fallback();
        // Understand (default) vs Analyze: distance 2, target above -> 0.7
        assert!(approx(cognitive_coherence(&fallback, &classified(Analyze)), 0.7));
    }
}
