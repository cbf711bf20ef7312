//! Grouping and averaging for matrix analysis.

use align_core::constants::{MAX_SCORE, MIN_SCORE};
use align_core::models::{CategoryAlignment, MatrixRow, OutcomeStatement, PairScore};

/// Group one source's pair scores by target category, in order of first appearance.
///
/// `scores[i]` must belong to `targets[i]`.
pub fn build_row(source_id: &str, targets: &[OutcomeStatement], scores: Vec<PairScore>) -> MatrixRow {
    let mut groups: Vec<(String, Vec<PairScore>)> = Vec::new();
    for (target, score) in targets.iter().zip(scores) {
        let category = target.category_or_default();
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(score),
            None => groups.push((category.to_string(), vec![score])),
        }
    }

    MatrixRow {
        source_id: source_id.to_string(),
        categories: groups
            .into_iter()
            .map(|(category, scores)| aggregate(category, scores))
            .collect(),
    }
}

/// Mean score rounded to an integer (clamped to the scale) and to two decimals.
pub fn aggregate(category: String, individual_scores: Vec<PairScore>) -> CategoryAlignment {
    let mean = if individual_scores.is_empty() {
        MIN_SCORE
    } else {
        individual_scores.iter().map(|s| s.enhanced_score).sum::<f64>()
            / individual_scores.len() as f64
    };
    CategoryAlignment {
        category,
        score: mean.round().clamp(MIN_SCORE, MAX_SCORE) as u8,
        exact_score: (mean * 100.0).round() / 100.0,
        individual_scores,
    }
}
