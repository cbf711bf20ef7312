//! Input checks run before any analysis.

use align_core::constants::MAX_SCORE;
use align_core::errors::{AlignError, AlignResult};
use align_core::models::OutcomeStatement;

/// Text must be non-empty after trimming.
pub fn validate_text(field: &str, text: &str) -> AlignResult<()> {
    if text.trim().is_empty() {
        return Err(AlignError::invalid_input(field, "must not be empty"));
    }
    Ok(())
}

/// `None` for a baseline at or below zero; an error when it is not finite or above the scale.
pub fn validate_baseline(baseline: f64) -> AlignResult<Option<f64>> {
    if !baseline.is_finite() {
        return Err(AlignError::invalid_input("baseline", "must be a finite number"));
    }
    if baseline > MAX_SCORE {
        return Err(AlignError::invalid_input(
            "baseline",
            format!("{baseline} is above the maximum score of {MAX_SCORE}"),
        ));
    }
    Ok((baseline > 0.0).then_some(baseline))
}

pub fn validate_outcomes(field: &str, outcomes: &[OutcomeStatement]) -> AlignResult<()> {
    if outcomes.is_empty() {
        return Err(AlignError::invalid_input(field, "must contain at least one outcome"));
    }
    for (i, outcome) in outcomes.iter().enumerate() {
        validate_text(&format!("{field}[{i}].text"), &outcome.text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_text_is_rejected() {
        assert!(validate_text("source", "  \n\t ").unwrap_err().is_invalid_input());
        assert!(validate_text("source", "x").is_ok());
    }

    #[test]
    fn baseline_rules() {
        assert_eq!(validate_baseline(0.0).unwrap(), None);
        assert_eq!(validate_baseline(-1.0).unwrap(), None);
        assert_eq!(validate_baseline(3.0).unwrap(), Some(3.0));
        assert_eq!(validate_baseline(5.0).unwrap(), Some(5.0));
        assert!(validate_baseline(5.01).is_err());
        assert!(validate_baseline(f64::NAN).is_err());
        assert!(validate_baseline(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn outcome_errors_name_the_offending_entry() {
        let outcomes = vec![
            OutcomeStatement {
                id: "a".into(),
                category: None,
                text: "fine".into(),
            },
            OutcomeStatement {
                id: "b".into(),
                category: None,
                text: " ".into(),
            },
        ];
        let err = validate_outcomes("targets", &outcomes).unwrap_err();
        assert!(err.to_string().contains("targets[1].text"));
        assert!(validate_outcomes("sources", &[]).is_err());
    }
}
