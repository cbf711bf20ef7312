//! Threshold bands for each sub-score and for the final score.

/// Semantic similarity band: above 0.7, above 0.4, otherwise limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SemanticBand {
    Strong,
    Moderate,
    Limited,
}

impl SemanticBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::Strong
        } else if score > 0.4 {
            Self::Moderate
        } else {
            Self::Limited
        }
    }
}

/// Concept alignment band: above 0.7, above 0.3, otherwise weak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConceptBand {
    Excellent,
    Good,
    Weak,
}

impl ConceptBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.7 {
            Self::Excellent
        } else if score > 0.3 {
            Self::Good
        } else {
            Self::Weak
        }
    }
}

/// Cognitive coherence band: above 0.8, above 0.6, otherwise a mismatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoherenceBand {
    Strong,
    Compatible,
    Mismatch,
}

impl CoherenceBand {
    pub fn from_score(score: f64) -> Self {
        if score > 0.8 {
            Self::Strong
        } else if score > 0.6 {
            Self::Compatible
        } else {
            Self::Mismatch
        }
    }
}

/// Final score band on the 1–5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// Below 2.5.
    Weak,
    /// [2.5, 3.5).
    Moderate,
    /// [3.5, 4.0): no band suggestion.
    Adequate,
    /// 4.0 and above.
    Strong,
}

impl ScoreBand {
    pub fn from_score(score: f64) -> Self {
        if score < 2.5 {
            Self::Weak
        } else if score < 3.5 {
            Self::Moderate
        } else if score < 4.0 {
            Self::Adequate
        } else {
            Self::Strong
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_are_exclusive_above() {
        assert_eq!(SemanticBand::from_score(0.7), SemanticBand::Moderate);
        assert_eq!(SemanticBand::from_score(0.71), SemanticBand::Strong);
        assert_eq!(SemanticBand::from_score(0.4), SemanticBand::Limited);
        assert_eq!(ConceptBand::from_score(0.3), ConceptBand::Weak);
        assert_eq!(ConceptBand::from_score(1.0), ConceptBand::Excellent);
        assert_eq!(CoherenceBand::from_score(0.8), CoherenceBand::Compatible);
        assert_eq!(CoherenceBand::from_score(0.9), CoherenceBand::Strong);
        assert_eq!(CoherenceBand::from_score(0.6), CoherenceBand::Mismatch);
    }

    #[test]
    fn score_bands() {
        assert_eq!(ScoreBand::from_score(1.0), ScoreBand::Weak);
        assert_eq!(ScoreBand::from_score(2.5), ScoreBand::Moderate);
        assert_eq!(ScoreBand::from_score(3.5), ScoreBand::Adequate);
        assert_eq!(ScoreBand::from_score(3.99), ScoreBand::Adequate);
        assert_eq!(ScoreBand::from_score(4.0), ScoreBand::Strong);
    }
}
