use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Category for target outcomes that carry none.
pub const DEFAULT_CATEGORY: &str = "default";

/// One outcome statement in a matrix comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutcomeStatement {
    pub id: String,
    #[serde(default)]
    pub category: Option<String>,
    pub text: String,
}

impl OutcomeStatement {
    pub fn category_or_default(&self) -> &str {
        self.category.as_deref().unwrap_or(DEFAULT_CATEGORY)
    }
}

/// Score for one source × target pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PairScore {
    pub target_id: String,
    pub enhanced_score: f64,
    pub confidence: f64,
    pub reasoning: String,
}

/// Aggregate over one source and every target in a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CategoryAlignment {
    pub category: String,
    /// Mean score rounded to the nearest integer on the 1-5 scale.
    pub score: u8,
    /// Mean score rounded to two decimals.
    pub exact_score: f64,
    pub individual_scores: Vec<PairScore>,
}

/// All category aggregates for one source outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatrixRow {
    pub source_id: String,
    pub categories: Vec<CategoryAlignment>,
}

impl MatrixRow {
    pub fn category(&self, name: &str) -> Option<&CategoryAlignment> {
        self.categories.iter().find(|c| c.category == name)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatrixReport {
    pub rows: Vec<MatrixRow>,
    pub pair_count: usize,
}

impl MatrixReport {
    pub fn row(&self, source_id: &str) -> Option<&MatrixRow> {
        self.rows.iter().find(|r| r.source_id == source_id)
    }
}
