use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CognitiveLevel, Confidence};

/// A catalog concept: detection patterns, synonyms, weight, level, and neighbours.
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConceptDefinition {
    pub id: String,
    /// Regexes matched case-insensitively against normalized text, in order.
    pub detection_patterns: Vec<String>,
    /// Literal substrings that also imply the concept.
    #[serde(default)]
    pub synonyms: Vec<String>,
    /// Importance in (0, 1].
    pub weight: f64,
    pub cognitive_level: CognitiveLevel,
    /// Ids of semantically adjacent concepts, used for bridging only.
    #[serde(default)]
    pub related_concepts: Vec<String>,
}

impl ConceptDefinition {
    pub fn is_related_to(&self, other_id: &str) -> bool {
        self.related_concepts.iter().any(|r| r == other_id)
    }
}

/// A concept detected in one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConceptMatch {
    pub concept_id: String,
    pub confidence: Confidence,
}

impl ConceptMatch {
    pub fn new(concept_id: impl Into<String>, confidence: f64) -> Self {
        Self {
            concept_id: concept_id.into(),
            confidence: Confidence::new(confidence),
        }
    }
}

/// A source concept credited through a related concept found in the target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConceptBridge {
    pub concept_id: String,
    /// First related concept, in declared order, present in the target.
    pub via: String,
}
