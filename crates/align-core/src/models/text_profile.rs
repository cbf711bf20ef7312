use super::{CognitiveLevelClassification, ConceptMatch};

/// Everything the engine derives from one text before comparing it.
#[derive(Debug, Clone)]
pub struct TextProfile {
    pub normalized: String,
    /// Sorted descending by confidence × weight.
    pub concepts: Vec<ConceptMatch>,
    pub level: CognitiveLevelClassification,
}

impl TextProfile {
    pub fn confidence_of(&self, concept_id: &str) -> Option<f64> {
        self.concepts
            .iter()
            .find(|m| m.concept_id == concept_id)
            .map(|m| m.confidence.value())
    }

    pub fn contains(&self, concept_id: &str) -> bool {
        self.concepts.iter().any(|m| m.concept_id == concept_id)
    }

    pub fn concept_ids(&self) -> impl Iterator<Item = &str> {
        self.concepts.iter().map(|m| m.concept_id.as_str())
    }
}
