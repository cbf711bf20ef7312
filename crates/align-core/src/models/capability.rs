use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::CognitiveLevel;

/// Read-only projection of one catalog concept for UI display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CatalogEntryView {
    pub id: String,
    pub weight: f64,
    pub cognitive_level: CognitiveLevel,
    pub synonyms: Vec<String>,
    pub related_concepts: Vec<String>,
}

/// What the engine can recognise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CapabilityReport {
    pub concepts: Vec<CatalogEntryView>,
    pub levels: Vec<CognitiveLevel>,
    pub semantic_backend: String,
    pub version: String,
}

impl CapabilityReport {
    pub fn concept(&self, id: &str) -> Option<&CatalogEntryView> {
        self.concepts.iter().find(|c| c.id == id)
    }
}
