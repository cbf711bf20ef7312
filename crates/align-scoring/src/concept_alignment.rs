//! Direct, bridged, and missing concepts between two profiles.

use align_catalog::ConceptCatalog;
use align_core::models::{ConceptBridge, TextProfile};

/// Per-concept outcome for every concept extracted from the source.
///
/// `direct`, bridged ids, and `missing` partition the source concepts.
#[derive(Debug, Clone, PartialEq)]
pub struct ConceptAlignment {
    pub direct: Vec<String>,
    pub bridges: Vec<ConceptBridge>,
    pub missing: Vec<String>,
    /// Aligned share of source concepts, 0 when the source has none.
    pub score: f64,
}

impl ConceptAlignment {
    /// Direct matches first, then bridged ones.
    pub fn aligned(&self) -> Vec<String> {
        self.direct
            .iter()
            .cloned()
            .chain(self.bridges.iter().map(|b| b.concept_id.clone()))
            .collect()
    }

    pub fn aligned_count(&self) -> usize {
        self.direct.len() + self.bridges.len()
    }

    pub fn is_bridged(&self, concept_id: &str) -> bool {
        self.bridges.iter().any(|b| b.concept_id == concept_id)
    }
}

/// Classify each source concept as direct, bridged, or missing.
///
/// A bridge goes through the first related concept, in declared order, that
/// the target contains.
pub fn align_concepts(
    catalog: &ConceptCatalog,
    source: &TextProfile,
    target: &TextProfile,
) -> ConceptAlignment {
    let mut direct = Vec::new();
    let mut bridges = Vec::new();
    let mut missing = Vec::new();

    for id in source.concept_ids() {
        if target.contains(id) {
            direct.push(id.to_string());
            continue;
        }
        let via = catalog
            .get(id)
            .and_then(|c| c.related().iter().find(|r| target.contains(r)));
        match via {
            Some(via) => bridges.push(ConceptBridge {
                concept_id: id.to_string(),
                via: via.clone(),
            }),
            None => missing.push(id.to_string()),
        }
    }

    let total = source.concepts.len();
    let score = if total == 0 {
        0.0
    } else {
        (direct.len() + bridges.len()) as f64 / total as f64
    };

    ConceptAlignment {
        direct,
        bridges,
        missing,
        score,
    }
}
