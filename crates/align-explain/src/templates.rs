//! Sentence templates. Concept ids render with underscores as spaces.

use align_core::models::CognitiveLevel;

use crate::bands::{CoherenceBand, ConceptBand, SemanticBand};

/// Concepts listed by name in a reasoning clause.
const LISTED_CONCEPTS: usize = 3;

pub fn display_name(concept_id: &str) -> String {
    concept_id.replace('_', " ")
}

fn list(ids: &[String]) -> String {
    ids.iter()
        .take(LISTED_CONCEPTS)
        .map(|id| display_name(id))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn semantic_clause(band: SemanticBand, score: f64) -> String {
    match band {
        SemanticBand::Strong => {
            format!("Strong semantic connection ({score:.2}) with substantial conceptual overlap")
        }
        SemanticBand::Moderate => {
            format!("Moderate semantic alignment ({score:.2}) showing some conceptual relationship")
        }
        SemanticBand::Limited => {
            format!("Limited semantic similarity ({score:.2}) indicating conceptual gaps")
        }
    }
}

pub fn concept_clause(band: ConceptBand, aligned: &[String]) -> String {
    match band {
        ConceptBand::Excellent => format!(
            "Excellent conceptual match with {} shared concepts: {}",
            aligned.len(),
            list(aligned)
        ),
        ConceptBand::Good => format!("Good conceptual foundation with aligned concepts: {}", list(aligned)),
        ConceptBand::Weak => "Weak conceptual alignment with few shared concepts".to_string(),
    }
}

pub fn coherence_clause(band: CoherenceBand, source: CognitiveLevel, target: CognitiveLevel) -> String {
    match band {
        CoherenceBand::Strong if source == target => {
            format!("Matching cognitive levels: both target {source}")
        }
        CoherenceBand::Strong => {
            format!("Strong cognitive alignment: source {source}, target {target}")
        }
        CoherenceBand::Compatible => {
            format!("Compatible cognitive levels: source {source}, target {target}")
        }
        CoherenceBand::Mismatch => {
            format!("Cognitive mismatch: source expects {source} but target delivers {target}")
        }
    }
}

pub fn raise_rigor(source: CognitiveLevel, target: CognitiveLevel) -> String {
    format!(
        "Raise target rigor: the source expects {source}-level thinking but the target stops at {target}"
    )
}

pub fn add_scaffolding(source: CognitiveLevel, target: CognitiveLevel) -> String {
    format!(
        "Add scaffolding: the target's {target} level exceeds the source's {source} expectation"
    )
}

pub fn add_concept(concept_id: &str) -> String {
    format!("Add explicit concept: {}", display_name(concept_id))
}

pub fn make_bridge_explicit(concept_id: &str, via: &str) -> String {
    format!(
        "Make {} explicit: it is currently only reached through {}",
        display_name(concept_id),
        display_name(via)
    )
}

pub const MAJOR_REVISION: &str =
    "Major revision needed: restructure the target to match the source's expectations";
pub const ADD_SUSTAINABILITY: &str =
    "Add a sustainability focus: include environmental assessment or lifecycle thinking";
pub const STRENGTHEN_ANALYSIS: &str =
    "Strengthen the analytical component: add critical thinking or evaluation methods";
pub const MODERATE_IMPROVEMENT: &str =
    "Moderate improvement needed: strengthen the conceptual connections";
pub const INCREASE_OVERLAP: &str = "Increase concept overlap: add more shared concepts";
pub const MAINTAIN: &str =
    "Strong alignment: keep it and consider adding specific assessment criteria";
pub const ADD_ASSESSMENT: &str =
    "Add an assessment component: include evaluation criteria or measurement methods";
