//! # align-explain
//!
//! Deterministic mapping from sub-scores and concept outcomes to a reasoning
//! paragraph and an ordered, capped list of suggestions. No randomness and no
//! external calls.

pub mod bands;
pub mod explainer;
pub mod reasoning;
pub mod suggestions;
pub mod templates;

pub use bands::{CoherenceBand, ConceptBand, ScoreBand, SemanticBand};
pub use explainer::{Explainer, Explanation, ExplanationInput};
