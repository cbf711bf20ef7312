//! # align-core
//!
//! Foundation crate for the outcome alignment engine.
//! Defines all shared types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::AlignConfig;
pub use errors::{AlignError, AlignResult};
pub use models::{
    AlignmentResult, CognitiveLevel, CognitiveLevelClassification, ConceptDefinition,
    ConceptMatch, Confidence, TextProfile,
};
