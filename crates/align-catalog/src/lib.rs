//! # align-catalog
//!
//! The read-only knowledge the engine scores against: domain concepts with
//! their detection patterns, and the per-level patterns and indicator words
//! used by the cognitive-level classifier. Everything is validated and
//! compiled once; the compiled catalogs are immutable and shared across
//! threads behind `Arc`.

pub mod builtin;
pub mod concepts;
pub mod levels;
pub mod loader;

pub use concepts::{CompiledConcept, ConceptCatalog};
pub use levels::{LevelCatalog, LevelRule};
