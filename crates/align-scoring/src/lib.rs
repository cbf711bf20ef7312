//! # align-scoring
//!
//! Turns two text profiles into the three sub-scores (semantic similarity,
//! concept alignment, cognitive coherence) and blends them into the final
//! 1–5 score.
//!
//! The semantic sub-score comes from an [`ISimilarityBackend`] chosen once at
//! startup by [`backends::create_backend`]: weighted concept overlap by
//! default, or embedding cosine similarity when configured and available.
//!
//! [`ISimilarityBackend`]: align_core::traits::ISimilarityBackend

pub mod backends;
pub mod coherence;
pub mod combiner;
pub mod concept_alignment;
pub mod embeddings;
pub mod engine;

pub use backends::{create_backend, BackendSelection, ConceptOverlapBackend, EmbeddingBackend};
pub use combiner::{CombinedScore, ScoreCombiner};
pub use concept_alignment::{align_concepts, ConceptAlignment};
pub use engine::{SimilarityEngine, SimilarityReport};
