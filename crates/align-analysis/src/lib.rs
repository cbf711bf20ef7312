//! # align-analysis
//!
//! Per-text analysis: normalization, concept extraction, and cognitive-level
//! classification. Everything here is a pure function of the input text and
//! the read-only catalogs.

pub mod classifier;
pub mod extractor;
pub mod normalize;
pub mod profiler;

pub use classifier::CognitiveLevelClassifier;
pub use extractor::ConceptExtractor;
pub use normalize::normalize;
pub use profiler::TextProfiler;
