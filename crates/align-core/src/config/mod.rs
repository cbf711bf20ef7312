//! Configuration for the alignment engine.
//! TOML-based, layered resolution: CLI > env > file > defaults.

pub mod align_config;
pub mod catalog_config;
pub mod defaults;
pub mod embedding_config;
pub mod explanation_config;
pub mod observability_config;
pub mod scoring_config;
pub mod similarity_config;

pub use align_config::{AlignConfig, CliOverrides};
pub use catalog_config::CatalogConfig;
pub use embedding_config::EmbeddingConfig;
pub use explanation_config::ExplanationConfig;
pub use observability_config::ObservabilityConfig;
pub use scoring_config::ScoringConfig;
pub use similarity_config::SimilarityConfig;
