pub mod embedding;
pub mod similarity;

pub use embedding::IEmbeddingProvider;
pub use similarity::{ISimilarityBackend, SemanticInput};
