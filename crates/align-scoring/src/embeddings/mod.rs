//! Embedding providers for the optional embedding backend.

pub mod api_provider;
pub mod cache;
pub mod hashed_tfidf;

use align_core::config::EmbeddingConfig;
use align_core::errors::EmbeddingError;
use align_core::traits::IEmbeddingProvider;
use tracing::info;

pub use api_provider::ApiProvider;
pub use cache::EmbeddingCache;
pub use hashed_tfidf::HashedTfIdfProvider;

/// Build the configured provider.
///
/// Fails when the provider cannot be used at all (e.g. the API provider has no
/// endpoint or key); the caller decides what to fall back to.
pub fn create_provider(
    config: &EmbeddingConfig,
) -> Result<Box<dyn IEmbeddingProvider>, EmbeddingError> {
    match config.provider.as_str() {
        "tfidf" => {
            info!(dimensions = config.dimensions, "using hashed TF-IDF embedding provider");
            Ok(Box::new(HashedTfIdfProvider::new(config.dimensions)))
        }
        "api" => {
            let provider = ApiProvider::from_config(config)?;
            info!(endpoint = %provider.endpoint(), "using API embedding provider");
            Ok(Box::new(provider))
        }
        other => Err(EmbeddingError::ProviderUnavailable {
            provider: other.to_string(),
        }),
    }
}

/// Cosine similarity clamped to [0, 1]; zero vectors compare as 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }
    let (mut dot, mut na, mut nb) = (0.0f64, 0.0f64, 0.0f64);
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (f64::from(*x), f64::from(*y));
        dot += x * y;
        na += x * x;
        nb += y * y;
    }
    if na <= f64::EPSILON || nb <= f64::EPSILON {
        return 0.0;
    }
    (dot / (na.sqrt() * nb.sqrt())).clamp(0.0, 1.0)
}
