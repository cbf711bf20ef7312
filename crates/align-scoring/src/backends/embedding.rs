//! Embedding cosine similarity backend.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use align_core::errors::AlignResult;
use align_core::traits::{IEmbeddingProvider, ISimilarityBackend, SemanticInput};
use align_core::tracing_setup::events;

use super::ConceptOverlapBackend;
use crate::embeddings::{cosine_similarity, EmbeddingCache};

/// Semantic similarity as the cosine of the two texts' embeddings.
///
/// If the provider fails during a call, that call falls back to concept
/// overlap; the analysis itself never fails because of the provider.
pub struct EmbeddingBackend {
    provider: Box<dyn IEmbeddingProvider>,
    cache: EmbeddingCache,
    fallback: ConceptOverlapBackend,
    name: String,
    fallbacks: AtomicU64,
}

impl EmbeddingBackend {
    pub fn new(
        provider: Box<dyn IEmbeddingProvider>,
        cache_size: u64,
        fallback: ConceptOverlapBackend,
    ) -> Self {
        let name = format!("embedding:{}", provider.name());
        Self {
            provider,
            cache: EmbeddingCache::new(cache_size),
            fallback,
            name,
            fallbacks: AtomicU64::new(0),
        }
    }

    /// Calls that fell back to concept overlap so far.
    pub fn fallback_count(&self) -> u64 {
        self.fallbacks.load(Ordering::Relaxed)
    }

    fn embed_cached(&self, text: &str) -> AlignResult<Arc<Vec<f32>>> {
        let key = EmbeddingCache::key(self.provider.name(), text);
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit);
        }
        let vector = self.provider.embed(text)?;
        Ok(self.cache.insert(key, vector))
    }

    fn cosine(&self, input: SemanticInput<'_>) -> AlignResult<f64> {
        let a = self.embed_cached(&input.source.normalized)?;
        let b = self.embed_cached(&input.target.normalized)?;
        Ok(cosine_similarity(&a, &b))
    }
}

impl ISimilarityBackend for EmbeddingBackend {
    fn semantic_similarity(&self, input: SemanticInput<'_>) -> AlignResult<f64> {
        if !self.provider.is_available() {
            self.fallbacks.fetch_add(1, Ordering::Relaxed);
            return self.fallback.semantic_similarity(input);
        }
        match self.cosine(input) {
            Ok(value) => Ok(value),
            Err(e) => {
                self.fallbacks.fetch_add(1, Ordering::Relaxed);
                events::backend_degraded(&self.name, &e.to_string(), self.fallback.name());
                self.fallback.semantic_similarity(input)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
