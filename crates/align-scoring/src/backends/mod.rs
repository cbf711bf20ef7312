//! Semantic backend selection.

pub mod concept_overlap;
pub mod embedding;

use std::sync::Arc;

use align_catalog::ConceptCatalog;
use align_core::config::AlignConfig;
use align_core::models::DegradationEvent;
use align_core::traits::ISimilarityBackend;
use align_core::tracing_setup::events;
use tracing::info;

pub use concept_overlap::ConceptOverlapBackend;
pub use embedding::EmbeddingBackend;

use crate::embeddings::create_provider;

/// The backend picked at startup plus any fallbacks taken to get there.
pub struct BackendSelection {
    pub backend: Arc<dyn ISimilarityBackend>,
    pub degradations: Vec<DegradationEvent>,
}

/// Pick the semantic backend once, for the lifetime of the engine.
///
/// An unavailable embedding provider is not an error: the built-in concept
/// overlap backend takes over and a degradation event records why.
pub fn create_backend(config: &AlignConfig, catalog: Arc<ConceptCatalog>) -> BackendSelection {
    let overlap = ConceptOverlapBackend::new(catalog, config.similarity.related_discount);

    if config.similarity.backend != "embedding" {
        info!(backend = concept_overlap::NAME, "semantic backend selected");
        return BackendSelection {
            backend: Arc::new(overlap),
            degradations: Vec::new(),
        };
    }

    match create_provider(&config.embedding) {
        Ok(provider) if provider.is_available() => {
            let backend = EmbeddingBackend::new(provider, config.embedding.cache_size, overlap);
            info!(backend = %backend.name(), "semantic backend selected");
            BackendSelection {
                backend: Arc::new(backend),
                degradations: Vec::new(),
            }
        }
        Ok(provider) => degrade(overlap, format!("{} unavailable", provider.name())),
        Err(e) => degrade(overlap, e.to_string()),
    }
}

fn degrade(overlap: ConceptOverlapBackend, failure: String) -> BackendSelection {
    events::backend_degraded("similarity", &failure, concept_overlap::NAME);
    BackendSelection {
        backend: Arc::new(overlap),
        degradations: vec![DegradationEvent::now(
            "similarity",
            failure,
            concept_overlap::NAME,
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Arc<ConceptCatalog> {
        Arc::new(ConceptCatalog::builtin().unwrap())
    }

    #[test]
    fn default_config_selects_concept_overlap() {
        let selection = create_backend(&AlignConfig::default(), catalog());
        assert_eq!(selection.backend.name(), "concept_overlap");
        assert!(selection.degradations.is_empty());
    }

    #[test]
    fn tfidf_embedding_backend_is_selected() {
        let mut config = AlignConfig::default();
        config.similarity.backend = "embedding".to_string();
        let selection = create_backend(&config, catalog());
        assert_eq!(selection.backend.name(), "embedding:hashed-tfidf");
        assert!(selection.degradations.is_empty());
    }

    #[test]
    fn unconfigured_api_provider_degrades_to_overlap() {
        let mut config = AlignConfig::default();
        config.similarity.backend = "embedding".to_string();
        config.embedding.provider = "api".to_string();
        let selection = create_backend(&config, catalog());
        assert_eq!(selection.backend.name(), "concept_overlap");
        assert_eq!(selection.degradations.len(), 1);
        assert_eq!(selection.degradations[0].component, "similarity");
        assert_eq!(selection.degradations[0].fallback_used, "concept_overlap");
    }
}
