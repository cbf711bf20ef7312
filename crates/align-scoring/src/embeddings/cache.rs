//! In-memory embedding cache using moka.
//!
//! Keys are blake3 hashes of provider name plus normalized text, so a cache
//! never serves vectors from a different provider.

use std::sync::Arc;
use std::time::Duration;

use moka::sync::Cache;

pub struct EmbeddingCache {
    cache: Cache<String, Arc<Vec<f32>>>,
}

impl EmbeddingCache {
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_idle(Duration::from_secs(3600))
            .build();
        Self { cache }
    }

    /// Cache key for a text embedded by `provider`.
    pub fn key(provider: &str, text: &str) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(provider.as_bytes());
        hasher.update(&[0]);
        hasher.update(text.as_bytes());
        hasher.finalize().to_hex().to_string()
    }

    pub fn get(&self, key: &str) -> Option<Arc<Vec<f32>>> {
        self.cache.get(key)
    }

    pub fn insert(&self, key: String, embedding: Vec<f32>) -> Arc<Vec<f32>> {
        let value = Arc::new(embedding);
        self.cache.insert(key, Arc::clone(&value));
        value
    }

    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_get() {
        let cache = EmbeddingCache::new(16);
        let key = EmbeddingCache::key("hashed-tfidf", "apply tools");
        cache.insert(key.clone(), vec![1.0, 0.0]);
        assert_eq!(cache.get(&key).as_deref(), Some(&vec![1.0, 0.0]));
    }

    #[test]
    fn keys_differ_by_provider() {
        assert_ne!(
            EmbeddingCache::key("api", "text"),
            EmbeddingCache::key("hashed-tfidf", "text")
        );
        assert_eq!(EmbeddingCache::key("api", "text"), EmbeddingCache::key("api", "text"));
    }

    #[test]
    fn miss_returns_none() {
        let cache = EmbeddingCache::new(16);
        assert!(cache.get("missing").is_none());
    }
}
