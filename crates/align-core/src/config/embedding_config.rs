use serde::{Deserialize, Serialize};

use super::defaults;

/// Optional embedding backend configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Embedding provider: "tfidf" or "api".
    pub provider: String,
    /// Endpoint of the remote embedding API.
    pub api_endpoint: Option<String>,
    /// Bearer token for the remote embedding API.
    pub api_key: Option<String>,
    /// Model name sent to the remote embedding API.
    pub model: Option<String>,
    /// Embedding dimensions.
    pub dimensions: usize,
    /// In-memory cache max entries.
    pub cache_size: u64,
    /// Remote request timeout in seconds.
    pub timeout_secs: u64,
    /// Remote retries after the first attempt.
    pub max_retries: u32,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: defaults::DEFAULT_EMBEDDING_PROVIDER.to_string(),
            api_endpoint: None,
            api_key: None,
            model: None,
            dimensions: defaults::DEFAULT_EMBEDDING_DIMENSIONS,
            cache_size: defaults::DEFAULT_EMBEDDING_CACHE_SIZE,
            timeout_secs: defaults::DEFAULT_EMBEDDING_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_EMBEDDING_MAX_RETRIES,
        }
    }
}

impl EmbeddingConfig {
    pub const PROVIDERS: [&'static str; 2] = ["tfidf", "api"];
}
