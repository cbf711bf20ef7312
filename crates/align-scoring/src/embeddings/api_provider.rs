//! Remote embedding API provider.
//!
//! Speaks the common `{ model, input: [...] } -> { data: [{ embedding }] }`
//! JSON shape over HTTPS with bearer auth. Retries with exponential backoff;
//! after the retries are exhausted the provider marks itself unavailable and
//! the embedding backend stops calling it.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use align_core::config::EmbeddingConfig;
use align_core::errors::{AlignResult, EmbeddingError};
use align_core::traits::IEmbeddingProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

const DEFAULT_MODEL: &str = "text-embedding-3-small";

pub struct ApiProvider {
    client: reqwest::blocking::Client,
    endpoint: String,
    api_key: String,
    model: String,
    dimensions: usize,
    max_retries: u32,
    available: AtomicBool,
}

#[derive(Serialize)]
struct EmbedRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Deserialize)]
struct EmbedResponse {
    data: Vec<EmbedData>,
}

#[derive(Deserialize)]
struct EmbedData {
    embedding: Vec<f32>,
}

impl ApiProvider {
    /// Build from config. Endpoint and key are required.
    pub fn from_config(config: &EmbeddingConfig) -> Result<Self, EmbeddingError> {
        let unavailable = |why: &str| EmbeddingError::ProviderUnavailable {
            provider: format!("api ({why})"),
        };
        let endpoint = config
            .api_endpoint
            .clone()
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| unavailable("no endpoint configured"))?;
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| unavailable("no API key configured"))?;

        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| unavailable(&e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            dimensions: config.dimensions,
            max_retries: config.max_retries,
            available: AtomicBool::new(true),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send a request with retry and exponential backoff.
    fn request_embeddings(&self, texts: &[String]) -> AlignResult<Vec<Vec<f32>>> {
        if !self.available.load(Ordering::Relaxed) {
            return Err(EmbeddingError::ProviderUnavailable {
                provider: self.name().to_string(),
            }
            .into());
        }

        let mut last_err = None;
        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                std::thread::sleep(Duration::from_millis(100 * 2u64.pow(attempt - 1)));
                debug!(attempt, "retrying embedding request");
            }
            match self.send_request(texts) {
                Ok(embeddings) => return Ok(embeddings),
                Err(e) => {
                    warn!(attempt, error = %e, "embedding request failed");
                    last_err = Some(e);
                }
            }
        }

        self.available.store(false, Ordering::Relaxed);
        Err(last_err
            .unwrap_or_else(|| EmbeddingError::RequestFailed {
                reason: "all retries exhausted".to_string(),
            })
            .into())
    }

    fn send_request(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&EmbedRequest {
                model: &self.model,
                input: texts,
            })
            .send()
            .map_err(|e| EmbeddingError::RequestFailed {
                reason: format!("HTTP error: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(EmbeddingError::RequestFailed {
                reason: format!("API returned {status}: {body}"),
            });
        }

        let parsed: EmbedResponse =
            response
                .json()
                .map_err(|e| EmbeddingError::InvalidResponse {
                    reason: e.to_string(),
                })?;
        if parsed.data.len() != texts.len() {
            return Err(EmbeddingError::InvalidResponse {
                reason: format!(
                    "expected {} embeddings, got {}",
                    texts.len(),
                    parsed.data.len()
                ),
            });
        }

        Ok(parsed
            .data
            .into_iter()
            .map(|d| {
                let mut v = d.embedding;
                v.resize(self.dimensions, 0.0);
                v
            })
            .collect())
    }

    /// Make the provider eligible again after it was marked unavailable.
    pub fn reset_availability(&self) {
        self.available.store(true, Ordering::Relaxed);
    }
}

impl IEmbeddingProvider for ApiProvider {
    fn embed(&self, text: &str) -> AlignResult<Vec<f32>> {
        let mut batch = self.request_embeddings(&[text.to_string()])?;
        batch.pop().ok_or_else(|| {
            EmbeddingError::InvalidResponse {
                reason: "empty response".to_string(),
            }
            .into()
        })
    }

    fn embed_batch(&self, texts: &[String]) -> AlignResult<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }
        self.request_embeddings(texts)
    }

    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn name(&self) -> &str {
        "api"
    }

    fn is_available(&self) -> bool {
        self.available.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(endpoint: &str) -> EmbeddingConfig {
        EmbeddingConfig {
            provider: "api".to_string(),
            api_endpoint: Some(endpoint.to_string()),
            api_key: Some("test-key".to_string()),
            timeout_secs: 1,
            max_retries: 0,
            ..Default::default()
        }
    }

    #[test]
    fn missing_key_is_unavailable() {
        let mut c = config("http://127.0.0.1:9/embed");
        c.api_key = None;
        assert!(ApiProvider::from_config(&c).is_err());
    }

    #[test]
    fn unreachable_endpoint_marks_provider_unavailable() {
        // Port 9 (discard) is closed on test hosts; the connect fails fast.
        let p = ApiProvider::from_config(&config("http://127.0.0.1:9/embed")).unwrap();
        assert!(p.is_available());
        assert!(p.embed("hello").is_err());
        assert!(!p.is_available());

        p.reset_availability();
        assert!(p.is_available());
    }
}
