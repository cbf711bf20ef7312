//! Top-level engine configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    defaults, CatalogConfig, EmbeddingConfig, ExplanationConfig, ObservabilityConfig,
    ScoringConfig, SimilarityConfig,
};
use crate::constants::MAX_SUGGESTIONS;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`ALIGN_*`)
/// 3. Config file (`align.toml` or an explicit path)
/// 4. Compiled defaults
///
/// Scoring code never reads the environment; everything arrives through this struct.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AlignConfig {
    pub scoring: ScoringConfig,
    pub similarity: SimilarityConfig,
    pub embedding: EmbeddingConfig,
    pub explanation: ExplanationConfig,
    pub catalog: CatalogConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub similarity_backend: Option<String>,
    pub catalog_path: Option<String>,
    pub log_level: Option<String>,
    pub json_logs: Option<bool>,
}

impl AlignConfig {
    /// Load configuration with layered resolution.
    ///
    /// With `path = None`, `align.toml` in the working directory is used when present.
    /// An explicit path that does not exist is an error.
    pub fn load(path: Option<&Path>, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let local = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if local.exists() {
                    Self::from_file(local)?
                } else {
                    Self::default()
                }
            }
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let s = &self.scoring;
        for (field, value) in [
            ("scoring.semantic_weight", s.semantic_weight),
            ("scoring.concept_weight", s.concept_weight),
            ("scoring.coherence_weight", s.coherence_weight),
            ("scoring.baseline_blend", s.baseline_blend),
            ("scoring.low_signal_threshold", s.low_signal_threshold),
            ("scoring.low_signal_penalty", s.low_signal_penalty),
            ("explanation.high_weight_threshold", self.explanation.high_weight_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if (s.weight_sum() - 1.0).abs() > defaults::WEIGHT_SUM_TOLERANCE {
            return Err(invalid(
                "scoring",
                &format!("sub-score weights must sum to 1.0, got {:.4}", s.weight_sum()),
            ));
        }

        let discount = self.similarity.related_discount;
        if !(discount > 0.0 && discount <= 1.0) {
            return Err(invalid("similarity.related_discount", "must be in (0.0, 1.0]"));
        }
        if !SimilarityConfig::BACKENDS.contains(&self.similarity.backend.as_str()) {
            return Err(invalid(
                "similarity.backend",
                &format!("unknown backend '{}'", self.similarity.backend),
            ));
        }

        if !EmbeddingConfig::PROVIDERS.contains(&self.embedding.provider.as_str()) {
            return Err(invalid(
                "embedding.provider",
                &format!("unknown provider '{}'", self.embedding.provider),
            ));
        }
        if self.embedding.dimensions == 0 {
            return Err(invalid("embedding.dimensions", "must be greater than 0"));
        }

        let max = self.explanation.max_suggestions;
        if max == 0 || max > MAX_SUGGESTIONS {
            return Err(invalid(
                "explanation.max_suggestions",
                &format!("must be between 1 and {MAX_SUGGESTIONS}"),
            ));
        }
        Ok(())
    }

    /// Apply `ALIGN_*` environment variables.
    fn apply_env_overrides(config: &mut AlignConfig) {
        config.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup; `apply_env_overrides` passes the process environment.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("ALIGN_SIMILARITY_BACKEND") {
            self.similarity.backend = val;
        }
        if let Some(val) = lookup("ALIGN_EMBEDDING_PROVIDER") {
            self.embedding.provider = val;
        }
        if let Some(val) = lookup("ALIGN_EMBEDDING_ENDPOINT") {
            self.embedding.api_endpoint = Some(val);
        }
        if let Some(val) = lookup("ALIGN_EMBEDDING_API_KEY") {
            self.embedding.api_key = Some(val);
        }
        if let Some(val) = lookup("ALIGN_EMBEDDING_MODEL") {
            self.embedding.model = Some(val);
        }
        if let Some(val) = lookup("ALIGN_CATALOG_PATH") {
            self.catalog.path = Some(val);
        }
        if let Some(val) = lookup("ALIGN_LOG_LEVEL") {
            self.observability.log_level = val;
        }
        if let Some(val) = lookup("ALIGN_JSON_LOGS") {
            if let Ok(v) = val.parse::<bool>() {
                self.observability.json_logs = v;
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    pub fn apply_cli_overrides(config: &mut AlignConfig, cli: &CliOverrides) {
        if let Some(ref backend) = cli.similarity_backend {
            config.similarity.backend = backend.clone();
        }
        if let Some(ref path) = cli.catalog_path {
            config.catalog.path = Some(path.clone());
        }
        if let Some(ref level) = cli.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(json) = cli.json_logs {
            config.observability.json_logs = json;
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
