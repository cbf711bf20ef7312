use super::error_code::{self, AlignErrorCode};
use super::{CatalogError, ConfigError, EmbeddingError};

/// Top-level error for the alignment engine.
#[derive(Debug, thiserror::Error)]
pub enum AlignError {
    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("analysis failed: {reason}")]
    AnalysisFailed { reason: String },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AlignError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the caller supplied bad input, as opposed to an engine-side failure.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

impl AlignErrorCode for AlignError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidInput { .. } => error_code::INVALID_INPUT,
            Self::Config(e) => e.error_code(),
            Self::Catalog(e) => e.error_code(),
            Self::Embedding(e) => e.error_code(),
            Self::AnalysisFailed { .. } => error_code::ANALYSIS_FAILED,
            Self::Serialization(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}

/// Convenience alias used throughout the workspace.
pub type AlignResult<T> = Result<T, AlignError>;
