//! Concept catalog errors. All of them surface at construction time.

use super::error_code::{self, AlignErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate concept id: {id}")]
    DuplicateConcept { id: String },

    #[error("concept {id} has weight {weight}, expected a value in (0, 1]")]
    InvalidWeight { id: String, weight: f64 },

    #[error("concept {id} has an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        id: String,
        pattern: String,
        reason: String,
    },

    #[error("concept {id} lists unknown related concept {related}")]
    UnknownRelated { id: String, related: String },

    #[error("concept {id} lists itself as related")]
    SelfRelated { id: String },

    #[error("concept {id} has no detection patterns or synonyms")]
    NoEvidence { id: String },

    #[error("catalog parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("catalog is empty")]
    Empty,
}

impl AlignErrorCode for CatalogError {
    fn error_code(&self) -> &'static str {
        error_code::CATALOG_ERROR
    }
}
