//! Error handling for the alignment engine.
//! One error enum per subsystem, `thiserror` only, aggregated into [`AlignError`].

pub mod align_error;
pub mod catalog_error;
pub mod config_error;
pub mod embedding_error;
pub mod error_code;

pub use align_error::{AlignError, AlignResult};
pub use catalog_error::CatalogError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::AlignErrorCode;
