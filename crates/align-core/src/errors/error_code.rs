//! AlignErrorCode trait for front ends that serialize failures.

/// Every error enum implements this to provide a structured error code string
/// that HTTP or CLI front ends can hand to their callers.
pub trait AlignErrorCode {
    /// Returns the error code string (e.g., "INVALID_INPUT").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_INPUT: &str = "INVALID_INPUT";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CATALOG_ERROR: &str = "CATALOG_ERROR";
pub const EMBEDDING_ERROR: &str = "EMBEDDING_ERROR";
pub const ANALYSIS_FAILED: &str = "ANALYSIS_FAILED";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
