//! Span definitions per operation: analyze, extract, classify, compare, matrix.

/// Create an analysis span.
#[macro_export]
macro_rules! analyze_span {
    ($source_len:expr, $target_len:expr) => {
        tracing::info_span!(
            "align.analyze",
            source_len = $source_len,
            target_len = $target_len
        )
    };
}

/// Create a concept extraction span.
#[macro_export]
macro_rules! extract_span {
    ($text_len:expr) => {
        tracing::debug_span!("align.extract", text_len = $text_len)
    };
}

/// Create a level classification span.
#[macro_export]
macro_rules! classify_span {
    ($text_len:expr) => {
        tracing::debug_span!("align.classify", text_len = $text_len)
    };
}

/// Create a similarity comparison span.
#[macro_export]
macro_rules! compare_span {
    ($backend:expr) => {
        tracing::debug_span!("align.compare", backend = %$backend)
    };
}

/// Create a matrix analysis span.
#[macro_export]
macro_rules! matrix_span {
    ($sources:expr, $targets:expr) => {
        tracing::info_span!("align.matrix", sources = $sources, targets = $targets)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ANALYZE: &str = "align.analyze";
    pub const EXTRACT: &str = "align.extract";
    pub const CLASSIFY: &str = "align.classify";
    pub const COMPARE: &str = "align.compare";
    pub const MATRIX: &str = "align.matrix";
}
