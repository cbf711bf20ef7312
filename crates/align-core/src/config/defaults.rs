// Single source of truth for all default values.

// --- Scoring ---
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.4;
pub const DEFAULT_CONCEPT_WEIGHT: f64 = 0.4;
pub const DEFAULT_COHERENCE_WEIGHT: f64 = 0.2;
pub const DEFAULT_BASELINE_BLEND: f64 = 0.3;
pub const DEFAULT_LOW_SIGNAL_THRESHOLD: f64 = 0.2;
pub const DEFAULT_LOW_SIGNAL_PENALTY: f64 = 0.7;

// --- Similarity ---
pub const DEFAULT_SIMILARITY_BACKEND: &str = "concept_overlap";
pub const DEFAULT_RELATED_DISCOUNT: f64 = 0.6;

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "tfidf";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 256;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 1_024;
pub const DEFAULT_EMBEDDING_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_EMBEDDING_MAX_RETRIES: u32 = 2;

// --- Explanation ---
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;
pub const DEFAULT_HIGH_WEIGHT_THRESHOLD: f64 = 0.8;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;

// --- Files & environment ---
pub const DEFAULT_CONFIG_FILENAME: &str = "align.toml";
pub const LOG_ENV_VAR: &str = "ALIGN_LOG";

/// Tolerance when checking that the combiner weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;
