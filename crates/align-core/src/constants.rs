/// Engine version reported by capability and status calls.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard upper bound on suggestions in a single result.
pub const MAX_SUGGESTIONS: usize = 5;

/// Lowest and highest values of the alignment score scale.
pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 5.0;

/// Confidence reported by the classifier when no level evidence was found.
pub const DEFAULT_LEVEL_CONFIDENCE: f64 = 0.3;

/// Confidence contributed by a single detection-pattern match.
pub const PATTERN_MATCH_CONFIDENCE: f64 = 0.3;

/// Confidence floor implied by a synonym hit.
pub const SYNONYM_CONFIDENCE: f64 = 0.7;

/// Boost applied when a related concept co-occurs in the same text.
pub const CONTEXT_BOOST: f64 = 0.2;

/// Weight of a detection-pattern hit in the level score (indicators count 1).
pub const LEVEL_PATTERN_WEIGHT: u32 = 2;

/// Name reported as `analysis_method` on results produced by the failure path.
pub const FAILED_METHOD: &str = "failed";
