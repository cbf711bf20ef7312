//! Structured log events for key engine operations.

/// Log engine construction.
pub fn engine_initialized(concepts: usize, level_patterns: usize, backend: &str) {
    tracing::info!(
        event = "engine_initialized",
        concepts,
        level_patterns,
        backend = %backend,
        "alignment engine initialized"
    );
}

/// Log a completed analysis.
pub fn analysis_completed(score: f64, confidence: f64, semantic: f64, concept: f64, coherence: f64) {
    tracing::debug!(
        event = "analysis_completed",
        score,
        confidence,
        semantic,
        concept,
        coherence,
        "analysis completed"
    );
}

/// Log an internal failure converted into a fallback result.
pub fn analysis_failed(reason: &str) {
    tracing::warn!(
        event = "analysis_failed",
        reason = %reason,
        "analysis failed, returning fallback result"
    );
}

/// Log a backend falling back to a lower-fidelity mode.
pub fn backend_degraded(component: &str, failure: &str, fallback: &str) {
    tracing::warn!(
        event = "backend_degraded",
        component = %component,
        failure = %failure,
        fallback = %fallback,
        "falling back"
    );
}
