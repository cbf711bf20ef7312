//! Subsystem checks behind the status call.

use align_core::models::{DegradationEvent, HealthStatus, SubsystemHealth};

/// Snapshot of what the engine loaded at construction.
#[derive(Debug, Clone)]
pub struct HealthSnapshot<'a> {
    pub concept_count: usize,
    pub level_pattern_count: usize,
    pub semantic_backend: &'a str,
    pub degradations: &'a [DegradationEvent],
}

pub fn check_all(snapshot: &HealthSnapshot<'_>) -> Vec<SubsystemHealth> {
    vec![
        check_catalog(snapshot),
        check_classifier(snapshot),
        check_similarity(snapshot),
    ]
}

fn check_catalog(snapshot: &HealthSnapshot<'_>) -> SubsystemHealth {
    let status = if snapshot.concept_count == 0 {
        HealthStatus::Unhealthy
    } else {
        HealthStatus::Healthy
    };
    SubsystemHealth {
        name: "catalog".to_string(),
        status,
        message: Some(format!("{} concepts loaded", snapshot.concept_count)),
    }
}

fn check_classifier(snapshot: &HealthSnapshot<'_>) -> SubsystemHealth {
    let status = if snapshot.level_pattern_count == 0 {
        HealthStatus::Unhealthy
    } else {
        HealthStatus::Healthy
    };
    SubsystemHealth {
        name: "classifier".to_string(),
        status,
        message: Some(format!("{} level patterns compiled", snapshot.level_pattern_count)),
    }
}

/// Degraded when the configured backend was replaced at startup.
fn check_similarity(snapshot: &HealthSnapshot<'_>) -> SubsystemHealth {
    let fallback = snapshot
        .degradations
        .iter()
        .rev()
        .find(|d| d.component == "similarity");
    match fallback {
        Some(d) => SubsystemHealth {
            name: "similarity".to_string(),
            status: HealthStatus::Degraded,
            message: Some(format!("{} (using {})", d.failure, d.fallback_used)),
        },
        None => SubsystemHealth {
            name: "similarity".to_string(),
            status: HealthStatus::Healthy,
            message: Some(format!("backend {}", snapshot.semantic_backend)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_core::models::StatusReport;

    #[test]
    fn fallback_marks_similarity_degraded() {
        let degradations = vec![DegradationEvent::now("similarity", "api unavailable", "concept_overlap")];
        let checks = check_all(&HealthSnapshot {
            concept_count: 18,
            level_pattern_count: 40,
            semantic_backend: "concept_overlap",
            degradations: &degradations,
        });
        assert_eq!(checks[2].status, HealthStatus::Degraded);
        assert_eq!(StatusReport::derive_overall(&checks), HealthStatus::Degraded);
    }

    #[test]
    fn loaded_engine_is_healthy() {
        let checks = check_all(&HealthSnapshot {
            concept_count: 18,
            level_pattern_count: 40,
            semantic_backend: "concept_overlap",
            degradations: &[],
        });
        assert_eq!(StatusReport::derive_overall(&checks), HealthStatus::Healthy);
    }
}
