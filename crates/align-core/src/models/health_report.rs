use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::DegradationEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubsystemHealth {
    pub name: String,
    pub status: HealthStatus,
    pub message: Option<String>,
}

/// Engine initialization status. Built without running any analysis.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StatusReport {
    pub overall_status: HealthStatus,
    pub initialized: bool,
    pub concept_count: usize,
    pub level_pattern_count: usize,
    pub semantic_backend: Option<String>,
    pub version: String,
    pub degradations: Vec<DegradationEvent>,
    pub subsystems: Vec<SubsystemHealth>,
}

impl StatusReport {
    /// Status for an engine whose construction failed.
    pub fn from_init_error(error: &dyn std::fmt::Display) -> Self {
        Self {
            overall_status: HealthStatus::Unhealthy,
            initialized: false,
            concept_count: 0,
            level_pattern_count: 0,
            semantic_backend: None,
            version: crate::constants::VERSION.to_string(),
            degradations: Vec::new(),
            subsystems: vec![SubsystemHealth {
                name: "engine".to_string(),
                status: HealthStatus::Unhealthy,
                message: Some(error.to_string()),
            }],
        }
    }

    /// Unhealthy if any subsystem is unhealthy, degraded if any is degraded,
    /// otherwise healthy.
    pub fn derive_overall(subsystems: &[SubsystemHealth]) -> HealthStatus {
        let mut worst = HealthStatus::Healthy;
        for s in subsystems {
            match s.status {
                HealthStatus::Unhealthy => return HealthStatus::Unhealthy,
                HealthStatus::Degraded => worst = HealthStatus::Degraded,
                HealthStatus::Healthy => {}
            }
        }
        worst
    }
}
