use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{CognitiveLevel, Confidence};
use crate::constants::DEFAULT_LEVEL_CONFIDENCE;

/// Classifier output for one text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CognitiveLevelClassification {
    pub level: CognitiveLevel,
    pub confidence: Confidence,
    /// False when no level pattern or indicator matched and the default level was returned.
    pub has_evidence: bool,
}

impl CognitiveLevelClassification {
    /// The documented fallback for texts without any level evidence.
    pub fn fallback() -> Self {
        Self {
            level: CognitiveLevel::DEFAULT,
            confidence: Confidence::new(DEFAULT_LEVEL_CONFIDENCE),
            has_evidence: false,
        }
    }
}
