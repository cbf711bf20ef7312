use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Six ordered cognitive levels, lowest first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CognitiveLevel {
    Remember,
    Understand,
    Apply,
    Analyze,
    Evaluate,
    Create,
}

impl CognitiveLevel {
    /// All levels in ascending order.
    pub const ALL: [CognitiveLevel; 6] = [
        Self::Remember,
        Self::Understand,
        Self::Apply,
        Self::Analyze,
        Self::Evaluate,
        Self::Create,
    ];

    /// Level reported when a text carries no level evidence.
    pub const DEFAULT: CognitiveLevel = Self::Understand;

    /// Integer rank, 1 (Remember) through 6 (Create).
    pub fn rank(self) -> u8 {
        match self {
            Self::Remember => 1,
            Self::Understand => 2,
            Self::Apply => 3,
            Self::Analyze => 4,
            Self::Evaluate => 5,
            Self::Create => 6,
        }
    }

    pub fn from_rank(rank: u8) -> Option<Self> {
        Self::ALL.get(usize::from(rank).checked_sub(1)?).copied()
    }

    /// Absolute rank distance between two levels.
    pub fn distance(self, other: Self) -> u8 {
        self.rank().abs_diff(other.rank())
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Remember => "remember",
            Self::Understand => "understand",
            Self::Apply => "apply",
            Self::Analyze => "analyze",
            Self::Evaluate => "evaluate",
            Self::Create => "create",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Remember => "Remember",
            Self::Understand => "Understand",
            Self::Apply => "Apply",
            Self::Analyze => "Analyze",
            Self::Evaluate => "Evaluate",
            Self::Create => "Create",
        }
    }
}

impl Default for CognitiveLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for CognitiveLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CognitiveLevel {
    type Err = String;

    /// Accepts the level names plus the classic taxonomy nouns
    /// (knowledge, comprehension, application, analysis, evaluation, synthesis).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remember" | "knowledge" => Ok(Self::Remember),
            "understand" | "comprehension" => Ok(Self::Understand),
            "apply" | "application" => Ok(Self::Apply),
            "analyze" | "analyse" | "analysis" => Ok(Self::Analyze),
            "evaluate" | "evaluation" => Ok(Self::Evaluate),
            "create" | "synthesis" => Ok(Self::Create),
            other => Err(format!("unknown cognitive level: {other}")),
        }
    }
}
