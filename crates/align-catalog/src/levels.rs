//! Cognitive-level patterns and indicator words.

use align_core::errors::CatalogError;
use align_core::models::CognitiveLevel;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::builtin;

/// Detection rules for one cognitive level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelRule {
    pub level: CognitiveLevel,
    /// Regexes; each occurrence counts twice toward the level score.
    pub patterns: Vec<String>,
    /// Plain words; each distinct word found counts once.
    #[serde(default)]
    pub indicators: Vec<String>,
}

impl LevelRule {
    pub fn new(level: CognitiveLevel, patterns: &[&str], indicators: &[&str]) -> Self {
        Self {
            level,
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            indicators: indicators.iter().map(|i| i.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CompiledLevel {
    pub level: CognitiveLevel,
    pub patterns: Vec<Regex>,
    /// Indicator words as whole-word regexes.
    pub indicators: Vec<Regex>,
}

/// Compiled level rules, one per level, in ascending level order.
#[derive(Debug, Clone)]
pub struct LevelCatalog {
    levels: Vec<CompiledLevel>,
}

impl LevelCatalog {
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::compile(builtin::level_rules())
    }

    /// Compile rules. Every level must appear exactly once.
    pub fn compile(mut rules: Vec<LevelRule>) -> Result<Self, CatalogError> {
        rules.sort_by_key(|r| r.level);
        let levels: Vec<CognitiveLevel> = rules.iter().map(|r| r.level).collect();
        if levels != CognitiveLevel::ALL {
            return Err(CatalogError::Parse {
                path: "<levels>".to_string(),
                message: format!(
                    "expected one rule per cognitive level, got {:?}",
                    levels
                ),
            });
        }

        let levels = rules
            .into_iter()
            .map(compile_rule)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { levels })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CompiledLevel> {
        self.levels.iter()
    }

    /// Total compiled patterns and indicators.
    pub fn pattern_count(&self) -> usize {
        self.levels
            .iter()
            .map(|l| l.patterns.len() + l.indicators.len())
            .sum()
    }
}

fn compile_rule(rule: LevelRule) -> Result<CompiledLevel, CatalogError> {
    let id = format!("level:{}", rule.level.name());
    let build = |source: String| {
        RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|e| CatalogError::InvalidPattern {
                id: id.clone(),
                pattern: source.clone(),
                reason: e.to_string(),
            })
    };

    let patterns = rule
        .patterns
        .iter()
        .map(|p| build(p.clone()))
        .collect::<Result<Vec<_>, _>>()?;
    let indicators = rule
        .indicators
        .iter()
        .map(|word| build(format!(r"\b{}\b", regex::escape(word.trim()))))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CompiledLevel {
        level: rule.level,
        patterns,
        indicators,
    })
}
