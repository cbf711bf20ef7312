//! TOML catalog files.
//!
//! ```toml
//! [[concepts]]
//! id = "sustainability"
//! detection_patterns = ['\bsustainab(le|ility)\b']
//! synonyms = ["net zero"]
//! weight = 0.9
//! cognitive_level = "apply"
//! related_concepts = []
//!
//! # Optional; the built-in level rules are used when absent.
//! [[levels]]
//! level = "remember"
//! patterns = ['\brecall\b']
//! indicators = ["basic"]
//! ```

use std::path::Path;

use align_core::errors::CatalogError;
use align_core::models::ConceptDefinition;
use serde::Deserialize;
use tracing::info;

use crate::{ConceptCatalog, LevelCatalog, LevelRule};

#[derive(Debug, Deserialize)]
struct CatalogFile {
    concepts: Vec<ConceptDefinition>,
    #[serde(default)]
    levels: Option<Vec<LevelRule>>,
}

fn parse_file(toml_str: &str, path: &str) -> Result<CatalogFile, CatalogError> {
    toml::from_str(toml_str).map_err(|e| CatalogError::Parse {
        path: path.to_string(),
        message: e.to_string(),
    })
}

fn read_file(path: &Path) -> Result<CatalogFile, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|e| CatalogError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    parse_file(&content, &path.display().to_string())
}

/// Concept definitions from a TOML document.
pub fn parse_concepts(toml_str: &str, path: &str) -> Result<Vec<ConceptDefinition>, CatalogError> {
    Ok(parse_file(toml_str, path)?.concepts)
}

/// Concept definitions from a TOML file.
pub fn read_concepts(path: &Path) -> Result<Vec<ConceptDefinition>, CatalogError> {
    Ok(read_file(path)?.concepts)
}

/// Both catalogs from one TOML file. Levels fall back to the built-in rules.
pub fn load_catalogs(path: &Path) -> Result<(ConceptCatalog, LevelCatalog), CatalogError> {
    let file = read_file(path)?;
    let concepts = ConceptCatalog::compile(file.concepts)?;
    let levels = match file.levels {
        Some(rules) => LevelCatalog::compile(rules)?,
        None => LevelCatalog::builtin()?,
    };
    info!(
        path = %path.display(),
        concepts = concepts.len(),
        "loaded concept catalog from file"
    );
    Ok((concepts, levels))
}

/// The built-in catalogs.
pub fn builtin_catalogs() -> Result<(ConceptCatalog, LevelCatalog), CatalogError> {
    Ok((ConceptCatalog::builtin()?, LevelCatalog::builtin()?))
}
