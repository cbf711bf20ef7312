//! Compiled concept catalog.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use align_core::errors::CatalogError;
use align_core::models::{CatalogEntryView, ConceptDefinition};
use regex::{Regex, RegexBuilder};

use crate::{builtin, loader};

/// A concept definition with its patterns compiled.
#[derive(Debug, Clone)]
pub struct CompiledConcept {
    definition: ConceptDefinition,
    patterns: Vec<Regex>,
    synonyms: Vec<String>,
}

impl CompiledConcept {
    pub fn id(&self) -> &str {
        &self.definition.id
    }

    pub fn weight(&self) -> f64 {
        self.definition.weight
    }

    pub fn definition(&self) -> &ConceptDefinition {
        &self.definition
    }

    pub fn patterns(&self) -> &[Regex] {
        &self.patterns
    }

    /// Synonyms, lower-cased with whitespace collapsed.
    pub fn synonyms(&self) -> &[String] {
        &self.synonyms
    }

    pub fn related(&self) -> &[String] {
        &self.definition.related_concepts
    }

    /// Whether any detection pattern matches `text`.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Immutable, validated concept catalog.
///
/// Built once at engine construction; analysis only ever reads it.
#[derive(Debug, Clone)]
pub struct ConceptCatalog {
    concepts: Vec<CompiledConcept>,
    index: HashMap<String, usize>,
}

impl ConceptCatalog {
    /// The built-in catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::compile(builtin::concept_definitions())
    }

    /// Parse and compile a TOML catalog document.
    pub fn from_toml(toml_str: &str) -> Result<Self, CatalogError> {
        Self::compile(loader::parse_concepts(toml_str, "<string>")?)
    }

    /// Load and compile a TOML catalog file.
    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::compile(loader::read_concepts(path)?)
    }

    /// Validate definitions and compile their patterns.
    ///
    /// Rejects duplicate ids, weights outside (0, 1], patterns that do not
    /// compile, concepts with no evidence source, and related ids that are
    /// unknown or point back at the concept itself.
    pub fn compile(definitions: Vec<ConceptDefinition>) -> Result<Self, CatalogError> {
        if definitions.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for def in &definitions {
            if !seen.insert(def.id.as_str()) {
                return Err(CatalogError::DuplicateConcept { id: def.id.clone() });
            }
        }
        for def in &definitions {
            for related in &def.related_concepts {
                if related == &def.id {
                    return Err(CatalogError::SelfRelated { id: def.id.clone() });
                }
                if !seen.contains(related.as_str()) {
                    return Err(CatalogError::UnknownRelated {
                        id: def.id.clone(),
                        related: related.clone(),
                    });
                }
            }
        }

        let mut concepts = Vec::with_capacity(definitions.len());
        let mut index = HashMap::with_capacity(definitions.len());
        for definition in definitions {
            let compiled = compile_concept(definition)?;
            index.insert(compiled.id().to_string(), concepts.len());
            concepts.push(compiled);
        }

        Ok(Self { concepts, index })
    }

    pub fn get(&self, id: &str) -> Option<&CompiledConcept> {
        self.index.get(id).map(|&i| &self.concepts[i])
    }

    /// Position of a concept in declaration order.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Weight of a concept, 0 for unknown ids.
    pub fn weight(&self, id: &str) -> f64 {
        self.get(id).map_or(0.0, CompiledConcept::weight)
    }

    /// Whether `other` is declared related to `id`.
    pub fn is_related(&self, id: &str, other: &str) -> bool {
        self.get(id)
            .is_some_and(|c| c.definition.is_related_to(other))
    }

    /// Concepts in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &CompiledConcept> {
        self.concepts.iter()
    }

    pub fn len(&self) -> usize {
        self.concepts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.concepts.is_empty()
    }

    /// Total compiled detection patterns.
    pub fn pattern_count(&self) -> usize {
        self.concepts.iter().map(|c| c.patterns.len()).sum()
    }

    /// Read-only projection for capability listings.
    pub fn entries(&self) -> Vec<CatalogEntryView> {
        self.concepts
            .iter()
            .map(|c| CatalogEntryView {
                id: c.definition.id.clone(),
                weight: c.definition.weight,
                cognitive_level: c.definition.cognitive_level,
                synonyms: c.definition.synonyms.clone(),
                related_concepts: c.definition.related_concepts.clone(),
            })
            .collect()
    }
}

fn compile_concept(definition: ConceptDefinition) -> Result<CompiledConcept, CatalogError> {
    let weight = definition.weight;
    if !(weight > 0.0 && weight <= 1.0) {
        return Err(CatalogError::InvalidWeight {
            id: definition.id,
            weight,
        });
    }

    let patterns = definition
        .detection_patterns
        .iter()
        .map(|p| {
            RegexBuilder::new(p)
                .case_insensitive(true)
                .build()
                .map_err(|e| CatalogError::InvalidPattern {
                    id: definition.id.clone(),
                    pattern: p.clone(),
                    reason: e.to_string(),
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let synonyms: Vec<String> = definition
        .synonyms
        .iter()
        .map(|s| s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if patterns.is_empty() && synonyms.is_empty() {
        return Err(CatalogError::NoEvidence { id: definition.id });
    }

    Ok(CompiledConcept {
        definition,
        patterns,
        synonyms,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use align_core::models::CognitiveLevel;

    fn def(id: &str, patterns: &[&str], related: &[&str]) -> ConceptDefinition {
        ConceptDefinition {
            id: id.to_string(),
            detection_patterns: patterns.iter().map(|p| p.to_string()).collect(),
            synonyms: Vec::new(),
            weight: 0.5,
            cognitive_level: CognitiveLevel::Apply,
            related_concepts: related.iter().map(|r| r.to_string()).collect(),
        }
    }

    #[test]
    fn builtin_catalog_compiles() {
        let catalog = ConceptCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), 18);
        assert!(catalog.get("sustainability").is_some());
        assert!(catalog.is_related("sustainability", "lifecycle_assessment"));
        assert_eq!(catalog.weight("nonexistent"), 0.0);
    }

    #[test]
    fn patterns_are_case_insensitive() {
        let catalog = ConceptCatalog::compile(vec![def("x", &[r"\bfoo\b"], &[])]).unwrap();
        assert!(catalog.get("x").unwrap().matches("FOO bar"));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let err = ConceptCatalog::compile(vec![def("a", &["a"], &[]), def("a", &["b"], &[])])
            .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateConcept { .. }));
    }

    #[test]
    fn rejects_unknown_and_self_related() {
        let err = ConceptCatalog::compile(vec![def("a", &["a"], &["zzz"])]).unwrap_err();
        assert!(matches!(err, CatalogError::UnknownRelated { .. }));

        let err = ConceptCatalog::compile(vec![def("a", &["a"], &["a"])]).unwrap_err();
        assert!(matches!(err, CatalogError::SelfRelated { .. }));
    }

    #[test]
    fn rejects_bad_weight_and_bad_pattern() {
        let mut d = def("a", &["a"], &[]);
        d.weight = 0.0;
        assert!(matches!(
            ConceptCatalog::compile(vec![d]).unwrap_err(),
            CatalogError::InvalidWeight { .. }
        ));

        let err = ConceptCatalog::compile(vec![def("a", &["(unclosed"], &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { .. }));
    }

    #[test]
    fn rejects_concept_without_evidence() {
        let err = ConceptCatalog::compile(vec![def("a", &[], &[])]).unwrap_err();
        assert!(matches!(err, CatalogError::NoEvidence { .. }));
        assert!(matches!(
            ConceptCatalog::compile(Vec::new()).unwrap_err(),
            CatalogError::Empty
        ));
    }

    #[test]
    fn synonyms_are_normalized() {
        let mut d = def("a", &[], &[]);
        d.synonyms = vec!["  Net   Zero ".to_string()];
        let catalog = ConceptCatalog::compile(vec![d]).unwrap();
        assert_eq!(catalog.get("a").unwrap().synonyms(), ["net zero".to_string()]);
    }
}
