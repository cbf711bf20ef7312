use align_catalog::loader::{builtin_catalogs, load_catalogs};
use align_catalog::{ConceptCatalog, LevelCatalog};
use align_core::errors::CatalogError;
use align_core::models::CognitiveLevel;

const SMALL_CATALOG: &str = r#"
[[concepts]]
id = "coding"
detection_patterns = ['\bprogram(s|med|ming)?\b', '\bcod(e|es|ed|ing)\b']
synonyms = ["software development"]
weight = 0.9
cognitive_level = "apply"
related_concepts = ["testing"]

[[concepts]]
id = "testing"
detection_patterns = ['\btest(s|ed|ing)?\b']
weight = 0.7
cognitive_level = "evaluate"
"#;

#[test]
fn toml_catalog_compiles() {
    let catalog = ConceptCatalog::from_toml(SMALL_CATALOG).unwrap();
    assert_eq!(catalog.len(), 2);
    let coding = catalog.get("coding").unwrap();
    assert_eq!(coding.weight(), 0.9);
    assert_eq!(coding.definition().cognitive_level, CognitiveLevel::Apply);
    assert!(coding.matches("students will write programs"));
    assert!(catalog.is_related("coding", "testing"));
    assert!(!catalog.is_related("testing", "coding"));
}

#[test]
fn toml_catalog_with_unknown_related_is_rejected() {
    let doc = SMALL_CATALOG.replace(r#"related_concepts = ["testing"]"#, r#"related_concepts = ["debugging"]"#);
    let err = ConceptCatalog::from_toml(&doc).unwrap_err();
    assert!(matches!(err, CatalogError::UnknownRelated { ref related, .. } if related == "debugging"));
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = ConceptCatalog::from_toml("[[concepts]\nid =").unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn catalog_file_without_levels_uses_builtin_levels() {
    let path = std::env::temp_dir().join(format!("align-catalog-{}.toml", std::process::id()));
    std::fs::write(&path, SMALL_CATALOG).unwrap();

    let (concepts, levels) = load_catalogs(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(concepts.len(), 2);
    assert_eq!(
        levels.pattern_count(),
        LevelCatalog::builtin().unwrap().pattern_count()
    );
}

#[test]
fn missing_catalog_file_is_an_error() {
    let err = load_catalogs(std::path::Path::new("/nonexistent/catalog.toml")).unwrap_err();
    assert!(matches!(err, CatalogError::Parse { .. }));
}

#[test]
fn builtin_patterns_respect_word_boundaries() {
    let (concepts, _) = builtin_catalogs().unwrap();
    let sustainability = concepts.get("sustainability").unwrap();
    assert!(sustainability.matches("eco-friendly packaging"));
    assert!(!sustainability.matches("economic growth"));

    let management = concepts.get("management").unwrap();
    assert!(!management.matches("a misleading claim"));
}

#[test]
fn builtin_related_concepts_all_resolve() {
    let (concepts, _) = builtin_catalogs().unwrap();
    for concept in concepts.iter() {
        for related in concept.related() {
            assert!(concepts.get(related).is_some(), "{} -> {}", concept.id(), related);
            assert_ne!(related, concept.id());
        }
        let w = concept.weight();
        assert!(w > 0.0 && w <= 1.0);
    }
}

#[test]
fn entries_project_every_concept() {
    let catalog = ConceptCatalog::builtin().unwrap();
    let entries = catalog.entries();
    assert_eq!(entries.len(), catalog.len());
    let lca = entries.iter().find(|e| e.id == "lifecycle_assessment").unwrap();
    assert_eq!(lca.weight, 0.95);
    assert_eq!(lca.cognitive_level, CognitiveLevel::Analyze);
    assert!(lca.synonyms.contains(&"cradle to grave".to_string()));
}
