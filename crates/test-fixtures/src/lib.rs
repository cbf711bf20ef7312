//! Test fixture loader for the alignment golden scenarios.
//!
//! Fixtures are JSON files under `crates/test-fixtures/golden/`. Loaders panic
//! on missing or malformed files; they are only meant for tests and benches.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures crate.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up until a sibling test-fixtures dir appears.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("golden").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List all JSON files in a fixture subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// A source/target pair with the outcome the engine must produce.
#[derive(Debug, Clone, Deserialize)]
pub struct AlignmentScenario {
    pub name: String,
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub baseline: f64,
    pub expected: ExpectedAlignment,
}

/// Expectations for an [`AlignmentScenario`]. Absent fields are not checked.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ExpectedAlignment {
    pub score: Option<f64>,
    pub score_range: Option<(f64, f64)>,
    pub confidence: Option<f64>,
    pub semantic_similarity: Option<f64>,
    pub concept_alignment: Option<f64>,
    pub cognitive_coherence: Option<f64>,
    pub source_level: Option<String>,
    pub target_level: Option<String>,
    pub aligned_includes: Vec<String>,
    pub missing: Option<Vec<String>>,
    pub bridges: Vec<(String, String)>,
    pub suggestion_kinds: Option<Vec<String>>,
}

/// Load every scenario under `golden/alignment/`.
pub fn alignment_scenarios() -> Vec<AlignmentScenario> {
    list_fixtures("golden/alignment")
        .iter()
        .map(|path| {
            let content = std::fs::read_to_string(path)
                .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
            serde_json::from_str(&content)
                .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
        })
        .collect()
}
