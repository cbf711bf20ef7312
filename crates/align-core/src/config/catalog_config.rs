use serde::{Deserialize, Serialize};

/// Concept catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// TOML catalog file replacing the built-in catalog.
    pub path: Option<String>,
}
