//! Item catalog configuration loading

use super::ConfigError;
use crate::item::{Catalog, ItemTemplate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Container for item templates
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(rename = "items", default)]
    pub items: Vec<ItemTemplate>,
}

impl CatalogConfig {
    /// Validate and build the catalog
    pub fn into_catalog(self) -> Result<Catalog, ConfigError> {
        Catalog::from_templates(self.items)
    }
}

/// Load a catalog from a TOML or JSON file (chosen by extension)
pub fn load_catalog(path: &Path) -> Result<Catalog, ConfigError> {
    let config: CatalogConfig = super::load_any(path)?;
    config.into_catalog()
}

/// Load a catalog from a TOML string
pub fn parse_catalog(content: &str) -> Result<Catalog, ConfigError> {
    let config: CatalogConfig = super::parse_toml(content)?;
    config.into_catalog()
}

/// Get the bundled catalog
pub fn default_catalog() -> Catalog {
    let toml = include_str!("../../config/catalog.toml");
    parse_catalog(toml).unwrap_or_else(|e| {
        log::error!("bundled catalog is invalid: {}", e);
        Catalog::new()
    })
}
