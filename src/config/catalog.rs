//! Catalog configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Where the questionnaire content is read from
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// YAML catalog file; the built-in catalog is used when unset
    pub path: Option<String>,
}

impl CatalogConfig {
    /// Check if a catalog file overrides the built-in content
    pub fn uses_file(&self) -> bool {
        self.path.is_some()
    }

    /// Validate catalog configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        match &self.path {
            Some(path) if path.trim().is_empty() => Err(ValidationError::EmptyCatalogPath),
            _ => Ok(()),
        }
    }
}
