//! Catalog Adapters
//!
//! Implementations of the CatalogSource port.
//!
//! - **BuiltinCatalogSource** - The content bundle compiled into the crate
//! - **YamlFileCatalogSource** - A YAML file on disk

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::info;

use crate::config::CatalogConfig;
use crate::domain::catalog::{CatalogError, DiagnosisCatalog};
use crate::ports::CatalogSource;

/// Serves the catalog embedded in the crate
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalogSource;

#[async_trait]
impl CatalogSource for BuiltinCatalogSource {
    async fn load(&self) -> Result<DiagnosisCatalog, CatalogError> {
        DiagnosisCatalog::builtin()
    }
}

/// Reads and validates a catalog YAML file
#[derive(Debug, Clone)]
pub struct YamlFileCatalogSource {
    path: PathBuf,
}

impl YamlFileCatalogSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CatalogSource for YamlFileCatalogSource {
    async fn load(&self) -> Result<DiagnosisCatalog, CatalogError> {
        let yaml = fs::read_to_string(&self.path)
            .await
            .map_err(|e| CatalogError::Io(format!("{}: {}", self.path.display(), e)))?;
        let catalog = DiagnosisCatalog::from_yaml_str(&yaml)?;
        info!(
            path = %self.path.display(),
            version = %catalog.version,
            questions = catalog.value_questions.len(),
            "Catalog loaded"
        );
        Ok(catalog)
    }
}

/// Picks the catalog source named by configuration.
pub fn catalog_source_from_config(config: &CatalogConfig) -> Box<dyn CatalogSource> {
    match &config.path {
        Some(path) => Box::new(YamlFileCatalogSource::new(path)),
        None => Box::new(BuiltinCatalogSource),
    }
}
