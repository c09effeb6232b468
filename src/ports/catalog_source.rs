//! Catalog Source Port - Where the questionnaire content comes from.

use async_trait::async_trait;

use crate::domain::catalog::{CatalogError, DiagnosisCatalog};

/// Port for loading a validated catalog
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog
    ///
    /// # Errors
    /// Returns `CatalogError` if the content cannot be read, parsed or validated
    async fn load(&self) -> Result<DiagnosisCatalog, CatalogError>;
}
