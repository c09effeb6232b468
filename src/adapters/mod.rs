//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Session stores (YAML files, in-memory)
//! - `catalog` - Catalog sources (built-in, YAML file)

pub mod catalog;
pub mod storage;

pub use catalog::{catalog_source_from_config, BuiltinCatalogSource, YamlFileCatalogSource};
pub use storage::{FileSessionStore, InMemorySessionStore};
