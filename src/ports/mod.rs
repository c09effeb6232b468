//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `SessionStore` - Key-value persistence of questionnaire sessions
//! - `CatalogSource` - Loading of the questionnaire content bundle

mod catalog_source;
mod session_store;

pub use catalog_source::CatalogSource;
pub use session_store::{SessionStore, SessionStoreError};
