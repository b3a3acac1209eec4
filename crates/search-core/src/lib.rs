// search-core/src/lib.rs
//! Content catalog and search for the site.
//!
//! The catalog is immutable after startup and shared by reference. Every
//! UI surface reaches it through [`SearchBackend`], either directly via
//! [`SearchService`] or through a transport in front of it.

pub mod backend;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod search;

pub use backend::SearchBackend;
pub use catalog::Catalog;
pub use config::SearchConfig;
pub use error::{CatalogError, ConfigError, SearchError};
pub use models::{ContentEntry, EntryId};
pub use search::{Query, SearchService};

pub use tokio_util::sync::CancellationToken;

/// Build the catalog named by `config`, falling back to the compiled-in one.
pub fn load_catalog(config: &SearchConfig) -> Result<Catalog, CatalogError> {
    match &config.catalog_path {
        Some(path) => {
            tracing::info!("loading catalog from {path:?}");
            Catalog::load(path)
        }
        None => Catalog::builtin(),
    }
}
