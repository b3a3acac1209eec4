pub mod catalog;
pub mod contact;
pub mod search;
pub mod serve;

use crate::config::Config;
use crate::error::{Result, WrapErr};
use std::sync::Arc;

pub use catalog::CatalogCommand;
pub use contact::ContactCommand;
pub use search::SearchCommand;
pub use serve::ServeCommand;

use search_core::SearchService;

#[async_trait::async_trait]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}

/// Load the configured catalog and wrap it in a service.
fn build_service(cfg: &Config) -> Result<SearchService> {
    let catalog = search_core::load_catalog(&cfg.search).wrap_err("Load catalog error")?;
    tracing::info!("catalog loaded with {} entries", catalog.len());
    Ok(SearchService::new(Arc::new(catalog)).with_latency(cfg.search.simulated_latency()))
}
