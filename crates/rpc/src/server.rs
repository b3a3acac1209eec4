use search_core::{CancellationToken, ContentEntry, EntryId, SearchService};
use tarpc::context::Context;
use tracing::{info, warn};

use crate::ContentSearch;

/// Serves the catalog to remote search surfaces.
///
/// tarpc drops the request future when the client cancels, which also ends
/// any simulated latency early.
#[derive(Clone)]
pub struct CatalogServer {
    service: SearchService,
}

impl CatalogServer {
    pub fn new(service: SearchService) -> Self {
        Self { service }
    }
}

impl ContentSearch for CatalogServer {
    async fn ping(self, _c: Context) -> String {
        "Pong".to_string()
    }

    async fn search(self, _c: Context, query: String) -> Result<Vec<ContentEntry>, String> {
        info!(query = %query, "search request");
        self.service
            .search_async(&query, &CancellationToken::new())
            .await
            .map_err(|e| {
                warn!("search failed: {e}");
                e.to_string()
            })
    }

    async fn entry(self, _c: Context, id: EntryId) -> Option<ContentEntry> {
        self.service.catalog().get(id).cloned()
    }
}
