// search-core/src/backend.rs
//! The single entry point UI surfaces call to run a search

use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

use crate::error::SearchError;
use crate::models::ContentEntry;
use crate::search::SearchService;

/// Anything that can answer a query, in process or across a transport.
///
/// Implementations must return [`SearchError::Cancelled`] once `cancel` has
/// been signalled and must never report a cancelled search as an empty
/// success.
#[async_trait]
pub trait SearchBackend: Send + Sync {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ContentEntry>, SearchError>;
}

#[async_trait]
impl SearchBackend for SearchService {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ContentEntry>, SearchError> {
        self.search_async(query, cancel).await
    }
}

#[async_trait]
impl<B: SearchBackend + ?Sized> SearchBackend for Arc<B> {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ContentEntry>, SearchError> {
        (**self).search(query, cancel).await
    }
}
