mod backend;
mod server;

pub use backend::{RpcBackend, connect};
pub use server::CatalogServer;

use search_core::{ContentEntry, EntryId};

#[tarpc::service]
pub trait ContentSearch {
    /// Heartbeat
    async fn ping() -> String;

    /// Entries whose title or content contain `query`, in catalog order.
    /// `Err` carries a server-side failure.
    async fn search(query: String) -> Result<Vec<ContentEntry>, String>;

    /// Look up one entry by id
    async fn entry(id: EntryId) -> Option<ContentEntry>;
}
