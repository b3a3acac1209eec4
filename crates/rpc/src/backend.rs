use async_trait::async_trait;
use search_core::{CancellationToken, ContentEntry, SearchBackend, SearchError};
use std::path::Path;
use tarpc::{client, context, tokio_serde::formats::Bincode};

use crate::ContentSearchClient;

/// Connect to a content-search server listening on `socket_path`.
pub async fn connect(socket_path: &Path) -> std::io::Result<ContentSearchClient> {
    let mut transport = tarpc::serde_transport::unix::connect(socket_path, Bincode::default);
    transport.config_mut().max_frame_length(usize::MAX);
    let transport = transport.await?;
    Ok(ContentSearchClient::new(client::Config::default(), transport).spawn())
}

/// A [`SearchBackend`] that asks a remote [`crate::ContentSearch`] server.
#[derive(Clone)]
pub struct RpcBackend {
    client: ContentSearchClient,
}

impl RpcBackend {
    pub fn new(client: ContentSearchClient) -> Self {
        Self { client }
    }

    pub async fn connect(socket_path: &Path) -> std::io::Result<Self> {
        Ok(Self::new(connect(socket_path).await?))
    }

    pub fn client(&self) -> &ContentSearchClient {
        &self.client
    }
}

#[async_trait]
impl SearchBackend for RpcBackend {
    async fn search(
        &self,
        query: &str,
        cancel: &CancellationToken,
    ) -> Result<Vec<ContentEntry>, SearchError> {
        if cancel.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        // Dropping the call on cancellation makes tarpc cancel it server-side too.
        let call = self.client.search(context::current(), query.to_string());
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(SearchError::Cancelled),
            response = call => match response {
                Ok(answer) => answer.map_err(SearchError::Transport),
                Err(e) => Err(SearchError::Transport(e.to_string())),
            },
        }
    }
}
