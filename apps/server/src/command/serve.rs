use super::{Command, build_service};
use crate::config::Config;
use crate::error::Result;
use futures::{future, prelude::*};
use std::fs;
use tracing::info;

use rpc::{CatalogServer, ContentSearch};
use tarpc::{
    server::{self, Channel},
    tokio_serde::formats::Bincode,
};

async fn spawn(fut: impl Future<Output = ()> + Send + 'static) {
    tokio::spawn(fut);
}

pub struct ServeCommand {
    config: Config,
}

impl ServeCommand {
    pub fn new(cfg: Config) -> Self {
        Self { config: cfg }
    }
}

#[async_trait::async_trait]
impl Command for ServeCommand {
    async fn execute(&self) -> Result<()> {
        let unix_socket_path = self.config.socket_path();

        if let Some(parent) = unix_socket_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if unix_socket_path.exists() {
            fs::remove_file(&unix_socket_path)?;
        }

        let server = CatalogServer::new(build_service(&self.config)?);

        info!("listening on {:?}", unix_socket_path);

        let mut listener =
            tarpc::serde_transport::unix::listen(&unix_socket_path, Bincode::default).await?;
        listener.config_mut().max_frame_length(usize::MAX);

        let serving = listener
            .filter_map(|r| future::ready(r.ok()))
            .map(server::BaseChannel::with_defaults)
            .map(|channel| {
                let server = server.clone();
                channel.execute(server.serve()).for_each(spawn)
            })
            .buffer_unordered(10)
            .for_each(|_| async {});

        tokio::select! {
            _ = serving => {}
            _ = tokio::signal::ctrl_c() => info!("shutting down"),
        }

        fs::remove_file(&unix_socket_path)?;
        Ok(())
    }
}
