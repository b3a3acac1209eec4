use super::{Command, build_service};
use crate::config::Config;
use crate::error::Result;

pub struct CatalogCommand {
    config: Config,
}

impl CatalogCommand {
    pub fn new(cfg: Config) -> Self {
        Self { config: cfg }
    }
}

#[async_trait::async_trait]
impl Command for CatalogCommand {
    async fn execute(&self) -> Result<()> {
        let service = build_service(&self.config)?;
        for entry in service.catalog().iter() {
            println!(
                "{:>4}  {:<16} {:<48} {}",
                entry.id, entry.kind, entry.title, entry.path
            );
        }
        Ok(())
    }
}
