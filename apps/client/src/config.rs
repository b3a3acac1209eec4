use crate::error::Result;
use config::{AppStrategy, create_strategy, default_runtime_dir};
use search_core::SearchConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// The client reads the server's file so both sides agree on the socket.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    pub runtime_dir: PathBuf,
    pub search: SearchConfig,
    /// Contact form keys belong to the server
    #[serde(rename = "contact")]
    _contact: Option<toml::Table>,
}

fn default_config() -> Config {
    Config {
        runtime_dir: default_runtime_dir(),
        search: SearchConfig::default(),
        _contact: None,
    }
}

impl Config {
    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        Self::load_from(&strategy.config_dir().join(config::constants::SERVER_CONFIG_FILE_NAME))
    }

    fn load_from(path: &Path) -> Result<Config> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(default_config()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn socket_path(&self) -> PathBuf {
        config::socket_path(&self.runtime_dir)
    }
}
