use crate::error::Result;
use contact::EmailServiceKeys;
use search_core::SearchConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use config::{AppStrategy, create_strategy, default_runtime_dir};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default = "default_config", deny_unknown_fields)]
pub struct Config {
    pub runtime_dir: PathBuf,
    /// Debounce, preview and catalog settings
    pub search: SearchConfig,
    /// Email service account used for contact form submissions
    pub contact: Option<EmailServiceKeys>,
}

fn default_config() -> Config {
    Config {
        runtime_dir: default_runtime_dir(),
        search: SearchConfig::default(),
        contact: None,
    }
}

const EXAMPLE_CONFIG: &str = r#"# Content search server configuration
#
# Created on first run. Restart the server after editing.

# Where the unix socket lives
# runtime-dir = "/custom/runtime/path"

[search]
# Quiet window after the last keystroke before a search is issued
# debounce-ms = 300

# Results shown by the header and widget before "see more"
# preview-limit = 8

# Artificial delay for in-process searches, useful for trying out cancellation
# simulated-latency-ms = 0

# Report a failure when a search takes longer than this
# request-timeout-ms = 2000

# Catalog file to serve instead of the built-in one
# catalog-path = "/path/to/catalog.toml"

# Email service account for the contact form
# [contact]
# service-id = "service_xxx"
# template-id = "template_xxx"
# public-key = "xxx"
"#;

impl Config {
    fn load_str(user_config_str: &str) -> Result<Config> {
        let user_config: Config = toml::from_str(user_config_str)?;
        Ok(user_config)
    }

    pub fn load() -> Result<Config> {
        let strategy = create_strategy()?;
        let config_path = strategy.config_dir().join(config::constants::SERVER_CONFIG_FILE_NAME);
        Self::load_from(&config_path)
    }

    fn load_from(config_path: &Path) -> Result<Config> {
        match std::fs::read_to_string(config_path) {
            Ok(user_config_str) => Self::load_str(&user_config_str),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Self::create_example_config(config_path)?;
                Self::load_str("")
            }
            Err(e) => Err(e.into()),
        }
    }

    fn create_example_config(config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, EXAMPLE_CONFIG)?;
        eprintln!("Created configuration file: {}", config_path.display());
        Ok(())
    }

    pub fn socket_path(&self) -> PathBuf {
        config::socket_path(&self.runtime_dir)
    }
}
