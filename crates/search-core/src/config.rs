// search-core/src/config.rs
//! Search tuning shared by every surface

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Quiet window after the last keystroke before a search is issued
    pub debounce_ms: u64,
    /// How many results the header and widget surfaces show before "see more"
    pub preview_limit: usize,
    /// Artificial delay added to in-process searches
    pub simulated_latency_ms: u64,
    /// Give up on a search after this long and report a transport failure
    pub request_timeout_ms: Option<u64>,
    /// Catalog file to use instead of the compiled-in one
    pub catalog_path: Option<PathBuf>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            preview_limit: 8,
            simulated_latency_ms: 0,
            request_timeout_ms: None,
            catalog_path: None,
        }
    }
}

impl SearchConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Load the file if it exists and parses, otherwise fall back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::debug!("using default search config: {e}");
                Self::default()
            }
        }
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_ms.map(Duration::from_millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: SearchConfig = toml::from_str("").unwrap();
        assert_eq!(config, SearchConfig::default());
        assert_eq!(config.debounce(), Duration::from_millis(300));
        assert_eq!(config.request_timeout(), None);
    }

    #[test]
    fn reads_kebab_case_keys() {
        let config: SearchConfig = toml::from_str(
            "debounce-ms = 150\npreview-limit = 5\nrequest-timeout-ms = 2000\n",
        )
        .unwrap();
        assert_eq!(config.debounce_ms, 150);
        assert_eq!(config.preview_limit, 5);
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(2)));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(toml::from_str::<SearchConfig>("debounce = 1").is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = SearchConfig::load_or_default(dir.path().join("nope.toml"));
        assert_eq!(config, SearchConfig::default());
    }
}
