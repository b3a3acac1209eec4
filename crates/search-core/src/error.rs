use std::path::PathBuf;
use thiserror::Error;

use crate::models::EntryId;

/// Failure of a single search invocation.
///
/// An empty result set is not an error; it is `Ok(vec![])`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The caller signalled the cancellation token before the search finished.
    #[error("search was cancelled")]
    Cancelled,
    /// The backend in front of the catalog could not be reached or failed.
    #[error("search transport failed: {0}")]
    Transport(String),
}

impl SearchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Cancelled)
    }
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("duplicate catalog id {0}")]
    DuplicateId(EntryId),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}
