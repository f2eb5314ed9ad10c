//! Error types for the vault reconciliation pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem and serialization errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode JSON for {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid path: {0}")]
    InvalidPath(String),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors surfaced by a sync pass, the watcher, or startup validation
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Vault path is not set. Pass --vault or set VAULTSYNC_VAULT_PATH.")]
    VaultPathMissing,

    #[error("Vault path does not exist: {0}")]
    VaultNotFound(PathBuf),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("Watch error: {0}")]
    WatchError(#[from] notify::Error),

    #[error("Failed to render output: {0}")]
    OutputError(#[source] serde_json::Error),
}

impl From<config::ConfigError> for SyncError {
    fn from(err: config::ConfigError) -> Self {
        SyncError::ConfigError(err.to_string())
    }
}
