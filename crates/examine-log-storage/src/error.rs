use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while touching the data directory
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("home directory not found")]
    NoHomeDir,

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;
