//! Path resolution for the examine log data directory

use crate::error::{Result, StorageError};
use std::path::PathBuf;

/// Environment variable that overrides the data root
pub const HOME_ENV: &str = "EXAMINE_LOG_HOME";

/// Resolves standard paths under the client data root
#[derive(Debug, Clone)]
pub struct Paths {
    pub root: PathBuf,
}

impl Paths {
    /// Resolve the data root from `EXAMINE_LOG_HOME`, falling back to `~/.runelite`
    pub fn new() -> Result<Self> {
        if let Some(root) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
            return Ok(Self::with_root(root));
        }

        let home = dirs::home_dir().ok_or(StorageError::NoHomeDir)?;
        Ok(Self::with_root(home.join(".runelite")))
    }

    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding everything this tool writes
    pub fn examine_dir(&self) -> PathBuf {
        self.root.join("examineText")
    }

    /// The persisted text log
    pub fn text_log_file(&self) -> PathBuf {
        self.examine_dir().join("examine_text_collection_log.txt")
    }

    pub fn config_file(&self) -> PathBuf {
        self.examine_dir().join("examine_log.json")
    }
}
