//! Logger configuration

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Same field layout as the client's old `Date` strings, except that chrono
/// renders `%Z` as a numeric offset (`+00:00`) rather than a zone name
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%a %b %d %H:%M:%S %Z %Y";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Emit a chat notification when a new text is recorded
    pub notify_new_texts: bool,

    /// chrono format string for first-seen timestamps
    pub timestamp_format: String,

    /// Max pending examines; oldest dropped when full. `None` = unbounded
    pub queue_capacity: Option<usize>,
}

impl Config {
    pub fn new() -> Self {
        Self {
            notify_new_texts: true,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            queue_capacity: None,
        }
    }

    /// Load config from `path`, falling back to defaults when the file is
    /// missing, unreadable or malformed.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::new();
        }

        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config unreadable, using defaults");
                return Self::new();
            }
        };

        match serde_json::from_str::<Config>(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config malformed, using defaults");
                Self::new()
            }
        }
    }

    /// Write config as pretty JSON
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        examine_log_storage::atomic_write(path, json.as_bytes())?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
