//! Deduplicating, file-backed log of examine texts

use crate::config::DEFAULT_TIMESTAMP_FORMAT;
use crate::error::Result;
use crate::notify::HIGHLIGHT_TAG;
use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};

/// Separator between text and first-seen timestamp in the log file
const SEPARATOR: char = ':';

/// Substrings that mark a chat message as something other than an examine text
const NOISE_PATTERNS: [&str; 2] = ["x Coins", HIGHLIGHT_TAG];

/// Currency stacks and highlighted client messages (including our own
/// notifications echoed back) are never recorded.
pub fn is_noise(text: &str) -> bool {
    NOISE_PATTERNS.iter().any(|p| text.contains(p))
}

/// Result of [`TextLog::insert_if_absent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// Recorded for the first time; `count` is the new total
    Inserted { count: usize },
    Duplicate,
    Noise,
    Empty,
}

impl InsertOutcome {
    pub fn is_inserted(self) -> bool {
        matches!(self, InsertOutcome::Inserted { .. })
    }
}

/// Every unique examine text seen so far, keyed by text, valued by the
/// formatted time it was first seen.
///
/// The whole map lives in memory. Each successful insert rewrites the
/// backing file in full.
#[derive(Debug)]
pub struct TextLog {
    path: PathBuf,
    entries: HashMap<String, String>,
    count: usize,
    timestamp_format: String,
}

impl TextLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            entries: HashMap::new(),
            count: 0,
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }

    pub fn with_timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace in-memory state with the contents of the backing file.
    ///
    /// A missing file yields an empty log. Lines without a separator, or
    /// with an empty text or timestamp, are skipped. On a read error the
    /// current state is left untouched. Returns the number of entries.
    pub fn load(&mut self) -> Result<usize> {
        let Some(lines) = examine_log_storage::read_lines(&self.path)? else {
            tracing::debug!(path = %self.path.display(), "no text log yet, starting empty");
            self.entries.clear();
            self.count = 0;
            return Ok(0);
        };

        let mut entries = HashMap::with_capacity(lines.len());
        for (lineno, line) in lines.iter().enumerate() {
            match parse_line(line) {
                Some((text, first_seen)) => {
                    entries.insert(text.to_string(), first_seen.to_string());
                }
                None => tracing::debug!(line = lineno + 1, "skipping malformed log line"),
            }
        }

        self.entries = entries;
        self.count = self.entries.len();
        tracing::info!(count = self.count, path = %self.path.display(), "loaded text log");
        Ok(self.count)
    }

    /// Record `text` with the current time unless it is empty, noise or
    /// already known. A new entry is persisted immediately; if that write
    /// fails the entry is still kept in memory and the next save retries.
    pub fn insert_if_absent(&mut self, text: &str) -> InsertOutcome {
        let now = self.now();
        self.insert_with_timestamp(text, &now)
    }

    /// Same as [`insert_if_absent`](Self::insert_if_absent) with an explicit
    /// first-seen value.
    ///
    /// Line breaks become spaces and surrounding whitespace is trimmed, so
    /// the entry reads back from the file under the same key.
    pub fn insert_with_timestamp(&mut self, text: &str, first_seen: &str) -> InsertOutcome {
        let text = single_line(text);
        let first_seen = single_line(first_seen);
        let text = text.as_str();
        if text.is_empty() {
            return InsertOutcome::Empty;
        }
        if is_noise(text) {
            return InsertOutcome::Noise;
        }
        if self.entries.contains_key(text) {
            return InsertOutcome::Duplicate;
        }

        self.entries.insert(text.to_string(), first_seen);
        self.count += 1;

        if let Err(e) = self.save() {
            tracing::warn!(error = %e, "failed to persist text log, will retry on next save");
        }

        InsertOutcome::Inserted { count: self.count }
    }

    /// Overwrite the backing file with every entry, one `text:first_seen`
    /// per line.
    pub fn save(&self) -> Result<()> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut out = String::new();
        for (text, first_seen) in sorted {
            out.push_str(text);
            out.push(SEPARATOR);
            out.push_str(first_seen);
            out.push('\n');
        }

        examine_log_storage::atomic_write(&self.path, out.as_bytes())?;
        tracing::debug!(count = self.count, path = %self.path.display(), "saved text log");
        Ok(())
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn contains(&self, text: &str) -> bool {
        self.entries.contains_key(text)
    }

    /// First-seen timestamp for `text`
    pub fn get(&self, text: &str) -> Option<&str> {
        self.entries.get(text).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn now(&self) -> String {
        let now = chrono::Local::now();
        let mut out = String::new();
        if write!(out, "{}", now.format(&self.timestamp_format)).is_err() {
            tracing::warn!(format = %self.timestamp_format, "invalid timestamp format, using default");
            out.clear();
            let _ = write!(out, "{}", now.format(DEFAULT_TIMESTAMP_FORMAT));
        }
        out
    }
}

fn single_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ").trim().to_string()
}

/// Split on the first separator; timestamps keep any colons of their own.
/// A text that itself contains the separator is cut at its first colon on
/// reload, since the file format has no escaping.
fn parse_line(line: &str) -> Option<(&str, &str)> {
    let (text, first_seen) = line.split_once(SEPARATOR)?;
    let (text, first_seen) = (text.trim(), first_seen.trim());
    if text.is_empty() || first_seen.is_empty() {
        return None;
    }
    Some((text, first_seen))
}
