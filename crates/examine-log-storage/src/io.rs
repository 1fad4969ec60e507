//! Line-oriented I/O and atomic file replacement

use crate::error::{Result, StorageError};
use serde::Deserialize;
use std::io::BufRead;
use std::path::Path;

/// Read a text file as lines.
///
/// Each line is decoded on its own; invalid UTF-8 is replaced with U+FFFD
/// so one bad byte never costs the rest of the file. Returns `Ok(None)` when
/// the file does not exist, which callers treat as an empty store rather
/// than a failure.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>> {
    if !path.exists() {
        return Ok(None);
    }

    let bytes = std::fs::read(path).map_err(|source| StorageError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let body = bytes.strip_suffix(b"\n").unwrap_or(&bytes[..]);
    if body.is_empty() {
        return Ok(Some(Vec::new()));
    }

    let lines = body
        .split(|&b| b == b'\n')
        .map(|line| {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            String::from_utf8_lossy(line).into_owned()
        })
        .collect();
    Ok(Some(lines))
}

/// Lazily decode JSON records, one per line.
///
/// Blank lines and lines that fail to decode are skipped. A read error ends
/// the stream.
pub fn read_jsonl<T, R>(reader: R) -> impl Iterator<Item = T>
where
    T: for<'de> Deserialize<'de>,
    R: BufRead,
{
    reader
        .lines()
        .map_while(|line| match line {
            Ok(line) => Some(line),
            Err(e) => {
                tracing::warn!(error = %e, "input stream closed");
                None
            }
        })
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match serde_json::from_str(&line) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(error = %e, "skipping malformed record");
                None
            }
        })
}

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data).map_err(write_err)?;
    std::fs::rename(&temp_path, path).map_err(write_err)?;
    Ok(())
}
