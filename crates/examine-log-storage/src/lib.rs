//! On-disk layout and file primitives for the examine text log

mod error;
mod io;
mod paths;

pub use error::{Result, StorageError};
pub use io::{atomic_write, read_jsonl, read_lines};
pub use paths::{Paths, HOME_ENV};
