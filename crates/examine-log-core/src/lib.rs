//! Examine text matching, deduplication and persistence

mod config;
mod error;
mod event;
mod logger;
mod notify;
mod queue;
mod text_log;

pub use config::Config;
pub use error::{Error, Result};
pub use event::{HostEvent, MenuAction, PendingToken};
pub use logger::ExamineLogger;
pub use notify::{MessageKind, Notification, Notifier};
pub use queue::MatchQueue;
pub use text_log::{is_noise, InsertOutcome, TextLog};
