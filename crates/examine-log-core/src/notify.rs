//! Outbound chat notifications

use serde::Serialize;

/// Chat colour tag the client uses for highlighted text
pub const HIGHLIGHT_TAG: &str = "<colHIGHLIGHT>";

/// Chat channel a notification is queued on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MessageKind {
    ItemExamine,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: MessageKind,
    /// Plain message text
    pub text: String,
    /// Client-formatted message, highlight tag included
    pub formatted: String,
}

impl Notification {
    pub fn new_text_unlocked(count: usize) -> Self {
        let text = format!("New Examine Text Unlocked! ({} Total Unique Texts)", count);
        Self {
            kind: MessageKind::ItemExamine,
            formatted: format!("{}{}", HIGHLIGHT_TAG, text),
            text,
        }
    }
}

/// Sink for notifications, normally the host's chat box
pub trait Notifier {
    fn notify(&mut self, notification: Notification);
}

/// Collects notifications in memory
impl Notifier for Vec<Notification> {
    fn notify(&mut self, notification: Notification) {
        self.push(notification);
    }
}
