//! Event handler tying clicks, chat messages and the text log together

use crate::config::Config;
use crate::error::Result;
use crate::event::HostEvent;
use crate::notify::{Notification, Notifier};
use crate::queue::MatchQueue;
use crate::text_log::{InsertOutcome, TextLog};

/// Owns the pending queue, the text log and the notification sink.
///
/// Events must be delivered one at a time; every handler takes `&mut self`.
pub struct ExamineLogger<N: Notifier> {
    queue: MatchQueue,
    log: TextLog,
    notifier: N,
    notify_new_texts: bool,
}

impl<N: Notifier> ExamineLogger<N> {
    pub fn new(log: TextLog, config: &Config, notifier: N) -> Self {
        let queue = match config.queue_capacity {
            Some(cap) => MatchQueue::with_capacity_limit(cap),
            None => MatchQueue::new(),
        };
        Self {
            queue,
            log: log.with_timestamp_format(config.timestamp_format.clone()),
            notifier,
            notify_new_texts: config.notify_new_texts,
        }
    }

    /// Load persisted texts. A load failure is logged and the log starts empty.
    pub fn startup(&mut self) {
        if let Err(e) = self.log.load() {
            tracing::warn!(error = %e, "could not load text log, starting empty");
        }
    }

    /// Final save on the way out
    pub fn shutdown(&mut self) -> Result<()> {
        self.queue.reset();
        self.log.save()
    }

    pub fn handle(&mut self, event: &HostEvent) {
        match event {
            HostEvent::MenuOptionClicked { .. } => self.on_interaction(event),
            HostEvent::ChatMessage { message } => {
                self.on_text(message);
            }
            HostEvent::GameStateChanged { state } => {
                tracing::debug!(%state, "game state changed");
                self.on_context_reset();
            }
        }
    }

    /// Queue a token if the click was an examine
    pub fn on_interaction(&mut self, event: &HostEvent) {
        if let Some(token) = event.pending_token() {
            tracing::debug!(id = token.id, "examine pending");
            self.queue.enqueue(token);
        }
    }

    /// Match a chat message against the oldest pending examine.
    /// Returns `None` when nothing was pending.
    pub fn on_text(&mut self, message: &str) -> Option<InsertOutcome> {
        let token = self.queue.dequeue()?;

        let outcome = self.log.insert_if_absent(message);
        if let InsertOutcome::Inserted { count } = outcome {
            tracing::info!(id = token.id, count, "new examine text");
            if self.notify_new_texts {
                self.notifier.notify(Notification::new_text_unlocked(count));
            }
        }
        Some(outcome)
    }

    pub fn on_context_reset(&mut self) {
        self.queue.reset();
    }

    pub fn text_log(&self) -> &TextLog {
        &self.log
    }

    /// Number of examines waiting for text
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::MenuAction;

    fn examine(id: i64) -> HostEvent {
        HostEvent::MenuOptionClicked {
            option: "Examine".to_string(),
            action: MenuAction::ExamineObject,
            id,
        }
    }

    fn logger(temp: &tempfile::TempDir) -> ExamineLogger<Vec<Notification>> {
        let log = TextLog::new(temp.path().join("log.txt"));
        ExamineLogger::new(log, &Config::new(), Vec::new())
    }

    #[test]
    fn test_text_without_pending_is_ignored() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut logger = logger(&temp);

        assert_eq!(logger.on_text("A spade."), None);
        assert_eq!(logger.text_log().count(), 0);
        assert!(logger.notifier().is_empty());
    }

    #[test]
    fn test_noise_consumes_token() {
        let temp = tempfile::TempDir::new().unwrap();
        let mut logger = logger(&temp);

        logger.handle(&examine(995));
        assert_eq!(logger.on_text("10 x Coins"), Some(InsertOutcome::Noise));
        assert_eq!(logger.pending(), 0);
        assert!(logger.notifier().is_empty());
    }

    #[test]
    fn test_notifications_disabled_still_records() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config {
            notify_new_texts: false,
            ..Config::new()
        };
        let mut logger =
            ExamineLogger::new(TextLog::new(temp.path().join("log.txt")), &config, Vec::new());

        logger.handle(&examine(1));
        logger.handle(&HostEvent::ChatMessage {
            message: "A spade.".to_string(),
        });

        assert_eq!(logger.text_log().count(), 1);
        assert!(logger.notifier().is_empty());
    }

    #[test]
    fn test_queue_capacity_from_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let config = Config {
            queue_capacity: Some(2),
            ..Config::new()
        };
        let mut logger =
            ExamineLogger::new(TextLog::new(temp.path().join("log.txt")), &config, Vec::new());

        for id in 1..=5 {
            logger.handle(&examine(id));
        }
        assert_eq!(logger.pending(), 2);
    }
}
