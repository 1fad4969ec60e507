use examine_log_core::{Config, ExamineLogger, HostEvent, Notification, Notifier, TextLog};
use examine_log_storage::Paths;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Writes each notification to stdout as one JSON line
struct JsonLinesNotifier<W: Write> {
    out: W,
}

impl<W: Write> Notifier for JsonLinesNotifier<W> {
    fn notify(&mut self, notification: Notification) {
        let written = serde_json::to_string(&notification)
            .map_err(io::Error::from)
            .and_then(|json| writeln!(self.out, "{}", json))
            .and_then(|_| self.out.flush());
        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to emit notification");
        }
    }
}

pub fn run(paths: &Paths, events: Option<&Path>) -> anyhow::Result<()> {
    let stdout = io::stdout();
    match events {
        Some(file) => {
            let reader = BufReader::new(std::fs::File::open(file)?);
            replay(paths, reader, stdout.lock())?;
        }
        None => {
            replay(paths, io::stdin().lock(), stdout.lock())?;
        }
    }
    Ok(())
}

/// Start up, feed every event through the logger in order, then shut down.
/// Returns the number of events handled.
fn replay<R: BufRead, W: Write>(paths: &Paths, input: R, out: W) -> anyhow::Result<usize> {
    let config = Config::load(&paths.config_file());
    let log = TextLog::new(paths.text_log_file());
    let mut logger = ExamineLogger::new(log, &config, JsonLinesNotifier { out });
    logger.startup();

    let mut handled = 0;
    for event in examine_log_storage::read_jsonl::<HostEvent, _>(input) {
        logger.handle(&event);
        handled += 1;
    }

    logger.shutdown()?;
    tracing::info!(
        handled,
        total = logger.text_log().count(),
        "event stream finished"
    );
    Ok(handled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const EVENTS: &str = r#"{"event":"menu_option_clicked","option":"Examine","action":"EXAMINE_OBJECT","id":1276}
{"event":"chat_message","message":"A commonly found tree."}
{"event":"chat_message","message":"Unmatched message."}
this line is not json
{"event":"menu_option_clicked","option":"Examine","action":"EXAMINE_NPC","id":3}
{"event":"game_state_changed","state":"LOADING"}
{"event":"chat_message","message":"Dropped by reset."}
"#;

    #[test]
    fn test_replay_records_and_notifies() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        let mut out = Vec::new();

        let handled = replay(&paths, Cursor::new(EVENTS), &mut out).unwrap();
        assert_eq!(handled, 6);

        let stdout = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 1);
        let notification: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(
            notification["text"],
            "New Examine Text Unlocked! (1 Total Unique Texts)"
        );

        let content = std::fs::read_to_string(paths.text_log_file()).unwrap();
        assert!(content.starts_with("A commonly found tree.:"));
        assert_eq!(content.lines().count(), 1);
    }

    #[test]
    fn test_replay_resumes_count_across_runs() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());

        replay(&paths, Cursor::new(EVENTS), io::sink()).unwrap();

        let second = r#"{"event":"menu_option_clicked","option":"Examine","action":"EXAMINE_ITEM_GROUND","id":952}
{"event":"chat_message","message":"A slightly muddy spade."}
"#;
        let mut out = Vec::new();
        replay(&paths, Cursor::new(second), &mut out).unwrap();

        let stdout = String::from_utf8(out).unwrap();
        assert!(stdout.contains("(2 Total Unique Texts)"));
    }

    #[test]
    fn test_replay_honours_config() {
        let temp = tempfile::TempDir::new().unwrap();
        let paths = Paths::with_root(temp.path());
        let config = Config {
            notify_new_texts: false,
            ..Config::new()
        };
        config.save(&paths.config_file()).unwrap();

        let mut out = Vec::new();
        replay(&paths, Cursor::new(EVENTS), &mut out).unwrap();

        assert!(out.is_empty());
        assert!(paths.text_log_file().exists());
    }
}
