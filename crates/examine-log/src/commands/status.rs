use examine_log_core::TextLog;
use examine_log_storage::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    println!("{}", status_json(paths)?);
    Ok(())
}

fn status_json(paths: &Paths) -> anyhow::Result<serde_json::Value> {
    let mut log = TextLog::new(paths.text_log_file());
    let count = log.load()?;

    Ok(serde_json::json!({
        "count": count,
        "path": log.path().display().to_string(),
    }))
}
