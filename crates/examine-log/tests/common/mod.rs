use std::path::Path;
use std::process::{Command, Output, Stdio};

pub fn examine(action: &str, id: i64) -> String {
    serde_json::json!({
        "event": "menu_option_clicked",
        "option": "Examine",
        "action": action,
        "id": id,
    })
    .to_string()
}

pub fn chat(message: &str) -> String {
    serde_json::json!({ "event": "chat_message", "message": message }).to_string()
}

pub fn game_state(state: &str) -> String {
    serde_json::json!({ "event": "game_state_changed", "state": state }).to_string()
}

/// Run the binary against `data_dir` with `args`
pub fn examine_log(data_dir: &Path, args: &[&str], stdin: Option<&str>) -> Output {
    use std::io::Write;

    let mut child = Command::new(env!("CARGO_BIN_EXE_examine-log"))
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env("RUST_LOG", "warn")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn examine-log");

    let mut pipe = child.stdin.take().unwrap();
    if let Some(input) = stdin {
        pipe.write_all(input.as_bytes()).unwrap();
    }
    drop(pipe);

    child.wait_with_output().unwrap()
}
