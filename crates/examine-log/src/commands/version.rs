pub fn run() -> anyhow::Result<()> {
    println!("examine-log {}", env!("CARGO_PKG_VERSION"));
    println!("Examine text collection log");
    Ok(())
}
