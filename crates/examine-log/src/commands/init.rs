use examine_log_core::Config;
use examine_log_storage::Paths;

pub fn run(paths: &Paths) -> anyhow::Result<()> {
    let created = init(paths)?;

    println!("✓ Data directory: {}", paths.examine_dir().display());
    if created {
        println!("✓ Wrote default config to {}", paths.config_file().display());
    } else {
        println!("  Config already present at {}", paths.config_file().display());
    }
    Ok(())
}

/// Returns whether a new config file was written
fn init(paths: &Paths) -> anyhow::Result<bool> {
    std::fs::create_dir_all(paths.examine_dir())?;

    let config_path = paths.config_file();
    if config_path.exists() {
        return Ok(false);
    }

    Config::new().save(&config_path)?;
    Ok(true)
}
