mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use examine_log_storage::Paths;

fn main() -> anyhow::Result<()> {
    // stdout is reserved for notifications
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let paths = match cli.data_dir {
        Some(dir) => Paths::with_root(dir),
        None => Paths::new()?,
    };

    match cli.command {
        Commands::Run { events } => commands::run::run(&paths, events.as_deref()),
        Commands::Status => commands::status::run(&paths),
        Commands::Init => commands::init::run(&paths),
        Commands::Version => commands::version::run(),
    }
}
