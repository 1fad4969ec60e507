use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "examine-log")]
#[command(version)]
#[command(about = "Collect every unique examine text exactly once")]
pub struct Cli {
    /// Data root (defaults to $EXAMINE_LOG_HOME or ~/.runelite)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Replay a JSON-lines stream of client events (stdin if no file)
    Run {
        /// Path to an events file
        #[arg(short, long)]
        events: Option<PathBuf>,
    },

    /// Show how many texts have been collected
    Status,

    /// Create the data directory and a default config
    Init,

    /// Print version information
    Version,
}
