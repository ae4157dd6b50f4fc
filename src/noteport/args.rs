use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "noteport")]
#[command(about = "Export Apple Notes to plain text files", long_about = None)]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " ", env!("GIT_HASH")))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug-level logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Export all notes (the default when no command is given)
    #[command(alias = "x")]
    Export {
        /// Destination directory (defaults to the configured or standard
        /// documents location)
        #[arg(required = false)]
        directory: Option<PathBuf>,
    },

    /// Print a permission report for a prospective destination
    Check {
        /// Directory to inspect
        directory: PathBuf,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., export-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
