use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "fracdex", about = "Fractional-indexing order keys", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Show debug logs on stderr (honours RUST_LOG)
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all logs
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Path to config file (defaults to ./fracdex.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Print JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Actor id; generated keys get a suffix derived from it
    #[arg(long, global = true)]
    pub actor: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print one key between two neighbors
    Between {
        /// Key of the element just before the new one
        #[arg(long)]
        before: Option<String>,

        /// Key of the element just after the new one
        #[arg(long)]
        after: Option<String>,
    },

    /// Print COUNT ascending keys between two neighbors
    Many {
        /// Number of keys to generate
        count: usize,

        #[arg(long)]
        before: Option<String>,

        #[arg(long)]
        after: Option<String>,
    },

    /// Report whether each key is well formed
    Validate {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Verify that keys form a strictly ascending run with room between neighbors
    Check {
        #[arg(required = true)]
        keys: Vec<String>,
    },

    /// Compare two keys in list order
    Compare { a: String, b: String },
}
