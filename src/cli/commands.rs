use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sprout")]
#[command(
    author,
    version,
    about = "A CLI-based SMART goal validator and epic generator for PI planning"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write structured logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a goals document against the SMART rubric
    #[command(visible_alias = "v")]
    Validate {
        /// Plain-text goals document (use '-' to read from stdin)
        file: String,

        /// Output the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate epics and features from reviewed goals
    #[command(visible_alias = "g")]
    Generate {
        /// JSON array of goal records (use '-' to read from stdin)
        file: String,

        /// Output the full result as JSON
        #[arg(long)]
        json: bool,

        /// Use sequential ids (EPIC-1001, ...) for reproducible output
        #[arg(long)]
        sequential_ids: bool,
    },

    /// Show the effort sizing scale
    Sizes {
        /// Output the scale as JSON
        #[arg(long)]
        json: bool,
    },
}
