//! CLI argument parsing for introscore
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Output format for introscore commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
}

/// Introscore - rubric-based scoring of spoken self-introduction transcripts
#[derive(Parser, Debug)]
#[command(name = "introscore")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Verbose diagnostics
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score a transcript against the rubric
    Score {
        /// Transcript file path, or `-` to read from stdin
        transcript: PathBuf,

        /// Rubric CSV path
        #[arg(long, env = "INTROSCORE_RUBRIC")]
        rubric: PathBuf,

        /// Spoken duration in seconds
        #[arg(long, short)]
        duration: Option<f64>,

        /// Alternate phrase-set TOML file
        #[arg(long)]
        phrases: Option<PathBuf>,
    },

    /// Show the loaded rubric rows and how they dispatch
    Rubric {
        /// Rubric CSV path
        #[arg(long, env = "INTROSCORE_RUBRIC")]
        rubric: PathBuf,
    },
}
