//! CLI commands for introscore

pub mod rubric;
pub mod score;

use crate::cli::{Cli, Commands};
use introscore_core::error::Result;

/// Dispatch the parsed command
pub fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Score {
            transcript,
            rubric,
            duration,
            phrases,
        } => score::execute(cli, transcript, rubric, *duration, phrases.as_deref()),

        Commands::Rubric { rubric } => rubric::execute(cli, rubric),
    }
}
