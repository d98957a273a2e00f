//! `introscore rubric` command - inspect the loaded rubric
//!
//! Shows each normalized row and which criterion scorer it dispatches to,
//! making the first-match-wins routing auditable without scoring anything.

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use introscore_core::error::Result;
use introscore_core::rubric::load_rubric;
use introscore_core::score::route;

/// Execute the rubric command
pub fn execute(cli: &Cli, rubric_path: &Path) -> Result<()> {
    let rows = load_rubric(rubric_path)?;

    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = rows
                .iter()
                .map(|row| {
                    serde_json::json!({
                        "criteria": row.criteria,
                        "metric": row.metric,
                        "weight": row.weight,
                        "dispatches_to": route(row).map(|rule| rule.label),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for row in &rows {
                let target = route(row).map(|rule| rule.label).unwrap_or("(unmatched)");
                println!(
                    "{:.4}  {:<24} {:<44} -> {}",
                    row.weight, row.criteria, row.metric, target
                );
            }
        }
    }

    Ok(())
}
