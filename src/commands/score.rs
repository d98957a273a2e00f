//! `introscore score` command - score one transcript against the rubric

use std::fs;
use std::io::Read;
use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use introscore_core::error::Result;
use introscore_core::phrases::PhraseBook;
use introscore_core::rubric::load_rubric;
use introscore_core::score::{ScoreEngine, ScoreReport};

/// Execute the score command
pub fn execute(
    cli: &Cli,
    transcript_path: &Path,
    rubric_path: &Path,
    duration: Option<f64>,
    phrases_path: Option<&Path>,
) -> Result<()> {
    let transcript = read_transcript(transcript_path)?;

    let rubric = load_rubric(rubric_path)?;
    tracing::debug!(rows = rubric.len(), "rubric loaded");

    let mut engine = ScoreEngine::new(rubric);
    if let Some(path) = phrases_path {
        engine = engine.with_phrases(PhraseBook::load(path)?);
    }

    let report = engine.evaluate(&transcript, duration)?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => print_human(cli, &report),
    }

    Ok(())
}

fn read_transcript(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn print_human(cli: &Cli, report: &ScoreReport) {
    println!("Overall score: {:.2} / 100", report.overall_score);
    if !cli.quiet {
        println!(
            "Words: {}  Sentences: {}",
            report.word_count, report.sentence_count
        );
        println!();
        for (label, c) in &report.criteria_scores {
            let mut extras = Vec::new();
            if let Some(wpm) = c.wpm {
                extras.push(format!("{:.2} wpm", wpm));
            }
            if let Some(rate) = c.errors_per_100 {
                extras.push(format!("{:.2} errors/100 words", rate));
            }
            if let Some(errors) = &c.errors {
                if !errors.is_empty() {
                    extras.push(format!("unknown: {}", errors.join(", ")));
                }
            }
            if let Some(rate) = c.filler_rate {
                extras.push(format!("{:.2} fillers/100 words", rate));
            }
            if let Some(count) = c.filler_count {
                extras.push(format!("{} filler hits", count));
            }
            if let Some(compound) = c.compound {
                extras.push(format!("polarity {:.3}", compound));
            }

            let detail = if extras.is_empty() {
                String::new()
            } else {
                format!("  ({})", extras.join(", "))
            };
            println!(
                "{:<20} score {:.2}  weight {:.2}{}",
                label, c.score, c.weight, detail
            );
        }
    }
}
