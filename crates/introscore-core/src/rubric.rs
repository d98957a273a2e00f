//! Rubric loading and weight normalization
//!
//! The rubric is a CSV export of the evaluation sheet. The scorable rows sit
//! below a marker row containing `Overall Rubrics`; each row carries a
//! criteria name, a metric description, and a raw weightage. Rows with a
//! missing or non-numeric weightage are excluded, and the remaining weights
//! are normalized to sum to 1.0.

use std::fs;
use std::path::Path;

use crate::error::{Result, ScoreError};

/// Marker row that starts the scorable section of the sheet
const SECTION_MARKER: &str = "overall rubrics";

/// Rows scanned below the marker. The sheet may carry trailing notes and
/// merged-cell remnants past the rubric table.
const ROW_WINDOW: usize = 12;

/// One scoring-criterion definition from the rubric sheet.
///
/// Loaded once per process and read-only afterwards; `weight` is this row's
/// fraction of the total weightage across all valid rows.
#[derive(Debug, Clone, PartialEq)]
pub struct RubricRow {
    /// Criteria name, e.g. "Content"
    pub criteria: String,
    /// Metric description, e.g. "Speech rate (words per minute)"
    pub metric: String,
    /// Normalized weight; all rows sum to 1.0
    pub weight: f64,
}

/// Load and normalize the rubric table from a CSV file.
///
/// Fails when the file is missing, when no `Overall Rubrics` marker is
/// present, or when no row below the marker carries a numeric weightage.
pub fn load_rubric(path: &Path) -> Result<Vec<RubricRow>> {
    if !path.exists() {
        return Err(ScoreError::RubricNotFound {
            path: path.to_path_buf(),
        });
    }
    let content = fs::read_to_string(path)?;
    parse_rubric(&content).map_err(|reason| ScoreError::invalid_rubric(path, reason))
}

fn parse_rubric(content: &str) -> std::result::Result<Vec<RubricRow>, String> {
    let rows: Vec<Vec<String>> = content.lines().map(split_csv_line).collect();

    let marker = rows
        .iter()
        .position(|cells| {
            cells
                .iter()
                .any(|c| c.to_lowercase().contains(SECTION_MARKER))
        })
        .ok_or_else(|| "could not find 'Overall Rubrics' section".to_string())?;

    let mut raw: Vec<(String, String, f64)> = Vec::new();
    for cells in rows.iter().skip(marker + 1).take(ROW_WINDOW) {
        if cells.iter().all(|c| c.trim().is_empty()) {
            continue;
        }
        let criteria = cells.first().map(|c| c.trim()).unwrap_or_default();
        let metric = cells.get(1).map(|c| c.trim()).unwrap_or_default();
        let weightage = cells.get(2).map(|c| c.trim()).unwrap_or_default();
        if criteria.is_empty() || metric.is_empty() {
            continue;
        }
        let Ok(weightage) = weightage.parse::<f64>() else {
            continue;
        };
        raw.push((criteria.to_string(), metric.to_string(), weightage));
    }

    let total: f64 = raw.iter().map(|(_, _, w)| w).sum();
    if raw.is_empty() || total <= 0.0 {
        return Err("no rubric rows with a numeric weightage".to_string());
    }

    Ok(raw
        .into_iter()
        .map(|(criteria, metric, weightage)| RubricRow {
            criteria,
            metric,
            weight: weightage / total,
        })
        .collect())
}

/// Split one CSV line into cells, honoring double-quoted fields.
///
/// Metric descriptions contain commas, so the rubric export quotes them.
/// Doubled quotes inside a quoted field decode to a literal quote.
fn split_csv_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut cell = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    cell.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                cells.push(std::mem::take(&mut cell));
            }
            _ => cell.push(ch),
        }
    }
    cells.push(cell);
    cells
}
