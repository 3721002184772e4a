//! Report rendering for evaluation outcomes.

use std::fmt::Write as _;

use speccheck_core::Outcomes;

use crate::config::ReportFormat;

/// Width of the backend-name column in table mode.
const NAME_WIDTH: usize = 15;

/// Render `outcomes` in the requested format. No trailing newline.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn render(outcomes: &Outcomes, format: ReportFormat) -> serde_json::Result<String> {
    match format {
        ReportFormat::Table => Ok(render_table(outcomes)),
        ReportFormat::Indexed => Ok(render_indexed(outcomes)),
        ReportFormat::Json => serde_json::to_string_pretty(outcomes),
    }
}

/// Header row of vector indices, then one `V`/`X` row per backend.
///
/// A row missing a backend's verdict shows `-`.
#[must_use]
pub fn render_table(outcomes: &Outcomes) -> String {
    let mut out = format!("|{:NAME_WIDTH$}|", "");
    for index in 0..outcomes.len() {
        let _ = write!(out, " {index} |");
    }

    for (column, name) in outcomes.backends.iter().enumerate() {
        let _ = write!(out, "\n|{name:<NAME_WIDTH$}|");
        for row in &outcomes.rows {
            out.push_str(match row.get(column) {
                Some(true) => " V |",
                Some(false) => " X |",
                None => " - |",
            });
        }
    }
    out
}

/// `# <backend>` followed by `<index>: <verdict>` lines, per backend.
///
/// A row missing a backend's verdict shows `-`.
#[must_use]
pub fn render_indexed(outcomes: &Outcomes) -> String {
    let mut blocks = Vec::with_capacity(outcomes.backends.len());
    for (column, name) in outcomes.backends.iter().enumerate() {
        let mut block = format!("# {name}");
        for (index, row) in outcomes.rows.iter().enumerate() {
            match row.get(column) {
                Some(verdict) => {
                    let _ = write!(block, "\n{index}: {verdict}");
                }
                None => {
                    let _ = write!(block, "\n{index}: -");
                }
            }
        }
        blocks.push(block);
    }
    blocks.join("\n")
}

/// One-line summary of vectors on which backends disagree.
#[must_use]
pub fn render_disagreements(outcomes: &Outcomes) -> String {
    let indices = outcomes.disagreements();
    if indices.is_empty() {
        return "Disagreements: none".to_string();
    }
    let list: Vec<String> = indices.iter().map(ToString::to_string).collect();
    format!("Disagreements: {}", list.join(", "))
}
