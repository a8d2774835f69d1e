//! Text rendering of results
//!
//! Every cell is two terminal columns wide (a Hangul syllable is full-width),
//! with two columns between cells. Shorter rows are indented by half a stride
//! per missing cell, which centres the pyramid.

use gunghap_core::interleave::interleave;
use gunghap_core::prelude::*;

const CELL: usize = 2;
const GAP: usize = 2;

fn row_line(cells: &[String], width: usize) -> String {
    let indent = width.saturating_sub(cells.len()) * (CELL + GAP) / 2;
    let line = format!("{}{}", " ".repeat(indent), cells.join(&" ".repeat(GAP)));
    line.trim_end().to_string()
}

fn digit_cells(row: &[u8]) -> Vec<String> {
    row.iter().map(|d| format!("{:<width$}", d, width = CELL)).collect()
}

/// The pyramid: interleaved names on top, then every ladder row
pub fn pyramid_lines(first: &Name, second: &Name, result: &CompatibilityResult) -> Vec<String> {
    let top: Vec<String> = interleave(first.syllables(), second.syllables(), result.lead)
        .into_iter()
        .map(String::from)
        .collect();
    let width = top.len().max(result.interleaved.len());

    let mut lines = Vec::with_capacity(result.ladder.len() + 1);
    lines.push(row_line(&top, width));
    for row in result.ladder.rows() {
        lines.push(row_line(&digit_cells(row), width));
    }
    lines
}

/// Final score as shown to the user
pub fn score_line(score: u8) -> String {
    format!("{}%", score)
}

fn strokes_cell(strokes: Option<u8>) -> String {
    strokes.map_or_else(|| "-".to_string(), |s| s.to_string())
}

/// One line per syllable: indices, component strokes, total
pub fn breakdown_lines(name: &Name, rows: &[SyllableBreakdown]) -> Vec<String> {
    let mut lines = vec![format!("{} ({} syllables)", name, name.len())];

    for (i, row) in rows.iter().enumerate() {
        let line = match row.decomposition {
            Decomposition::Valid(parts) => format!(
                "  {} {}  [{:>2} {:>2} {:>2}]  {} + {} + {} = {}",
                i,
                row.syllable,
                parts.initial,
                parts.vowel,
                parts.final_slot,
                strokes_cell(row.initial_strokes),
                strokes_cell(row.vowel_strokes),
                strokes_cell(row.final_strokes),
                row.total.map_or_else(|| "-".to_string(), |t| t.to_string()),
            ),
            Decomposition::Invalid => format!("  {} {:?}  invalid", i, row.syllable),
        };
        lines.push(line);
    }
    lines
}
