//! Statistics table rendering

use crate::category::Category;
use crate::stats::StatsRow;
use crate::style::Styles;
use console::{measure_text_width, pad_str, Alignment};
use std::collections::BTreeMap;

/// Column headers after the blank label column, in order.
pub const HEADERS: [&str; 8] = [
    "total tests",
    "passed tests",
    "failed tests",
    "skipped tests",
    "total time (ms)",
    "mean time (ms)",
    "median time (ms)",
    "peak time (ms)",
];

/// Render the per-category statistics table.
///
/// Rows always appear in [`Category::ALL`] order; a category missing from
/// `rows` is rendered as an all-zero row. The header is red when the run
/// has any failed, non-skipped test and green otherwise.
pub fn render(rows: &BTreeMap<Category, StatsRow>, has_failures: bool, styles: &Styles) -> String {
    let paint = |text: &str| -> String {
        if has_failures {
            styles.err(text).into_owned()
        } else {
            styles.ok(text).into_owned()
        }
    };

    let mut header = vec![paint("")];
    header.extend(HEADERS.iter().map(|h| paint(*h)));

    let mut grid = Grid::new(header);
    for category in Category::ALL {
        let row = rows.get(&category).copied().unwrap_or_default();
        grid.push_row(vec![
            category.name().to_string(),
            row.total.to_string(),
            row.passed.to_string(),
            row.failed.to_string(),
            row.skipped.to_string(),
            row.total_time.to_string(),
            format_millis(row.mean_time),
            format_millis(row.median_time),
            row.peak_time.to_string(),
        ]);
    }
    grid.render()
}

/// Whole values print without a fractional part.
fn format_millis(value: f64) -> String {
    if value.is_finite() {
        value.to_string()
    } else {
        "0".to_string()
    }
}

/// Box-drawn character grid with a header row.
///
/// Cells may contain escape codes; widths are measured on visible text.
#[derive(Debug)]
pub struct Grid {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(header: Vec<String>) -> Self {
        Grid {
            header,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    fn widths(&self) -> Vec<usize> {
        let columns = std::iter::once(&self.header)
            .chain(&self.rows)
            .map(Vec::len)
            .max()
            .unwrap_or(0);
        (0..columns)
            .map(|i| {
                std::iter::once(&self.header)
                    .chain(&self.rows)
                    .filter_map(|row| row.get(i))
                    .map(|cell| measure_text_width(cell))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let rule = |left: &str, mid: &str, right: &str| -> String {
            let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
            format!("{}{}{}", left, segments.join(mid), right)
        };
        let line = |cells: &[String]| -> String {
            let padded: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!(" {} ", pad_str(cell, *w, Alignment::Left, None))
                })
                .collect();
            format!("│{}│", padded.join("│"))
        };

        let mut lines = vec![rule("┌", "┬", "┐"), line(self.header.as_slice())];
        for row in &self.rows {
            lines.push(rule("├", "┼", "┤"));
            lines.push(line(row.as_slice()));
        }
        lines.push(rule("└", "┴", "┘"));
        lines.join("\n")
    }
}
