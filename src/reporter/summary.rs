//! End-of-run summary composition

use crate::error::Result;
use crate::reporter::intercept;
use crate::stats;
use crate::style::Styles;
use crate::table;
use crate::tap::Reporter;
use crate::ui::UI;
use tracing::debug;

/// Printed once in front of the reprinted failures.
pub const REPRINT_BANNER: &str = "\nReprinting failed tests...\n";

/// Build the statistics table for everything `reporter` has retained.
pub fn statistics_table<R: Reporter + ?Sized>(reporter: &R, styles: &Styles) -> String {
    let rows = stats::fold_categories(reporter.results());
    table::render(&rows, reporter.totals().has_failures(), styles)
}

/// Re-render every failed, non-skipped result in completion order.
///
/// Empty when nothing failed; otherwise starts with [`REPRINT_BANNER`].
/// Errors and warnings the reporter emits while redisplaying go to
/// `diagnostics`.
pub fn reprint_failures<R: Reporter + ?Sized>(
    reporter: &R,
    styles: &Styles,
    diagnostics: &mut dyn UI,
) -> Result<String> {
    let mut block = String::new();
    for record in reporter
        .results()
        .iter()
        .filter(|record| record.result.is_failure())
    {
        if block.is_empty() {
            block.push_str(REPRINT_BANNER);
        }
        let text = intercept::render_one(&record.result, styles, &mut *diagnostics, |sink| {
            reporter.display(sink, &record.launcher, &record.result)
        })?;
        block.push_str(&text);
    }
    debug!(bytes = block.len(), "reprinted failed tests");
    Ok(block)
}

/// Statistics table, reprinted failures and the reporter's own summary,
/// joined by newlines.
pub fn summarize<R: Reporter + ?Sized>(
    reporter: &R,
    styles: &Styles,
    reprint: bool,
    diagnostics: &mut dyn UI,
) -> Result<String> {
    let failures = if reprint {
        reprint_failures(reporter, styles, diagnostics)?
    } else {
        String::new()
    };
    Ok([
        statistics_table(reporter, styles),
        failures,
        reporter.summary_display(),
    ]
    .join("\n"))
}
