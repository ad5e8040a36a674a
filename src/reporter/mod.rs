//! Statistics reporter
//!
//! [`StatisticsReporter`] wraps a line-oriented [`Reporter`] and adds two
//! things to its output:
//!
//! - every result line is annotated with the test's run time, and lines of
//!   failed or skipped tests are coloured;
//! - the end-of-run summary starts with a per-category statistics table and
//!   reprints every failed test before the wrapped reporter's own summary.
//!
//! # Example
//!
//! ```
//! use tapstats::reporter::StatisticsReporter;
//! use tapstats::results::TestResult;
//! use tapstats::style::Styles;
//! use tapstats::tap::TapReporter;
//! use tapstats::ui::CaptureUI;
//!
//! # fn main() -> tapstats::error::Result<()> {
//! let mut out = CaptureUI::new();
//! let mut reporter = StatisticsReporter::new(TapReporter::new(), Styles::plain());
//!
//! reporter.report(&mut out, "Chrome", TestResult::passed("unit adds").with_duration(4))?;
//! assert_eq!(out.captured(), "ok 1 Chrome - [4 ms] - unit adds\n");
//!
//! let summary = reporter.summary_display(&mut out)?;
//! assert!(summary.contains("median time (ms)"));
//! # Ok(())
//! # }
//! ```

use crate::error::Result;
use crate::results::{ResultRecord, RunTotals, TestResult};
use crate::style::Styles;
use crate::tap::Reporter;
use crate::ui::UI;

pub mod intercept;
pub mod summary;

/// Reporter that decorates a wrapped [`Reporter`] with timing statistics.
pub struct StatisticsReporter<R: Reporter> {
    inner: R,
    styles: Styles,
    reprint_failures: bool,
}

impl<R: Reporter> StatisticsReporter<R> {
    pub fn new(inner: R, styles: Styles) -> Self {
        StatisticsReporter {
            inner,
            styles,
            reprint_failures: true,
        }
    }

    /// Whether failed tests are printed again in the summary.
    pub fn with_reprint_failures(mut self, reprint: bool) -> Self {
        self.reprint_failures = reprint;
        self
    }

    /// Record a completed test and display it.
    pub fn report(&mut self, out: &mut dyn UI, launcher: &str, result: TestResult) -> Result<()> {
        let stored = self.inner.record(launcher, result);
        self.display(out, launcher, &stored)
    }

    /// Display one result through the wrapped reporter, decorated.
    pub fn display(&self, out: &mut dyn UI, prefix: &str, result: &TestResult) -> Result<()> {
        let inner = &self.inner;
        intercept::display_one(out, result, &self.styles, |sink| {
            inner.display(sink, prefix, result)
        })
    }

    /// The full closing text: statistics table, reprinted failures and the
    /// wrapped reporter's summary.
    ///
    /// Errors and warnings raised while reprinting go to `diagnostics`.
    pub fn summary_display(&self, diagnostics: &mut dyn UI) -> Result<String> {
        summary::summarize(&self.inner, &self.styles, self.reprint_failures, diagnostics)
    }

    /// Write the closing text to `out`.
    pub fn finish(&self, out: &mut dyn UI) -> Result<()> {
        let summary = self.summary_display(out)?;
        out.write(&format!("\n{}\n", summary))
    }

    /// Only the statistics table.
    pub fn statistics_table(&self) -> String {
        summary::statistics_table(&self.inner, &self.styles)
    }

    pub fn results(&self) -> &[ResultRecord] {
        self.inner.results()
    }

    pub fn totals(&self) -> RunTotals {
        self.inner.totals()
    }

    /// True if any recorded test failed without being skipped.
    pub fn has_failures(&self) -> bool {
        self.totals().has_failures()
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
