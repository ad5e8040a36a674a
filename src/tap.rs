//! Line-oriented TAP reporter
//!
//! [`TapReporter`] is the plain reporter the statistics layer wraps. It keeps
//! every result it is given, numbers them, and prints one TAP block per test.

use crate::error::Result;
use crate::results::{Outcome, ResultRecord, RunTotals, TestResult};
use crate::ui::UI;

/// Capabilities the statistics layer needs from a wrapped reporter.
pub trait Reporter {
    /// Retain `result`, assigning it the next sequence id.
    ///
    /// Returns the stored result, id included.
    fn record(&mut self, launcher: &str, result: TestResult) -> TestResult;

    /// Write the textual form of one result to `out`.
    fn display(&self, out: &mut dyn UI, prefix: &str, result: &TestResult) -> Result<()>;

    /// The reporter's own closing text.
    fn summary_display(&self) -> String;

    /// Every retained record, in completion order.
    fn results(&self) -> &[ResultRecord];

    fn totals(&self) -> RunTotals;
}

/// Reporter producing Test Anything Protocol output.
#[derive(Debug)]
pub struct TapReporter {
    next_id: usize,
    totals: RunTotals,
    results: Vec<ResultRecord>,
}

impl TapReporter {
    pub fn new() -> Self {
        TapReporter {
            next_id: 1,
            totals: RunTotals::default(),
            results: Vec::new(),
        }
    }
}

impl Default for TapReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TapReporter {
    fn record(&mut self, launcher: &str, mut result: TestResult) -> TestResult {
        result.id = Some(self.next_id);
        self.next_id += 1;
        self.totals.add(&result);
        self.results.push(ResultRecord::new(launcher, result.clone()));
        result
    }

    fn display(&self, out: &mut dyn UI, prefix: &str, result: &TestResult) -> Result<()> {
        out.write(&result_string(prefix, result))
    }

    fn summary_display(&self) -> String {
        let RunTotals {
            total,
            pass,
            skipped,
        } = self.totals;
        let mut lines = vec![
            format!("1..{}", total),
            format!("# tests {}", total),
            format!("# pass  {}", pass),
            format!("# skip  {}", skipped),
            format!("# fail  {}", self.totals.failed()),
        ];
        if !self.totals.has_failures() {
            lines.push(String::new());
            lines.push("# ok".to_string());
        }
        lines.join("\n")
    }

    fn results(&self) -> &[ResultRecord] {
        &self.results
    }

    fn totals(&self) -> RunTotals {
        self.totals
    }
}

/// TAP block for one result: the status line, then a YAML diagnostic for
/// failures that carry a message or details.
fn result_string(prefix: &str, result: &TestResult) -> String {
    let status = match result.outcome() {
        Outcome::Skipped => "skip",
        Outcome::Passed => "ok",
        Outcome::Failed => "not ok",
    };
    let mut text = match result.id {
        Some(id) => format!("{} {} {} - {}\n", status, id, prefix, result.name.trim()),
        None => format!("{} {} - {}\n", status, prefix, result.name.trim()),
    };

    if result.is_failure() && (result.message.is_some() || result.details.is_some()) {
        text.push_str("    ---\n");
        if let Some(message) = result.message.as_deref().and_then(|m| m.lines().next()) {
            text.push_str(&format!("    message: {}\n", message));
        }
        if let Some(ref details) = result.details {
            text.push_str("    stack: |\n");
            for line in details.lines() {
                text.push_str(&format!("      {}\n", line));
            }
        }
        text.push_str("    ...\n");
    }
    text
}
