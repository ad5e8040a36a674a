//! Report a recorded test run with timing statistics

use crate::commands::utils::{load_config, open_input};
use crate::commands::Command;
use crate::error::Result;
use crate::input::for_each_result;
use crate::reporter::StatisticsReporter;
use crate::style::{ColorMode, Styles};
use crate::tap::TapReporter;
use crate::ui::UI;
use std::cell::RefCell;
use std::io::Read;
use tracing::{debug, warn};

/// Command to stream a run through the statistics reporter.
///
/// Every result is printed as it is read; the statistics table, reprinted
/// failures and TAP summary follow once the input is exhausted.
pub struct ReportCommand {
    base_path: Option<String>,
    input_path: Option<String>,
    input: RefCell<Option<Box<dyn Read>>>,
    launcher: Option<String>,
    color: Option<ColorMode>,
    no_reprint: bool,
}

impl ReportCommand {
    /// Report the run in `input_path`, or stdin when None.
    pub fn new(base_path: Option<String>, input_path: Option<String>) -> Self {
        ReportCommand {
            base_path,
            input_path,
            input: RefCell::new(None),
            launcher: None,
            color: None,
            no_reprint: false,
        }
    }

    /// Read the run from `input` instead of a file or stdin.
    pub fn with_input(base_path: Option<String>, input: Box<dyn Read>) -> Self {
        let cmd = Self::new(base_path, None);
        *cmd.input.borrow_mut() = Some(input);
        cmd
    }

    /// Override the configured launcher label.
    pub fn launcher(mut self, launcher: Option<String>) -> Self {
        self.launcher = launcher;
        self
    }

    /// Override the configured colour mode.
    pub fn color(mut self, color: Option<ColorMode>) -> Self {
        self.color = color;
        self
    }

    /// Skip reprinting failed tests regardless of configuration.
    pub fn no_reprint(mut self, no_reprint: bool) -> Self {
        self.no_reprint = no_reprint;
        self
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let config = load_config(self.base_path.as_deref())?;
        let launcher = self.launcher.clone().unwrap_or(config.launcher);
        let styles = Styles::new(self.color.unwrap_or(config.color));
        let reprint = config.reprint_failures && !self.no_reprint;

        let mut reporter =
            StatisticsReporter::new(TapReporter::new(), styles).with_reprint_failures(reprint);

        let reader = open_input(self.input_path.as_deref(), &self.input)?;
        let count = for_each_result(reader, |result| {
            reporter.report(&mut *ui, &launcher, result)
        })?;

        if count == 0 {
            warn!("no test results in input");
        }

        reporter.finish(ui)?;

        let totals = reporter.totals();
        debug!(
            total = totals.total,
            pass = totals.pass,
            skipped = totals.skipped,
            "report finished"
        );

        Ok(if reporter.has_failures() { 1 } else { 0 })
    }

    fn name(&self) -> &str {
        "report"
    }

    fn help(&self) -> &str {
        "Report a subunit stream as TAP with per-category timing statistics"
    }
}
