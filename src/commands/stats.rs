//! Show per-category timing statistics for a recorded run

use crate::commands::utils::{load_config, open_input};
use crate::commands::Command;
use crate::error::Result;
use crate::input::for_each_result;
use crate::reporter::StatisticsReporter;
use crate::style::{ColorMode, Styles};
use crate::tap::{Reporter, TapReporter};
use crate::ui::UI;
use std::cell::RefCell;
use std::io::Read;

pub struct StatsCommand {
    base_path: Option<String>,
    input_path: Option<String>,
    input: RefCell<Option<Box<dyn Read>>>,
    color: Option<ColorMode>,
}

impl StatsCommand {
    pub fn new(base_path: Option<String>, input_path: Option<String>) -> Self {
        StatsCommand {
            base_path,
            input_path,
            input: RefCell::new(None),
            color: None,
        }
    }

    pub fn with_input(base_path: Option<String>, input: Box<dyn Read>) -> Self {
        let cmd = Self::new(base_path, None);
        *cmd.input.borrow_mut() = Some(input);
        cmd
    }

    pub fn color(mut self, color: Option<ColorMode>) -> Self {
        self.color = color;
        self
    }
}

impl Command for StatsCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let config = load_config(self.base_path.as_deref())?;
        let styles = Styles::new(self.color.unwrap_or(config.color));

        let mut tap = TapReporter::new();
        let reader = open_input(self.input_path.as_deref(), &self.input)?;
        for_each_result(reader, |result| {
            tap.record(&config.launcher, result);
            Ok(())
        })?;

        let reporter = StatisticsReporter::new(tap, styles);
        ui.output(&reporter.statistics_table())?;
        Ok(0)
    }

    fn name(&self) -> &str {
        "stats"
    }

    fn help(&self) -> &str {
        "Show per-category timing statistics for a subunit stream"
    }
}
