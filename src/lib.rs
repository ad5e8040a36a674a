//! tapstats - TAP test reporting with timing statistics
//!
//! # Overview
//!
//! tapstats wraps a line-oriented TAP reporter. Each result line it prints is
//! annotated with the test's run time, and lines of failed or skipped tests
//! are coloured. When the run ends, the usual TAP summary is preceded by a
//! table of per-category statistics (counts, total, mean, median and peak
//! durations) and by a reprint of every failed test.
//!
//! # Architecture
//!
//! - [`results`]: test results, retained records and running totals
//! - [`category`]: grouping of results by test-name prefix
//! - [`stats`]: folding results into per-category statistics rows
//! - [`table`]: rendering statistics rows as a box-drawn table
//! - [`tap`]: the wrapped TAP reporter and the [`tap::Reporter`] trait
//! - [`reporter`]: [`reporter::StatisticsReporter`], which decorates a reporter
//! - [`input`]: reading recorded runs from subunit v2 streams
//! - [`commands`]: user-facing commands (report, stats)
//! - [`config`]: .tapstats.conf configuration file parsing
//! - [`style`]: terminal colours
//! - [`ui`]: User interface abstraction for output
//! - [`error`]: Error types and Result alias
//!
//! # Example
//!
//! ```no_run
//! use tapstats::commands::{Command, ReportCommand};
//! use tapstats::ui::CliUI;
//!
//! # fn main() -> tapstats::error::Result<()> {
//! let mut ui = CliUI::new();
//! let cmd = ReportCommand::new(None, Some("last-run.subunit".to_string()));
//! let exit_code = cmd.execute(&mut ui)?;
//! # let _ = exit_code;
//! # Ok(())
//! # }
//! ```

pub mod category;
pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod reporter;
pub mod results;
pub mod stats;
pub mod style;
pub mod table;
pub mod tap;
pub mod ui;

pub use error::{Error, Result};
