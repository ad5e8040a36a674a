//! Error path testing
//!
//! This module tests error handling in various failure scenarios to ensure
//! the application properly handles and reports errors.

use std::fs;
use tapstats::commands::{Command, ReportCommand, StatsCommand};
use tapstats::config::ReporterConfig;
use tapstats::error::{Error, Result};
use tapstats::reporter::StatisticsReporter;
use tapstats::results::TestResult;
use tapstats::style::Styles;
use tapstats::tap::TapReporter;
use tapstats::ui::UI;
use tempfile::TempDir;

// Test UI implementation
struct TestUI {
    pub written: String,
    pub errors: Vec<String>,
    pub fail_writes: bool,
}

impl TestUI {
    fn new() -> Self {
        TestUI {
            written: String::new(),
            errors: Vec::new(),
            fail_writes: false,
        }
    }
}

impl UI for TestUI {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.fail_writes {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "broken pipe",
            )));
        }
        self.written.push_str(text);
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.errors.push(format!("Warning: {}", message));
        Ok(())
    }
}

#[test]
fn test_report_missing_input() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("does-not-exist.subunit");

    let mut ui = TestUI::new();
    let cmd = ReportCommand::new(
        Some(temp.path().to_string_lossy().to_string()),
        Some(missing.to_string_lossy().to_string()),
    );
    let result = cmd.execute(&mut ui);

    match result {
        Err(Error::InputNotFound(path)) => assert_eq!(path, missing),
        other => panic!("expected InputNotFound, got {:?}", other),
    }
}

#[test]
fn test_stats_missing_input() {
    let temp = TempDir::new().unwrap();
    let mut ui = TestUI::new();
    let cmd = StatsCommand::new(
        Some(temp.path().to_string_lossy().to_string()),
        Some(temp.path().join("nope").to_string_lossy().to_string()),
    );
    assert!(matches!(cmd.execute(&mut ui), Err(Error::InputNotFound(_))));
    assert!(ui.written.is_empty());
}

#[test]
fn test_invalid_config_value() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join(".tapstats.conf"),
        "[DEFAULT]\nreprint_failures=sometimes\n",
    )
    .unwrap();

    let input = temp.path().join("empty.subunit");
    fs::write(&input, b"").unwrap();

    let mut ui = TestUI::new();
    let cmd = ReportCommand::new(
        Some(temp.path().to_string_lossy().to_string()),
        Some(input.to_string_lossy().to_string()),
    );
    let err = cmd.execute(&mut ui).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(err.to_string().contains("sometimes"));
}

#[test]
fn test_config_without_default_section() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(".tapstats.conf");
    fs::write(&path, "[report]\nlauncher=x\n").unwrap();

    let result = ReporterConfig::load_from_file(&path);
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_config_directory_unreadable_as_file() {
    let temp = TempDir::new().unwrap();
    // A directory where the config file should be cannot be read.
    fs::create_dir(temp.path().join(".tapstats.conf")).unwrap();

    let result = ReporterConfig::discover(temp.path());
    assert!(matches!(result, Err(Error::Config(_))));
}

#[test]
fn test_garbage_input_yields_empty_report() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("garbage.subunit");
    fs::write(&input, b"this is not a subunit stream\n").unwrap();

    let mut ui = TestUI::new();
    let cmd = ReportCommand::new(
        Some(temp.path().to_string_lossy().to_string()),
        Some(input.to_string_lossy().to_string()),
    );
    let result = cmd.execute(&mut ui);

    // Undecodable input is skipped rather than reported as results.
    match result {
        Ok(code) => {
            assert_eq!(code, 0);
            assert!(ui.written.contains("1..0"));
        }
        Err(Error::Subunit(_)) => {}
        Err(e) => panic!("Unexpected error type: {:?}", e),
    }
}

#[test]
fn test_write_failure_propagates() {
    let mut ui = TestUI::new();
    ui.fail_writes = true;

    let mut reporter = StatisticsReporter::new(TapReporter::new(), Styles::plain());
    let err = reporter
        .report(&mut ui, "Chrome", TestResult::failed("unit broken"))
        .unwrap_err();
    assert!(matches!(err, Error::Io(_)));

    // The result is kept even though it could not be shown.
    assert_eq!(reporter.results().len(), 1);
    ui.fail_writes = false;
    reporter.finish(&mut ui).unwrap();
    assert!(ui
        .written
        .contains("Reprinting failed tests...\nnot ok 1 Chrome - [0 ms] - unit broken\n"));
}
