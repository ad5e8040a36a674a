//! Test result data structures

use std::fmt;

/// How a single test ended.
///
/// A skipped test is never counted as passed, even if the runner also
/// flagged it as passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Test passed.
    Passed,
    /// Test failed and was not skipped.
    Failed,
    /// Test was skipped.
    Skipped,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Passed => write!(f, "passed"),
            Outcome::Failed => write!(f, "failed"),
            Outcome::Skipped => write!(f, "skipped"),
        }
    }
}

/// Result of a single completed test.
#[derive(Debug, Clone, PartialEq)]
pub struct TestResult {
    /// Test name; its prefix decides the category.
    pub name: String,
    /// Whether the test passed.
    pub passed: bool,
    /// Whether the test was skipped.
    pub skipped: bool,
    /// Run time in milliseconds.
    pub run_duration: u64,
    /// Sequence id, assigned when the result is recorded by a reporter.
    pub id: Option<usize>,
    /// Brief message describing a failure.
    pub message: Option<String>,
    /// Detailed output or traceback from the test.
    pub details: Option<String>,
}

impl TestResult {
    /// Create a passing test result
    pub fn passed(name: impl Into<String>) -> Self {
        TestResult {
            name: name.into(),
            passed: true,
            skipped: false,
            run_duration: 0,
            id: None,
            message: None,
            details: None,
        }
    }

    /// Create a failed test result
    pub fn failed(name: impl Into<String>) -> Self {
        TestResult {
            passed: false,
            ..Self::passed(name)
        }
    }

    /// Create a skipped test result
    pub fn skipped(name: impl Into<String>) -> Self {
        TestResult {
            passed: false,
            skipped: true,
            ..Self::passed(name)
        }
    }

    /// Set the run duration in milliseconds
    pub fn with_duration(mut self, millis: u64) -> Self {
        self.run_duration = millis;
        self
    }

    /// Set the failure message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Set the details
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn outcome(&self) -> Outcome {
        if self.skipped {
            Outcome::Skipped
        } else if self.passed {
            Outcome::Passed
        } else {
            Outcome::Failed
        }
    }

    /// True for results that failed without being skipped.
    pub fn is_failure(&self) -> bool {
        self.outcome() == Outcome::Failed
    }
}

/// A result together with the launcher that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRecord {
    /// Label of the execution context, e.g. a browser or worker name.
    pub launcher: String,
    pub result: TestResult,
}

impl ResultRecord {
    pub fn new(launcher: impl Into<String>, result: TestResult) -> Self {
        ResultRecord {
            launcher: launcher.into(),
            result,
        }
    }
}

/// Running totals kept by a reporter over a whole run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunTotals {
    pub total: usize,
    pub pass: usize,
    pub skipped: usize,
}

impl RunTotals {
    /// Account for one more result.
    pub fn add(&mut self, result: &TestResult) {
        self.total += 1;
        match result.outcome() {
            Outcome::Skipped => self.skipped += 1,
            Outcome::Passed => self.pass += 1,
            Outcome::Failed => {}
        }
    }

    /// Number of results that failed without being skipped.
    ///
    /// A reporter may count a result as both passed and skipped; the count
    /// then bottoms out at 0.
    pub fn failed(&self) -> usize {
        self.total.saturating_sub(self.pass + self.skipped)
    }

    pub fn has_failures(&self) -> bool {
        self.pass + self.skipped < self.total
    }
}
