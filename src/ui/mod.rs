//! User interface abstraction
//!
//! This module provides the UI trait that every piece of reporter output
//! goes through, plus the stdout and in-memory implementations.

use crate::error::Result;
use std::io::{self, Write};

#[cfg(test)]
pub mod test_ui;

/// Abstract output sink for reporter and command output
pub trait UI {
    /// Write text exactly as given, without appending a newline
    fn write(&mut self, text: &str) -> Result<()>;

    /// Output a message to the user, followed by a newline
    fn output(&mut self, message: &str) -> Result<()> {
        self.write(message)?;
        self.write("\n")
    }

    /// Output an error message
    fn error(&mut self, message: &str) -> Result<()>;

    /// Output a warning message
    fn warning(&mut self, message: &str) -> Result<()>;
}

/// Command-line UI implementation
pub struct CliUI {
    stdout: Box<dyn Write>,
    stderr: Box<dyn Write>,
}

impl CliUI {
    /// Creates a new command-line UI instance using stdout and stderr.
    pub fn new() -> Self {
        CliUI {
            stdout: Box::new(io::stdout()),
            stderr: Box::new(io::stderr()),
        }
    }
}

impl Default for CliUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UI for CliUI {
    fn write(&mut self, text: &str) -> Result<()> {
        self.stdout.write_all(text.as_bytes())?;
        self.stdout.flush()?;
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        writeln!(self.stderr, "Error: {}", message)?;
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        writeln!(self.stderr, "Warning: {}", message)?;
        Ok(())
    }
}

/// In-memory sink that keeps everything written to it.
///
/// Errors and warnings are not part of the captured text; they are kept
/// separately so a caller can replay them.
#[derive(Debug, Default)]
pub struct CaptureUI {
    captured: String,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl CaptureUI {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text written so far
    pub fn captured(&self) -> &str {
        &self.captured
    }

    /// Forward captured errors and warnings to `ui`, leaving the text.
    pub fn replay_diagnostics(&mut self, ui: &mut dyn UI) -> Result<()> {
        for message in self.errors.drain(..) {
            ui.error(&message)?;
        }
        for message in self.warnings.drain(..) {
            ui.warning(&message)?;
        }
        Ok(())
    }

    /// Consume the sink, returning the captured text
    pub fn into_captured(self) -> String {
        self.captured
    }
}

impl UI for CaptureUI {
    fn write(&mut self, text: &str) -> Result<()> {
        self.captured.push_str(text);
        Ok(())
    }

    fn error(&mut self, message: &str) -> Result<()> {
        self.errors.push(message.to_string());
        Ok(())
    }

    fn warning(&mut self, message: &str) -> Result<()> {
        self.warnings.push(message.to_string());
        Ok(())
    }
}
