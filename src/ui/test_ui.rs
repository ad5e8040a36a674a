//! Test utilities for UI testing

use crate::error::{Error, Result};
use crate::ui::UI;

/// A UI implementation for testing that captures output
pub struct TestUI {
    pub written: String,
    pub errors: Vec<String>,
    /// When set, every `write` fails with this message
    pub fail_writes: Option<String>,
}

impl TestUI {
    pub fn new() -> Self {
        TestUI {
            written: String::new(),
            errors: Vec::new(),
            fail_writes: None,
        }
    }

    /// A sink whose writes always fail
    pub fn failing(message: &str) -> Self {
        TestUI {
            fail_writes: Some(message.to_string()),
            ..Self::new()
        }
    }

    /// Written text split into lines
    pub fn lines(&self) -> Vec<&str> {
        self.written.lines().collect()
    }
}

impl Default for TestUI {
    fn default() -> Self {
        Self::new()
    }
}

impl UI for TestUI {
    fn write(&mut self, text: &str) -> Result<()> {
        if let Some(ref message) = self.fail_writes {
            return Err(Error::Other(message.clone()));
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_test_ui_output() {
        let mut ui = TestUI::new();
        ui.output("test message").unwrap();
        assert_eq!(ui.lines(), vec!["test message"]);
    }

    #[test]
    fn test_test_ui_warning() {
        let mut ui = TestUI::new();
        ui.warning("warning message").unwrap();
        assert_eq!(ui.errors.len(), 1);
        assert_eq!(ui.errors[0], "Warning: warning message");
    }

    #[test]
    fn test_test_ui_failing_writes() {
        let mut ui = TestUI::failing("disk full");
        let err = ui.write("x").unwrap_err();
        assert_eq!(err.to_string(), "disk full");
        assert!(ui.written.is_empty());
    }
}
