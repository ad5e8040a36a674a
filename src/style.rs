//! Terminal colours for reporter output

use crate::error::{Error, Result};
use console::Style;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// When to emit colour escape codes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colour only if the terminal supports it.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => console::colors_enabled(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(Error::Parse(format!(
                "invalid color mode '{}' (expected auto, always or never)",
                other
            ))),
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorMode::Auto => write!(f, "auto"),
            ColorMode::Always => write!(f, "always"),
            ColorMode::Never => write!(f, "never"),
        }
    }
}

/// [`Style`]s for reporter output.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Header of a table for a run without failures.
    pub ok: Style,
    /// Header of a table for a run with failures.
    pub err: Style,
    /// First line of a skipped test.
    pub skip: Style,
    /// First line of a failed test.
    pub fail: Style,
    /// Whether escape codes are emitted at all.
    pub is_present: bool,
}

impl Styles {
    pub fn new(mode: ColorMode) -> Self {
        Styles {
            ok: Style::new().green().force_styling(true),
            err: Style::new().red().force_styling(true),
            skip: Style::new().black().on_yellow().force_styling(true),
            fail: Style::new().white().on_red().force_styling(true),
            is_present: mode.enabled(),
        }
    }

    /// Styles that never emit escape codes.
    pub fn plain() -> Self {
        Self::new(ColorMode::Never)
    }

    fn apply<'a>(&self, style: &Style, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        let input = input.into();
        if self.is_present {
            style.apply_to(input).to_string().into()
        } else {
            input
        }
    }

    pub fn ok<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.ok, input)
    }

    pub fn err<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.err, input)
    }

    pub fn skip<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.skip, input)
    }

    pub fn fail<'a>(&self, input: impl Into<Cow<'a, str>>) -> Cow<'a, str> {
        self.apply(&self.fail, input)
    }
}

impl Default for Styles {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}
