//! Configuration file (.tapstats.conf) parsing and handling
//!
//! The .tapstats.conf file uses INI format with a [DEFAULT] section holding
//! reporter settings. Every key is optional.

use crate::error::{Error, Result};
use crate::style::ColorMode;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = ".tapstats.conf";

/// Launcher label used when none is configured
pub const DEFAULT_LAUNCHER: &str = "tests";

/// Configuration loaded from .tapstats.conf
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReporterConfig {
    /// Label printed in front of every result line
    pub launcher: String,

    /// When to colour output
    pub color: ColorMode,

    /// Whether failed tests are printed again after the statistics table
    pub reprint_failures: bool,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        ReporterConfig {
            launcher: DEFAULT_LAUNCHER.to_string(),
            color: ColorMode::Auto,
            reprint_failures: true,
        }
    }
}

impl ReporterConfig {
    /// Load configuration from a .tapstats.conf file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {}", CONFIG_FILE, e)))?;

        Self::parse(&contents)
    }

    /// Load `.tapstats.conf` from `dir`, or defaults if there is none
    pub fn discover(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            debug!(path = %path.display(), "no configuration file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_file(&path)
    }

    /// Parse configuration from a string
    pub fn parse(contents: &str) -> Result<Self> {
        let ini: HashMap<String, HashMap<String, String>> = serde_ini::from_str(contents)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", CONFIG_FILE, e)))?;

        let default = ini
            .get("DEFAULT")
            .ok_or_else(|| Error::Config(format!("No [DEFAULT] section in {}", CONFIG_FILE)))?;

        let mut config = ReporterConfig::default();

        if let Some(launcher) = default.get("launcher") {
            let launcher = launcher.trim();
            if launcher.is_empty() {
                return Err(Error::Config("launcher cannot be empty".to_string()));
            }
            config.launcher = launcher.to_string();
        }

        if let Some(color) = default.get("color") {
            config.color = color
                .parse()
                .map_err(|e: Error| Error::Config(e.to_string()))?;
        }

        if let Some(reprint) = default.get("reprint_failures") {
            config.reprint_failures = parse_bool(reprint).ok_or_else(|| {
                Error::Config(format!(
                    "reprint_failures must be true or false, got '{}'",
                    reprint
                ))
            })?;
        }

        Ok(config)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
