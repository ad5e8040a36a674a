//! Error types for tapstats

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for tapstats operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for tapstats
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration file error or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The named input file does not exist.
    #[error("Input not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Failed to parse a value supplied by the user.
    #[error("Parse error: {0}")]
    Parse(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Subunit protocol error or invalid subunit stream.
    #[error("Subunit protocol error: {0}")]
    Subunit(String),

    /// Other error with custom message.
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
