//! Utility functions for command implementation

use crate::config::ReporterConfig;
use crate::error::{Error, Result};
use std::cell::RefCell;
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

/// Directory a command works in (current directory if None)
pub fn base_dir(base_path: Option<&str>) -> &Path {
    base_path.map(Path::new).unwrap_or_else(|| Path::new("."))
}

/// Load `.tapstats.conf` from the given directory, falling back to defaults
pub fn load_config(base_path: Option<&str>) -> Result<ReporterConfig> {
    ReporterConfig::discover(base_dir(base_path))
}

/// Open the stream a command reads results from.
///
/// A reader supplied up front wins; otherwise the named file, or stdin.
pub fn open_input(
    path: Option<&str>,
    supplied: &RefCell<Option<Box<dyn Read>>>,
) -> Result<Box<dyn Read>> {
    if let Some(reader) = supplied.borrow_mut().take() {
        return Ok(reader);
    }

    match path {
        Some(path) => {
            let path = Path::new(path);
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => Error::InputNotFound(path.to_path_buf()),
                _ => Error::Io(e),
            })?;
            Ok(Box::new(io::BufReader::new(file)))
        }
        None => Ok(Box::new(io::stdin())),
    }
}
