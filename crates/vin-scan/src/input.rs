//! Input sources for a scan

use crate::error::ScanError;
use std::fmt;
use std::io::Read;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Where a piece of text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line
    Inline(String),
    /// A file on disk
    File(PathBuf),
    /// Standard input
    Stdin,
}

impl InputSource {
    /// Read the full text of this source
    pub fn read(&self) -> Result<String, ScanError> {
        match self {
            InputSource::Inline(text) => Ok(text.clone()),
            InputSource::File(path) => {
                debug!(path = %path.display(), "Reading input file");
                let bytes = std::fs::read(path).map_err(|source| {
                    warn!(path = %path.display(), error = %source, "Unreadable input file");
                    ScanError::Input {
                        path: path.clone(),
                        source,
                    }
                })?;
                // VINs are ASCII; stray invalid bytes must not abort the scan
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
            InputSource::Stdin => {
                let mut bytes = Vec::new();
                std::io::stdin()
                    .lock()
                    .read_to_end(&mut bytes)
                    .map_err(ScanError::Stdin)?;
                Ok(String::from_utf8_lossy(&bytes).into_owned())
            }
        }
    }
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Inline(_) => f.write_str("<argument>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
            InputSource::Stdin => f.write_str("<stdin>"),
        }
    }
}
