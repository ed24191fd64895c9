//! Scanner configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! config file, then `VIN_SCAN_*` environment variables. Command-line flags
//! are applied on top by the binary.

use crate::error::ScanError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;
use vin_validator::{ExtractionMode, Normalization, ValidationConfig};

/// Environment variable prefix (`VIN_SCAN_MODE`, `VIN_SCAN_FORMAT`, ...)
pub const ENV_PREFIX: &str = "VIN_SCAN";

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per VIN
    #[default]
    Text,
    /// Single JSON document
    Json,
}

/// Scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Extraction character class
    pub mode: ExtractionMode,

    /// Candidate normalization before validation
    pub normalization: Normalization,

    /// Report format
    pub format: OutputFormat,

    /// List rejected candidates in the report
    pub show_invalid: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mode: ExtractionMode::Strict,
            normalization: Normalization::Lenient,
            format: OutputFormat::Text,
            show_invalid: true,
        }
    }
}

impl ScanConfig {
    /// Strict extraction and strict normalization
    pub fn strict() -> Self {
        Self {
            normalization: Normalization::Strict,
            ..Default::default()
        }
    }

    /// Permissive extraction; rejects are left to the validator
    pub fn permissive() -> Self {
        Self {
            mode: ExtractionMode::Permissive,
            ..Default::default()
        }
    }

    /// Load defaults, an optional file, then the environment
    pub fn load(path: Option<&Path>) -> Result<Self, ScanError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("mode", mode_key(defaults.mode))?
            .set_default("normalization", normalization_key(defaults.normalization))?
            .set_default("format", format_key(defaults.format))?
            .set_default("show_invalid", defaults.show_invalid)?;

        if let Some(path) = path {
            debug!(path = %path.display(), "Loading scanner config file");
            builder = builder.add_source(File::from(path).required(true));
        }

        let config = builder
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validator settings derived from this config
    pub fn validation(&self) -> ValidationConfig {
        ValidationConfig {
            normalization: self.normalization,
        }
    }
}

/// Command-line settings applied on top of a loaded [`ScanConfig`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub mode: Option<ExtractionMode>,
    pub format: Option<OutputFormat>,
    /// Force strict normalization
    pub strict_normalization: bool,
    /// Force `show_invalid = false`
    pub hide_invalid: bool,
}

impl ConfigOverrides {
    /// Overwrite only the settings that were given
    pub fn apply(&self, config: &mut ScanConfig) {
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.strict_normalization {
            config.normalization = Normalization::Strict;
        }
        if self.hide_invalid {
            config.show_invalid = false;
        }
    }
}

fn mode_key(mode: ExtractionMode) -> &'static str {
    match mode {
        ExtractionMode::Strict => "strict",
        ExtractionMode::Permissive => "permissive",
    }
}

fn normalization_key(normalization: Normalization) -> &'static str {
    match normalization {
        Normalization::Lenient => "lenient",
        Normalization::Strict => "strict",
    }
}

fn format_key(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "json",
    }
}
