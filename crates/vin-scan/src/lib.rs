//! VIN Scanner
//!
//! Command-line harness around `vin-validator`: reads text from arguments,
//! files or standard input, extracts VIN candidates, validates each one and
//! prints a categorized report.

pub mod config;
pub mod error;
pub mod input;
pub mod report;

pub use config::{ConfigOverrides, OutputFormat, ScanConfig};
pub use error::ScanError;
pub use input::InputSource;
pub use report::{ReportEntry, ScanReport, Scanner};

use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize logging on stderr.
///
/// `RUST_LOG` wins when verbosity is zero; each `-v` raises the level.
pub fn init_logging(verbosity: u8, json: bool) -> Result<(), ScanError> {
    let filter = match verbosity {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| ScanError::Logging(e.to_string()))
}

/// Scan every source and write the report to `out`
pub fn run<W: Write>(
    config: &ScanConfig,
    sources: &[InputSource],
    out: &mut W,
) -> Result<ScanReport, ScanError> {
    info!(
        "=== VIN Scanner v{} ({:?} extraction) ===",
        env!("CARGO_PKG_VERSION"),
        config.mode
    );

    let scanner = Scanner::new(config);
    let mut report = ScanReport::default();

    for source in sources {
        let text = source.read()?;
        scanner.scan_into(&source.to_string(), &text, &mut report);
    }

    info!(
        sources = sources.len(),
        total = report.total(),
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        "Scan complete"
    );

    report.render(config, out)?;
    Ok(report)
}
