//! VIN Scanner - Main Entry Point

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use vin_scan::{init_logging, run, ConfigOverrides, InputSource, OutputFormat, ScanConfig};
use vin_validator::ExtractionMode;

/// Extract VINs from text and check their check digits
#[derive(Parser)]
#[command(name = "vin-scan")]
#[command(version)]
#[command(about = "Extract VINs from text and validate their check digits")]
struct Cli {
    /// Text to scan; standard input is read when no text or file is given
    text: Vec<String>,

    /// Read text from a file (repeatable)
    #[arg(short, long = "file", value_name = "PATH")]
    files: Vec<PathBuf>,

    /// Config file (TOML, JSON or YAML)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Extraction character class
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Reject lowercase or whitespace-padded candidates
    #[arg(long)]
    strict_normalization: bool,

    /// Only list valid VINs
    #[arg(long)]
    hide_invalid: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Strict,
    Permissive,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            mode: self.mode.map(|mode| match mode {
                ModeArg::Strict => ExtractionMode::Strict,
                ModeArg::Permissive => ExtractionMode::Permissive,
            }),
            format: self.format.map(|format| match format {
                FormatArg::Text => OutputFormat::Text,
                FormatArg::Json => OutputFormat::Json,
            }),
            strict_normalization: self.strict_normalization,
            hide_invalid: self.hide_invalid,
        }
    }

    fn sources(&self) -> Vec<InputSource> {
        let mut sources: Vec<InputSource> = self
            .text
            .iter()
            .cloned()
            .map(InputSource::Inline)
            .chain(self.files.iter().cloned().map(InputSource::File))
            .collect();
        if sources.is_empty() {
            sources.push(InputSource::Stdin);
        }
        sources
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.log_json)?;

    let mut config =
        ScanConfig::load(cli.config.as_deref()).context("Failed to load scanner configuration")?;
    cli.overrides().apply(&mut config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(&config, &cli.sources(), &mut out).context("Scan failed")?;

    Ok(())
}
