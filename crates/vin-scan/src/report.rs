//! Scan report: extracted candidates partitioned into valid and invalid

use crate::config::{OutputFormat, ScanConfig};
use crate::error::ScanError;
use serde::Serialize;
use std::io::Write;
use tracing::{debug, info};
use vin_validator::{Extractor, VinValidator};

/// One extracted candidate and its verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportEntry {
    /// Normalized candidate text
    pub vin: String,
    /// Input the candidate was found in
    pub source: String,
    /// Byte offset within that input
    pub offset: usize,
    /// Rejection reason for invalid candidates
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Partitioned results of a scan
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub valid: Vec<ReportEntry>,
    pub invalid: Vec<ReportEntry>,
}

impl ScanReport {
    /// Total number of candidates
    pub fn total(&self) -> usize {
        self.valid.len() + self.invalid.len()
    }

    /// Write the report in the configured format
    pub fn render<W: Write>(&self, config: &ScanConfig, out: &mut W) -> Result<(), ScanError> {
        match config.format {
            OutputFormat::Text => self.render_text(config.show_invalid, out),
            OutputFormat::Json => self.render_json(config.show_invalid, out),
        }
    }

    fn render_text<W: Write>(&self, show_invalid: bool, out: &mut W) -> Result<(), ScanError> {
        writeln!(
            out,
            "Extracted VINs: {} ({} valid, {} invalid)",
            self.total(),
            self.valid.len(),
            self.invalid.len()
        )?;
        for entry in &self.valid {
            writeln!(out, "{} - Valid", entry.vin)?;
        }
        if show_invalid {
            for entry in &self.invalid {
                match &entry.reason {
                    Some(reason) => writeln!(out, "{} - Invalid ({})", entry.vin, reason)?,
                    None => writeln!(out, "{} - Invalid", entry.vin)?,
                }
            }
        }
        Ok(())
    }

    fn render_json<W: Write>(&self, show_invalid: bool, out: &mut W) -> Result<(), ScanError> {
        #[derive(Serialize)]
        struct JsonReport<'a> {
            total: usize,
            valid_count: usize,
            invalid_count: usize,
            valid: &'a [ReportEntry],
            #[serde(skip_serializing_if = "Option::is_none")]
            invalid: Option<&'a [ReportEntry]>,
        }

        let report = JsonReport {
            total: self.total(),
            valid_count: self.valid.len(),
            invalid_count: self.invalid.len(),
            valid: &self.valid,
            invalid: show_invalid.then_some(self.invalid.as_slice()),
        };
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Extracts candidates and sorts them by verdict
#[derive(Debug, Clone)]
pub struct Scanner {
    extractor: Extractor,
    validator: VinValidator,
}

impl Scanner {
    /// Create a scanner from config
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            extractor: Extractor::new(config.mode),
            validator: VinValidator::new(config.validation()),
        }
    }

    /// Scan one input, appending its candidates to `report`
    pub fn scan_into(&self, source: &str, text: &str, report: &mut ScanReport) {
        let before = report.total();

        for candidate in self.extractor.candidates(text) {
            let mut entry = ReportEntry {
                vin: candidate.vin,
                source: source.to_string(),
                offset: candidate.start,
                reason: None,
            };
            match self.validator.validate(&entry.vin) {
                Ok(_) => report.valid.push(entry),
                Err(err) => {
                    entry.reason = Some(err.to_string());
                    report.invalid.push(entry);
                }
            }
        }

        debug!(source, candidates = report.total() - before, "Scanned input");
    }

    /// Scan a single text
    pub fn scan(&self, source: &str, text: &str) -> ScanReport {
        let mut report = ScanReport::default();
        self.scan_into(source, text, &mut report);
        info!(
            total = report.total(),
            valid = report.valid.len(),
            invalid = report.invalid.len(),
            "Scan complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Here are some sample VINs:\n\
        1HGCM82633A123456, WDBBA48D7KA093694, 1HGCM82633A004352 \
        and incorrect ones like ABC1234INVALID5678.";

    #[test]
    fn test_partition() {
        let scanner = Scanner::new(&ScanConfig::default());
        let report = scanner.scan("sample", SAMPLE);

        assert_eq!(report.total(), 3);
        assert_eq!(report.valid.len(), 1);
        assert_eq!(report.valid[0].vin, "1HGCM82633A004352");
        assert_eq!(report.invalid[0].vin, "1HGCM82633A123456");
        assert_eq!(report.invalid[1].vin, "WDBBA48D7KA093694");
        assert!(report.invalid[0]
            .reason
            .as_deref()
            .unwrap()
            .contains("Check digit mismatch"));
    }

    #[test]
    fn test_offsets_are_recorded() {
        let scanner = Scanner::new(&ScanConfig::default());
        let report = scanner.scan("inline", "vin=1HGCM82633A004352");
        assert_eq!(report.valid[0].offset, 4);
        assert_eq!(report.valid[0].source, "inline");
    }

    #[test]
    fn test_permissive_mode_reports_excluded_letters() {
        let text = "1HGCM82633AO04352 1HGCM82633A004352";
        let strict = Scanner::new(&ScanConfig::default()).scan("t", text);
        let permissive = Scanner::new(&ScanConfig::permissive()).scan("t", text);

        assert_eq!(strict.total(), 1);
        assert_eq!(permissive.total(), 2);
        assert_eq!(permissive.invalid[0].vin, "1HGCM82633AO04352");
    }

    #[test]
    fn test_text_rendering() {
        let scanner = Scanner::new(&ScanConfig::default());
        let report = scanner.scan("t", "1HGCM82633A004352 1HGCM82633A123455");

        let mut out = Vec::new();
        report.render(&ScanConfig::default(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Extracted VINs: 2 (1 valid, 1 invalid)\n"));
        assert!(text.contains("1HGCM82633A004352 - Valid\n"));
        assert!(text.contains("1HGCM82633A123455 - Invalid (Check digit mismatch"));
    }

    #[test]
    fn test_hidden_invalid() {
        let config = ScanConfig {
            show_invalid: false,
            ..Default::default()
        };
        let report = Scanner::new(&config).scan("t", "1HGCM82633A123455");

        let mut out = Vec::new();
        report.render(&config, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Extracted VINs: 1 (0 valid, 1 invalid)\n");
    }

    #[test]
    fn test_json_rendering() {
        let config = ScanConfig {
            format: OutputFormat::Json,
            ..Default::default()
        };
        let report = Scanner::new(&config).scan("t", "JH4TB2H26CC000000 / JH4TB2H27CC000000");

        let mut out = Vec::new();
        report.render(&config, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(json["total"], 2);
        assert_eq!(json["valid_count"], 1);
        assert_eq!(json["valid"][0]["vin"], "JH4TB2H26CC000000");
        assert_eq!(json["invalid"][0]["vin"], "JH4TB2H27CC000000");
        assert!(json["valid"][0].get("reason").is_none());
    }
}
