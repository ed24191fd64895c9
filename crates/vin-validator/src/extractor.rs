//! VIN Candidate Extraction
//!
//! Finds 17-character VIN-shaped tokens in free text. The text is split into
//! maximal runs of alphanumerics (Unicode letters and numbers, plus `_`), and
//! a run is a candidate only when the whole run is 17 characters of the
//! selected alphabet. Longer runs therefore never yield a partial match.
//! Extraction is lazy and runs in a single linear pass.

use crate::checksum::{is_vin_char, VIN_LENGTH};
use once_cell::sync::Lazy;
use regex::{Matches, Regex};
use serde::{Deserialize, Serialize};
use std::iter::FusedIterator;
use tracing::debug;

/// Maximal alphanumeric runs; anything else (punctuation, whitespace,
/// combining marks) separates tokens
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{Alphabetic}\p{N}_]+").expect("token pattern compiles"));

/// Character class used when scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Only the VIN alphabet; tokens containing I, O or Q are skipped
    #[default]
    Strict,
    /// Any 17 ASCII alphanumerics, left for validation to reject
    Permissive,
}

impl ExtractionMode {
    /// Whether a whole token is VIN-shaped under this mode
    fn accepts(&self, token: &str) -> bool {
        // 17 bytes that are all ASCII means 17 characters
        token.len() == VIN_LENGTH
            && token.bytes().all(|b| match self {
                ExtractionMode::Strict => is_vin_char(b.to_ascii_uppercase() as char),
                ExtractionMode::Permissive => b.is_ascii_alphanumeric(),
            })
    }
}

/// A VIN-shaped token found in text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Candidate {
    /// Uppercased token
    pub vin: String,
    /// Byte offset of the token in the scanned text
    pub start: usize,
    /// Byte offset one past the end of the token
    pub end: usize,
}

/// Candidate extractor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Extractor {
    mode: ExtractionMode,
}

impl Extractor {
    /// Create an extractor for the given mode
    pub fn new(mode: ExtractionMode) -> Self {
        Self { mode }
    }

    /// Character class in use
    pub fn mode(&self) -> ExtractionMode {
        self.mode
    }

    /// Lazily iterate over candidates in order of appearance.
    ///
    /// Duplicates are kept. Calling this again on the same text restarts the
    /// scan and yields the same sequence.
    pub fn candidates<'t>(&self, text: &'t str) -> Candidates<'t> {
        Candidates {
            mode: self.mode,
            tokens: TOKEN_PATTERN.find_iter(text),
        }
    }
}

/// Iterator returned by [`Extractor::candidates`]
#[derive(Debug)]
pub struct Candidates<'t> {
    mode: ExtractionMode,
    tokens: Matches<'static, 't>,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let token = self.tokens.next()?;
            if !self.mode.accepts(token.as_str()) {
                continue;
            }
            let candidate = Candidate {
                vin: token.as_str().to_ascii_uppercase(),
                start: token.start(),
                end: token.end(),
            };
            debug!(vin = %candidate.vin, start = candidate.start, "VIN candidate");
            return Some(candidate);
        }
    }
}

impl FusedIterator for Candidates<'_> {}

/// Strict extraction of uppercased candidate strings
pub fn extract_candidates(text: &str) -> impl Iterator<Item = String> + '_ {
    Extractor::default().candidates(text).map(|c| c.vin)
}
