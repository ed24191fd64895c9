//! VIN Validation Error Types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reasons a candidate string is not a valid VIN
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum VinError {
    /// Normalized candidate is not 17 characters long
    #[error("Invalid length: expected 17 characters, got {actual}")]
    InvalidLength { actual: usize },

    /// Character outside the VIN alphabet (includes I, O and Q)
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// Check digit mismatch
    #[error("Check digit mismatch: expected {expected}, got {actual}")]
    ChecksumMismatch { expected: char, actual: char },
}

impl VinError {
    /// Short machine-friendly label, used as a structured log field
    pub fn kind(&self) -> &'static str {
        match self {
            VinError::InvalidLength { .. } => "invalid_length",
            VinError::InvalidCharacter { .. } => "invalid_character",
            VinError::ChecksumMismatch { .. } => "checksum_mismatch",
        }
    }
}
