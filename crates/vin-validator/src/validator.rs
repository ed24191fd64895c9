//! VIN Validator
//!
//! Structural gate (length and alphabet) followed by the check digit test.
//! Every decision is emitted as a `tracing` event and, when one is attached,
//! handed to a [`ValidationObserver`].

use crate::checksum::{check_digit_for, transliterate, CHECK_DIGIT_INDEX, VIN_LENGTH, WEIGHTS};
use crate::error::VinError;
use crate::normalizer::Normalization;
use crate::vin::Vin;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Input normalization policy
    pub normalization: Normalization,
}

impl ValidationConfig {
    /// Reject anything that is not already trimmed and uppercase
    pub fn strict() -> Self {
        Self {
            normalization: Normalization::Strict,
        }
    }
}

/// A single validation decision
#[derive(Debug, Clone, Copy)]
pub struct ValidationOutcome<'a> {
    /// Candidate after normalization
    pub candidate: &'a str,
    /// Rejection reason, `None` when valid
    pub error: Option<&'a VinError>,
}

impl ValidationOutcome<'_> {
    /// Whether the candidate passed
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

/// Hook invoked once per validation decision
pub trait ValidationObserver: Send + Sync {
    fn on_decision(&self, outcome: &ValidationOutcome<'_>);
}

impl<F> ValidationObserver for F
where
    F: Fn(&ValidationOutcome<'_>) + Send + Sync,
{
    fn on_decision(&self, outcome: &ValidationOutcome<'_>) {
        self(outcome)
    }
}

/// VIN validator
#[derive(Clone, Default)]
pub struct VinValidator {
    config: ValidationConfig,
    observer: Option<Arc<dyn ValidationObserver>>,
}

impl VinValidator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            observer: None,
        }
    }

    /// Attach an observer that sees every decision
    pub fn with_observer(mut self, observer: impl ValidationObserver + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Active configuration
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate a candidate, explaining any rejection
    pub fn validate(&self, candidate: &str) -> Result<Vin, VinError> {
        let normalized = self.config.normalization.apply(candidate);
        let result = check(&normalized);
        self.record(&normalized, result.as_ref().err());
        result.map(|()| Vin::new_unchecked(normalized.into_owned()))
    }

    /// Whether the candidate is a valid VIN
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }

    fn record(&self, candidate: &str, error: Option<&VinError>) {
        debug!(
            target: "vin_validator",
            vin = %candidate,
            valid = error.is_none(),
            reason = error.map_or("ok", VinError::kind),
            "VIN validation decision"
        );

        if let Some(observer) = &self.observer {
            observer.on_decision(&ValidationOutcome { candidate, error });
        }
    }
}

impl fmt::Debug for VinValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VinValidator")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

/// Structural and check digit test on an already normalized candidate
fn check(vin: &str) -> Result<(), VinError> {
    let length = vin.chars().count();
    if length != VIN_LENGTH {
        return Err(VinError::InvalidLength { actual: length });
    }

    // Weight at the check digit position is zero, so it drops out of the sum
    let mut sum = 0u32;
    for (position, character) in vin.chars().enumerate() {
        let value = transliterate(character).ok_or(VinError::InvalidCharacter {
            character,
            position,
        })?;
        sum += value * WEIGHTS[position];
    }

    // Every character is ASCII past this point
    let expected = check_digit_for(sum % 11);
    let actual = vin.as_bytes()[CHECK_DIGIT_INDEX] as char;

    if expected != actual {
        return Err(VinError::ChecksumMismatch { expected, actual });
    }
    Ok(())
}

/// Validate with the default (lenient) configuration
pub fn is_valid_vin(candidate: &str) -> bool {
    VinValidator::default().is_valid(candidate)
}
