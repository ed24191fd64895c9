//! Validated VIN Type

use crate::checksum::CHECK_DIGIT_INDEX;
use crate::error::VinError;
use crate::validator::VinValidator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A normalized, checksum-valid Vehicle Identification Number
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vin(String);

impl Vin {
    /// Wrap an already validated, normalized string
    pub(crate) fn new_unchecked(vin: String) -> Self {
        Self(vin)
    }

    /// The 17 normalized characters
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The check digit (`0`-`9` or `X`)
    pub fn check_digit(&self) -> char {
        // Validated VINs are pure ASCII
        self.0.as_bytes()[CHECK_DIGIT_INDEX] as char
    }

    /// Give up the wrapper, keeping the normalized string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Vin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Vin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Vin {
    type Err = VinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        VinValidator::default().validate(s)
    }
}

impl TryFrom<String> for Vin {
    type Error = VinError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Vin> for String {
    fn from(vin: Vin) -> Self {
        vin.0
    }
}
