//! Candidate Normalization

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// How raw input is prepared before structural checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Normalization {
    /// Trim surrounding whitespace and uppercase ASCII letters
    #[default]
    Lenient,
    /// Take input as-is; lowercase or padded input fails validation
    Strict,
}

impl Normalization {
    /// Apply the policy, borrowing when the input needs no change
    pub fn apply<'a>(&self, input: &'a str) -> Cow<'a, str> {
        match self {
            Normalization::Lenient => {
                let trimmed = input.trim();
                if trimmed.bytes().any(|b| b.is_ascii_lowercase()) {
                    Cow::Owned(trimmed.to_ascii_uppercase())
                } else {
                    Cow::Borrowed(trimmed)
                }
            }
            Normalization::Strict => Cow::Borrowed(input),
        }
    }
}

/// Trim and uppercase a candidate.
///
/// Only ASCII letters change case, so the character count never changes.
pub fn normalize(input: &str) -> String {
    Normalization::Lenient.apply(input).into_owned()
}
