//! VIN Extraction and Validation
//!
//! Finds VIN-shaped tokens in free text and checks candidates against the
//! standard structure and mod-11 check digit. Both halves are pure and
//! independent: the validator works on any string, extracted or not.

pub mod checksum;
mod error;
mod extractor;
mod normalizer;
mod validator;
mod vin;

pub use error::VinError;
pub use extractor::{extract_candidates, Candidate, Candidates, ExtractionMode, Extractor};
pub use normalizer::{normalize, Normalization};
pub use validator::{
    is_valid_vin, ValidationConfig, ValidationObserver, ValidationOutcome, VinValidator,
};
pub use vin::Vin;
