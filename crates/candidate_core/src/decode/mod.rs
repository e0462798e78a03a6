//! Spreadsheet decoding and validation.
//!
//! # Responsibility
//! - Read the first data row of a candidate spreadsheet into `DecodedAttributes`.
//! - Classify every failure into one `DecodeError` kind.
//! - Delete the source file on every exit path.
//!
//! # Invariants
//! - Decoding is all-or-nothing; no partial attributes are returned.
//! - Cleanup failures are logged and never replace the decode outcome.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod cleanup;
mod spreadsheet;

pub(crate) use cleanup::remove_source;
pub use cleanup::SourceFileGuard;
pub use spreadsheet::{decode, REQUIRED_HEADERS};

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Classified decode failure.
///
/// Every kind is a bad-input outcome for the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// Sheet has no header row or no data row after it.
    EmptyData,
    /// At least one required header could not be resolved.
    MissingColumns { missing: Vec<&'static str> },
    /// Normalized seniority text is neither `junior` nor `senior`.
    InvalidSeniority { value: String },
    /// Years cell is non-numeric, not finite, or negative.
    InvalidYears,
    /// Normalized availability text is outside the accepted truth table.
    InvalidAvailability { value: String },
    /// Workbook could not be opened or read.
    Failed { message: String },
}

impl DecodeError {
    /// Stable machine-readable code for client-facing reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyData => "empty_data",
            Self::MissingColumns { .. } => "missing_columns",
            Self::InvalidSeniority { .. } => "invalid_seniority",
            Self::InvalidYears => "invalid_years",
            Self::InvalidAvailability { .. } => "invalid_availability",
            Self::Failed { .. } => "decode_failed",
        }
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyData => write!(
                f,
                "Excel file must contain at least one row of data after headers."
            ),
            Self::MissingColumns { .. } => write!(
                f,
                "Excel file is missing one or more required columns: \"Seniority\", \"Years of experience\", \"Availability\". Please ensure correct spelling and case."
            ),
            Self::InvalidSeniority { .. } => write!(
                f,
                "Invalid Seniority value in Excel. Must be \"junior\" or \"senior\"."
            ),
            Self::InvalidYears => write!(
                f,
                "Years of experience in Excel must be a non-negative number."
            ),
            Self::InvalidAvailability { .. } => write!(
                f,
                "Invalid Availability value in Excel. Must be \"true\", \"false\", \"yes\", \"no\", \"1\", or \"0\"."
            ),
            Self::Failed { message } => write!(f, "Error processing Excel file: {message}"),
        }
    }
}

impl Error for DecodeError {}

impl From<std::io::Error> for DecodeError {
    fn from(value: std::io::Error) -> Self {
        Self::Failed {
            message: value.to_string(),
        }
    }
}

impl From<calamine::Error> for DecodeError {
    fn from(value: calamine::Error) -> Self {
        Self::Failed {
            message: value.to_string(),
        }
    }
}
