//! Candidate domain model.
//!
//! # Responsibility
//! - Define the decoded spreadsheet attributes and the persisted record shape.
//! - Validate caller-supplied identity fields before they are merged.
//!
//! # Invariants
//! - `id` is generated by the store and never reused for another candidate.
//! - `DecodedAttributes` is never persisted without a `CandidateIdentity`.
//! - `name` and `surname` are non-empty after trimming.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned to a candidate at save time.
pub type CandidateId = Uuid;

/// Seniority level accepted from the spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seniority {
    Junior,
    Senior,
}

impl Seniority {
    /// Stable lowercase wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Junior => "junior",
            Self::Senior => "senior",
        }
    }

    /// Parses an already-normalized (lowercase, trimmed) value.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "junior" => Some(Self::Junior),
            "senior" => Some(Self::Senior),
            _ => None,
        }
    }
}

impl Display for Seniority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attributes read from the first data row of a candidate spreadsheet.
///
/// Transient: produced by one decode call and consumed by the merge step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedAttributes {
    pub seniority: Seniority,
    /// Always finite and `>= 0`. Fractional values are kept as decoded.
    pub years_of_experience: f64,
    pub availability: bool,
}

/// Validation errors for caller-supplied identity fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateValidationError {
    EmptyName,
    EmptySurname,
}

impl Display for CandidateValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name should not be empty"),
            Self::EmptySurname => write!(f, "surname should not be empty"),
        }
    }
}

impl Error for CandidateValidationError {}

/// Identity payload supplied independently of the spreadsheet.
///
/// Deserialization goes through `CandidateIdentity::new`, so blank input is
/// rejected there as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "IdentityPayload")]
pub struct CandidateIdentity {
    name: String,
    surname: String,
}

#[derive(Deserialize)]
struct IdentityPayload {
    name: String,
    surname: String,
}

impl TryFrom<IdentityPayload> for CandidateIdentity {
    type Error = CandidateValidationError;

    fn try_from(value: IdentityPayload) -> Result<Self, Self::Error> {
        Self::new(value.name, value.surname)
    }
}

impl CandidateIdentity {
    /// Creates a validated identity.
    ///
    /// Values are stored as given; only blank input is rejected.
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
    ) -> Result<Self, CandidateValidationError> {
        let name = name.into();
        let surname = surname.into();
        if name.trim().is_empty() {
            return Err(CandidateValidationError::EmptyName);
        }
        if surname.trim().is_empty() {
            return Err(CandidateValidationError::EmptySurname);
        }
        Ok(Self { name, surname })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }
}

/// Candidate payload before the store assigns an id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCandidate {
    pub name: String,
    pub surname: String,
    pub seniority: Seniority,
    pub years: f64,
    pub availability: bool,
}

impl NewCandidate {
    /// Merges validated identity fields with decoded spreadsheet attributes.
    pub fn merge(identity: CandidateIdentity, attributes: DecodedAttributes) -> Self {
        Self {
            name: identity.name,
            surname: identity.surname,
            seniority: attributes.seniority,
            years: attributes.years_of_experience,
            availability: attributes.availability,
        }
    }
}

/// Persisted candidate record.
///
/// Serialized as `{id, name, surname, seniority, years, availability}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub surname: String,
    pub seniority: Seniority,
    pub years: f64,
    pub availability: bool,
}

impl Candidate {
    /// Builds the stored record from a store-assigned id.
    pub fn from_new(id: CandidateId, candidate: NewCandidate) -> Self {
        Self {
            id,
            name: candidate.name,
            surname: candidate.surname,
            seniority: candidate.seniority,
            years: candidate.years,
            availability: candidate.availability,
        }
    }
}
