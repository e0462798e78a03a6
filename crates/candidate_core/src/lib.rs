//! Core domain logic for candidate intake.
//! Decodes candidate spreadsheets and keeps accepted candidates in memory.

pub mod decode;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use decode::{decode, DecodeError, DecodeResult, REQUIRED_HEADERS};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::candidate::{
    Candidate, CandidateId, CandidateIdentity, CandidateValidationError, DecodedAttributes,
    NewCandidate, Seniority,
};
pub use repo::candidate_repo::{CandidateRepository, InMemoryCandidateRepository};
pub use service::candidate_service::{CandidateService, IntakeError, SpreadsheetUpload};

/// Minimal health-check API for front-end smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
