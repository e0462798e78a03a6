//! Candidate intake use-case service.
//!
//! # Responsibility
//! - Accept one uploaded spreadsheet plus identity fields per call.
//! - Reject unsupported uploads before decoding.
//! - Merge decoded attributes with identity and persist the result.
//!
//! # Invariants
//! - The staged upload is gone when any service call returns.
//! - Every failure is a bad-request classification for the caller.
//! - Service layer remains storage-agnostic.

use crate::decode::{decode, remove_source, DecodeError};
use crate::model::candidate::{
    Candidate, CandidateId, CandidateIdentity, CandidateValidationError, NewCandidate,
};
use crate::repo::candidate_repo::CandidateRepository;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

static EXCEL_FILE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(xlsx|xls)$").expect("valid excel file name regex"));

/// Service error for candidate intake.
#[derive(Debug, Clone, PartialEq)]
pub enum IntakeError {
    /// Original file name does not end in `.xlsx` or `.xls`.
    UnsupportedFileType { file_name: String },
    /// Name or surname is blank.
    InvalidIdentity(CandidateValidationError),
    /// Spreadsheet content was rejected.
    Decode(DecodeError),
}

impl IntakeError {
    /// Stable machine-readable code for client-facing reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFileType { .. } => "unsupported_file_type",
            Self::InvalidIdentity(_) => "invalid_identity",
            Self::Decode(err) => err.error_code(),
        }
    }
}

impl Display for IntakeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedFileType { .. } => {
                write!(f, "Only Excel files (.xlsx, .xls) are allowed.")
            }
            Self::InvalidIdentity(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "{err}"),
        }
    }
}

impl Error for IntakeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::UnsupportedFileType { .. } => None,
            Self::InvalidIdentity(err) => Some(err),
            Self::Decode(err) => Some(err),
        }
    }
}

impl From<CandidateValidationError> for IntakeError {
    fn from(value: CandidateValidationError) -> Self {
        Self::InvalidIdentity(value)
    }
}

impl From<DecodeError> for IntakeError {
    fn from(value: DecodeError) -> Self {
        Self::Decode(value)
    }
}

/// Spreadsheet staged by the transport layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpreadsheetUpload {
    /// Staged file location. Deleted by the service.
    pub path: PathBuf,
    /// File name as sent by the client; only its extension is checked.
    pub original_name: String,
}

impl SpreadsheetUpload {
    pub fn new(path: impl Into<PathBuf>, original_name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            original_name: original_name.into(),
        }
    }

    /// Returns whether the client file name carries an Excel extension.
    pub fn has_excel_extension(&self) -> bool {
        EXCEL_FILE_NAME_RE.is_match(&self.original_name)
    }
}

/// Candidate intake facade over repository implementations.
pub struct CandidateService<R: CandidateRepository> {
    repo: R,
}

impl<R: CandidateRepository> CandidateService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Decodes one uploaded spreadsheet and stores the merged candidate.
    ///
    /// # Contract
    /// - Upload type and identity are checked before the workbook is opened.
    /// - The staged file is deleted on every path.
    /// - Returns the stored record including its generated id.
    pub fn register_from_spreadsheet(
        &self,
        upload: &SpreadsheetUpload,
        name: &str,
        surname: &str,
    ) -> Result<Candidate, IntakeError> {
        let result = self.register(upload, name, surname);
        match &result {
            Ok(candidate) => info!(
                "event=candidate_register module=service status=ok candidate_id={}",
                candidate.id
            ),
            Err(err) => warn!(
                "event=candidate_register module=service status=error error_code={}",
                err.error_code()
            ),
        }
        result
    }

    /// Lists every stored candidate in insertion order.
    pub fn list_candidates(&self) -> Vec<Candidate> {
        self.repo.find_all()
    }

    /// Gets one candidate by id.
    pub fn get_candidate(&self, id: CandidateId) -> Option<Candidate> {
        self.repo.find_by_id(id)
    }

    fn register(
        &self,
        upload: &SpreadsheetUpload,
        name: &str,
        surname: &str,
    ) -> Result<Candidate, IntakeError> {
        let identity = {
            let cleanup_on_reject = RejectGuard::new(upload);
            if !upload.has_excel_extension() {
                return Err(IntakeError::UnsupportedFileType {
                    file_name: upload.original_name.clone(),
                });
            }
            let identity = CandidateIdentity::new(name, surname)?;
            cleanup_on_reject.disarm();
            identity
        };

        let attributes = decode(&upload.path)?;
        Ok(self.repo.save(NewCandidate::merge(identity, attributes)))
    }
}

/// Deletes the upload when a pre-decode check fails.
struct RejectGuard<'a> {
    upload: &'a SpreadsheetUpload,
    armed: bool,
}

impl<'a> RejectGuard<'a> {
    fn new(upload: &'a SpreadsheetUpload) -> Self {
        Self {
            upload,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
    }
}

impl Drop for RejectGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            remove_source(&self.upload.path);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SpreadsheetUpload;

    #[test]
    fn excel_extension_check_matches_suffix_only() {
        assert!(SpreadsheetUpload::new("/tmp/a", "cv.xlsx").has_excel_extension());
        assert!(SpreadsheetUpload::new("/tmp/a", "cv.final.xls").has_excel_extension());
        assert!(!SpreadsheetUpload::new("/tmp/a", "cv.xlsx.pdf").has_excel_extension());
        assert!(!SpreadsheetUpload::new("/tmp/a", "cv.csv").has_excel_extension());
        assert!(!SpreadsheetUpload::new("/tmp/a", "CV.XLSX").has_excel_extension());
    }
}
