//! Candidate spreadsheet decoder.
//!
//! # Responsibility
//! - Open the first sheet of a workbook (format detected from content) and
//!   read it as rows of cells.
//! - Resolve required columns by case-insensitive substring match.
//! - Coerce the first data row into `DecodedAttributes`.
//!
//! # Invariants
//! - Row 0 is the header row; row 1 is the only data row consulted.
//! - Header matching is substring containment, never exact match.
//! - Fields are validated in order: seniority, years, availability.
//! - Years accept numeric cells and numeric text only; blank text, boolean
//!   cells and non-finite values (`Infinity`, `NaN`) are rejected rather
//!   than coerced to a number.

use super::cleanup::SourceFileGuard;
use super::{DecodeError, DecodeResult};
use crate::model::candidate::{DecodedAttributes, Seniority};
use calamine::{open_workbook_auto_from_rs, Data, Reader};
use log::{info, warn};
use std::io::Cursor;
use std::path::Path;
use std::time::Instant;

/// Logical column names, in the order they are resolved.
pub const REQUIRED_HEADERS: [&str; 3] = ["Seniority", "Years of experience", "Availability"];

const TRUTHY: &[&str] = &["true", "yes", "1"];
const FALSY: &[&str] = &["false", "no", "0"];

/// Decodes a candidate spreadsheet and deletes it.
///
/// # Side effects
/// - Removes the file at `path` before returning, whatever the outcome.
/// - Emits `candidate_decode` logging events with duration and status.
///
/// # Errors
/// - `EmptyData` when the sheet has fewer than two rows.
/// - `MissingColumns` when any required header is unresolved.
/// - `InvalidSeniority`, `InvalidYears`, `InvalidAvailability` for bad cells.
/// - `Failed` when the workbook cannot be opened or read.
pub fn decode(path: impl AsRef<Path>) -> DecodeResult<DecodedAttributes> {
    let guard = SourceFileGuard::new(path);
    let started_at = Instant::now();
    info!("event=candidate_decode module=decode status=start");

    let result = read_first_sheet(guard.path());
    match &result {
        Ok(_) => info!(
            "event=candidate_decode module=decode status=ok duration_ms={}",
            started_at.elapsed().as_millis()
        ),
        Err(err) => warn!(
            "event=candidate_decode module=decode status=error duration_ms={} error_code={}",
            started_at.elapsed().as_millis(),
            err.error_code()
        ),
    }
    result
}

fn read_first_sheet(path: &Path) -> DecodeResult<DecodedAttributes> {
    // Staged uploads carry no extension, so the format is sniffed from content.
    let bytes = std::fs::read(path)?;
    let mut workbook = open_workbook_auto_from_rs(Cursor::new(bytes))?;
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| DecodeError::Failed {
            message: "workbook has no sheets".to_string(),
        })?;
    let range = workbook.worksheet_range(&sheet_name)?;
    let rows: Vec<&[Data]> = range.rows().collect();
    decode_rows(&rows)
}

fn decode_rows(rows: &[&[Data]]) -> DecodeResult<DecodedAttributes> {
    if rows.len() < 2 {
        return Err(DecodeError::EmptyData);
    }

    let headers = rows[0];
    let data_row = rows[1];

    let indices = REQUIRED_HEADERS.map(|target| resolve_column(target, headers));
    let missing: Vec<&'static str> = REQUIRED_HEADERS
        .iter()
        .zip(indices.iter())
        .filter(|(_, index)| index.is_none())
        .map(|(target, _)| *target)
        .collect();
    let [Some(seniority_col), Some(years_col), Some(availability_col)] = indices else {
        return Err(DecodeError::MissingColumns { missing });
    };

    let seniority = parse_seniority(data_row.get(seniority_col))?;
    let years_of_experience = parse_years(data_row.get(years_col))?;
    let availability = parse_availability(data_row.get(availability_col))?;

    Ok(DecodedAttributes {
        seniority,
        years_of_experience,
        availability,
    })
}

fn resolve_column(target: &str, headers: &[Data]) -> Option<usize> {
    let needle = target.to_lowercase();
    headers
        .iter()
        .position(|cell| cell_text(Some(cell)).to_lowercase().contains(&needle))
}

fn parse_seniority(cell: Option<&Data>) -> DecodeResult<Seniority> {
    let value = normalized_text(cell);
    Seniority::parse(&value).ok_or(DecodeError::InvalidSeniority { value })
}

fn parse_years(cell: Option<&Data>) -> DecodeResult<f64> {
    match cell_number(cell) {
        // Adding zero folds `-0.0` into `0.0`.
        Some(years) if years.is_finite() && years >= 0.0 => Ok(years + 0.0),
        _ => Err(DecodeError::InvalidYears),
    }
}

fn parse_availability(cell: Option<&Data>) -> DecodeResult<bool> {
    let value = normalized_text(cell);
    if TRUTHY.contains(&value.as_str()) {
        Ok(true)
    } else if FALSY.contains(&value.as_str()) {
        Ok(false)
    } else {
        Err(DecodeError::InvalidAvailability { value })
    }
}

fn normalized_text(cell: Option<&Data>) -> String {
    cell_text(cell).to_lowercase().trim().to_string()
}

fn cell_text(cell: Option<&Data>) -> String {
    match cell {
        None | Some(Data::Empty) => String::new(),
        Some(Data::String(s)) => s.clone(),
        Some(Data::Int(i)) => i.to_string(),
        Some(Data::Float(f)) => f.to_string(),
        Some(Data::Bool(b)) => b.to_string(),
        Some(other) => other.to_string(),
    }
}

fn cell_number(cell: Option<&Data>) -> Option<f64> {
    match cell? {
        Data::Int(i) => Some(*i as f64),
        Data::Float(f) => Some(*f),
        Data::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return None;
            }
            trimmed.parse::<f64>().ok()
        }
        _ => None,
    }
}
