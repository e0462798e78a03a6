//! Command-line intake for one candidate spreadsheet.
//!
//! # Responsibility
//! - Stage a copy of the user's spreadsheet the way an upload handler would.
//! - Run the intake service and print the stored candidate as JSON.
//!
//! # Invariants
//! - The user's original file is never deleted; only the staged copy is.
//! - Failures exit non-zero with `error_code` and message on stderr.

use candidate_core::{
    default_log_level, init_logging, CandidateService, InMemoryCandidateRepository,
    SpreadsheetUpload,
};
use clap::Parser;
use log::error;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "candidate-cli", version, about = "Import one candidate from a spreadsheet")]
struct Cli {
    /// Spreadsheet with Seniority, Years of experience and Availability columns
    file: PathBuf,

    /// Candidate first name
    #[arg(long)]
    name: String,

    /// Candidate surname
    #[arg(long)]
    surname: String,

    /// Log level (trace|debug|info|warn|error); defaults by build mode
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long)]
    log_dir: Option<String>,

    /// Directory for the staged upload copy; defaults to the system temp dir
    #[arg(long)]
    staging_dir: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("logging disabled: {err}");
        }
    }

    let upload = match stage_upload(&cli.file, cli.staging_dir.as_deref()) {
        Ok(upload) => upload,
        Err(err) => {
            eprintln!("failed to stage `{}`: {err}", cli.file.display());
            return ExitCode::FAILURE;
        }
    };

    let service = CandidateService::new(InMemoryCandidateRepository::new());
    let candidate = match service.register_from_spreadsheet(&upload, &cli.name, &cli.surname) {
        Ok(candidate) => candidate,
        Err(err) => {
            eprintln!("{}: {err}", err.error_code());
            return ExitCode::FAILURE;
        }
    };

    match serde_json::to_string_pretty(&candidate) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_output module=cli status=error error={}", err);
            eprintln!("failed to render candidate: {err}");
            ExitCode::FAILURE
        }
    }
}

/// Copies `source` into a persisted temp file that the service will delete.
fn stage_upload(source: &Path, staging_dir: Option<&Path>) -> std::io::Result<SpreadsheetUpload> {
    let staging_dir = staging_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(std::env::temp_dir);
    let staged = tempfile::Builder::new()
        .prefix("candidate-upload-")
        .tempfile_in(&staging_dir)?;
    std::fs::copy(source, staged.path())?;
    let staged_path = staged.into_temp_path().keep().map_err(|err| err.error)?;

    let original_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    Ok(SpreadsheetUpload::new(staged_path, original_name))
}

#[cfg(test)]
mod tests {
    use super::stage_upload;

    #[test]
    fn stage_upload_copies_without_touching_source() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("candidate.xlsx");
        std::fs::write(&source, b"workbook bytes").unwrap();

        let upload = stage_upload(&source, Some(dir.path())).unwrap();

        assert_eq!(upload.original_name, "candidate.xlsx");
        assert_ne!(upload.path, source);
        assert_eq!(std::fs::read(&upload.path).unwrap(), b"workbook bytes");
        assert!(source.exists());
    }
}
