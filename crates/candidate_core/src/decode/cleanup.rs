//! Scoped deletion of uploaded source files.

use log::{debug, warn};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Result of one deletion attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CleanupOutcome {
    Removed,
    AlreadyGone,
    Failed,
}

/// Deletes `path`, logging instead of returning any failure.
pub(crate) fn remove_source(path: &Path) -> CleanupOutcome {
    match std::fs::remove_file(path) {
        Ok(()) => {
            debug!("event=source_cleanup module=decode status=ok");
            CleanupOutcome::Removed
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("event=source_cleanup module=decode status=skipped reason=not_found");
            CleanupOutcome::AlreadyGone
        }
        Err(err) => {
            warn!(
                "event=source_cleanup module=decode status=error error_code=source_delete_failed error={}",
                err
            );
            CleanupOutcome::Failed
        }
    }
}

/// Deletes the guarded file when dropped.
///
/// Create it before touching the file so every return path, including `?`
/// early exits, runs the deletion exactly once.
#[derive(Debug)]
pub struct SourceFileGuard {
    path: PathBuf,
}

impl SourceFileGuard {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SourceFileGuard {
    fn drop(&mut self) {
        remove_source(&self.path);
    }
}

#[cfg(test)]
mod tests {
    use super::{remove_source, CleanupOutcome, SourceFileGuard};

    #[test]
    fn drop_removes_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.xlsx");
        std::fs::write(&path, b"payload").unwrap();

        {
            let guard = SourceFileGuard::new(&path);
            assert_eq!(guard.path(), path.as_path());
            assert!(path.exists());
        }

        assert!(!path.exists());
    }

    #[test]
    fn drop_tolerates_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("never-created.xlsx");

        drop(SourceFileGuard::new(&path));

        assert!(!path.exists());
    }

    #[test]
    fn remove_source_reports_each_outcome() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.xlsx");
        std::fs::write(&path, b"payload").unwrap();

        assert_eq!(remove_source(&path), CleanupOutcome::Removed);
        assert_eq!(remove_source(&path), CleanupOutcome::AlreadyGone);
    }

    #[test]
    fn remove_source_failure_is_swallowed() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("not-a-file");
        std::fs::create_dir(&nested).unwrap();

        assert_eq!(remove_source(&nested), CleanupOutcome::Failed);
        assert!(nested.is_dir());

        drop(SourceFileGuard::new(&nested));
        assert!(nested.is_dir());
    }
}
