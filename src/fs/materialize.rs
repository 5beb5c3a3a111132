//! Per-file-class write policies.
//!
//! The scaffold has two kinds of files: documents the generator owns and
//! always rewrites (day READMEs, auxiliary placeholders), and note files it
//! seeds exactly once and never touches again. Both go through one generic
//! operation parameterized by a [`WritePolicy`] instead of duplicated
//! branching at each call site.

use crate::error::{Result, TrailheadError};
use crate::fs::atomic_write_file;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

/// How `materialize_file` treats an existing file at the target path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace whatever is there. Used for generated documents.
    Overwrite,
    /// Create only if absent; existing content is never modified.
    /// Used for note files so hand-written content survives re-runs.
    CreateIfAbsent,
}

/// Outcome of a single `materialize_file` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The file was created or replaced.
    Written,
    /// The file already existed and `CreateIfAbsent` left it untouched.
    Skipped,
}

/// Write `content` to `path` according to `policy`.
///
/// `Overwrite` goes through the atomic temp-file path. `CreateIfAbsent` uses
/// `create_new`, so the existence check and the write are a single operation
/// and a concurrent writer cannot clobber an existing file between them.
pub fn materialize_file<P: AsRef<Path>>(
    path: P,
    content: &str,
    policy: WritePolicy,
) -> Result<WriteOutcome> {
    let path = path.as_ref();

    match policy {
        WritePolicy::Overwrite => {
            atomic_write_file(path, content)?;
            Ok(WriteOutcome::Written)
        }
        WritePolicy::CreateIfAbsent => {
            let file = OpenOptions::new().write(true).create_new(true).open(path);

            match file {
                Ok(mut file) => {
                    file.write_all(content.as_bytes()).map_err(|e| {
                        TrailheadError::FsError(format!(
                            "failed to write '{}': {}",
                            path.display(),
                            e
                        ))
                    })?;
                    Ok(WriteOutcome::Written)
                }
                Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(WriteOutcome::Skipped),
                Err(e) => Err(TrailheadError::FsError(format!(
                    "failed to create '{}': {}",
                    path.display(),
                    e
                ))),
            }
        }
    }
}

/// Create a directory and any missing parents. No error if already present.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| {
        TrailheadError::FsError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn overwrite_creates_new_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");

        let outcome = materialize_file(&path, "# Doc\n", WritePolicy::Overwrite).unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "# Doc\n");
    }

    #[test]
    fn overwrite_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("README.md");
        fs::write(&path, "stale").unwrap();

        let outcome = materialize_file(&path, "fresh", WritePolicy::Overwrite).unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "fresh");
    }

    #[test]
    fn create_if_absent_writes_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("day-01.md");

        let outcome =
            materialize_file(&path, "<!-- note -->\n", WritePolicy::CreateIfAbsent).unwrap();

        assert_eq!(outcome, WriteOutcome::Written);
        assert_eq!(fs::read_to_string(&path).unwrap(), "<!-- note -->\n");
    }

    #[test]
    fn create_if_absent_preserves_existing_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("day-05.md");
        fs::write(&path, "my notes").unwrap();

        let outcome =
            materialize_file(&path, "<!-- note -->\n", WritePolicy::CreateIfAbsent).unwrap();

        assert_eq!(outcome, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "my notes");
    }

    #[test]
    fn create_if_absent_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("day-01.md");

        let first = materialize_file(&path, "seed\n", WritePolicy::CreateIfAbsent).unwrap();
        let second = materialize_file(&path, "other\n", WritePolicy::CreateIfAbsent).unwrap();

        assert_eq!(first, WriteOutcome::Written);
        assert_eq!(second, WriteOutcome::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "seed\n");
    }

    #[test]
    fn ensure_dir_creates_nested_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("days").join("day-01");

        ensure_dir(&path).unwrap();

        assert!(path.is_dir());
    }

    #[test]
    fn ensure_dir_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes");

        ensure_dir(&path).unwrap();
        ensure_dir(&path).unwrap();

        assert!(path.is_dir());
    }
}
