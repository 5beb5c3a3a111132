//! Scaffold root resolution for trailhead.
//!
//! This module provides the "environment resolution" layer that turns the
//! chosen root directory into the canonical set of paths the generator
//! writes: the five top-level directories, per-ordinal day and note paths,
//! and the run-journal location.
//!
//! All commands go through this module so path construction lives in one
//! place and the directory layout cannot drift between call sites.

use crate::error::{Result, TrailheadError};
use crate::plan::ordinal_label;
use std::path::{Path, PathBuf};

/// Top-level directories of the scaffold, in creation order.
pub const TOP_LEVEL_DIRS: &[&str] = &["days", "templates", "resources", "assignments", "notes"];

/// Directory holding machine-local run metadata (the journal). Not part of
/// the scaffold proper.
pub const JOURNAL_DIR: &str = ".trailhead";

/// Resolved paths for one scaffold root.
#[derive(Debug, Clone)]
pub struct RoadmapContext {
    /// The scaffold root directory.
    pub root: PathBuf,

    /// `{root}/days/` — per-day README directories.
    pub days_dir: PathBuf,

    /// `{root}/templates/` — reusable template placeholders.
    pub templates_dir: PathBuf,

    /// `{root}/resources/` — reference material placeholder.
    pub resources_dir: PathBuf,

    /// `{root}/assignments/` — assignment brief placeholder.
    pub assignments_dir: PathBuf,

    /// `{root}/notes/` — write-once reflection notes.
    pub notes_dir: PathBuf,
}

impl RoadmapContext {
    /// Resolve the context for the given root directory.
    ///
    /// The root must already exist and be a directory; the scaffold
    /// directories underneath it are created later by materialization.
    ///
    /// # Returns
    ///
    /// * `Ok(RoadmapContext)` - Successfully resolved context
    /// * `Err(TrailheadError::UserError)` - Root missing or not a directory
    pub fn resolve<P: AsRef<Path>>(root: P) -> Result<Self> {
        let root = root.as_ref();

        if !root.exists() {
            return Err(TrailheadError::UserError(format!(
                "root directory '{}' does not exist",
                root.display()
            )));
        }
        if !root.is_dir() {
            return Err(TrailheadError::UserError(format!(
                "root path '{}' is not a directory",
                root.display()
            )));
        }

        Ok(Self {
            root: root.to_path_buf(),
            days_dir: root.join("days"),
            templates_dir: root.join("templates"),
            resources_dir: root.join("resources"),
            assignments_dir: root.join("assignments"),
            notes_dir: root.join("notes"),
        })
    }

    /// The five top-level scaffold directories, in creation order.
    pub fn top_level_dirs(&self) -> [&PathBuf; 5] {
        [
            &self.days_dir,
            &self.templates_dir,
            &self.resources_dir,
            &self.assignments_dir,
            &self.notes_dir,
        ]
    }

    /// Get the path to a day's directory, e.g. `days/day-03/`.
    pub fn day_dir(&self, ordinal: usize) -> PathBuf {
        self.days_dir.join(format!("day-{}", ordinal_label(ordinal)))
    }

    /// Get the path to a day's rendered README, e.g. `days/day-03/README.md`.
    pub fn day_readme_path(&self, ordinal: usize) -> PathBuf {
        self.day_dir(ordinal).join("README.md")
    }

    /// Get the path to a day's reflection note, e.g. `notes/day-03.md`.
    pub fn note_path(&self, ordinal: usize) -> PathBuf {
        self.notes_dir
            .join(format!("day-{}.md", ordinal_label(ordinal)))
    }

    /// Get the path to the run-journal directory.
    pub fn journal_dir(&self) -> PathBuf {
        self.root.join(JOURNAL_DIR)
    }

    /// Get the path to the run-journal events file.
    pub fn events_file(&self) -> PathBuf {
        self.journal_dir().join("events.ndjson")
    }
}
