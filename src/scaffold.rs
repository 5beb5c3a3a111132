//! Scaffold materialization for trailhead.
//!
//! This module walks the plan and writes the on-disk tree: the five
//! top-level directories, one rendered README per day, one write-once note
//! placeholder per ordinal, and the three fixed auxiliary placeholders.
//!
//! Re-running is idempotent: directories and day READMEs converge to the
//! same state, and existing note files are never touched.

use crate::context::RoadmapContext;
use crate::error::{Result, TrailheadError};
use crate::fs::{WriteOutcome, WritePolicy, ensure_dir, materialize_file};
use crate::plan::{Plan, ordinal_label};
use crate::render::render_day;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

/// Fixed content of `templates/README.md`.
const TEMPLATES_README: &str = "# Templates\n\nThis directory contains reusable templates for issues, pull requests, or documentation.\n\n";

/// Fixed content of `resources/README.md`.
const RESOURCES_README: &str = "# Resources\n\nA curated list of references and learning materials used throughout the plan.\n\n";

/// Fixed content of `assignments/README.md`.
const ASSIGNMENTS_README: &str = "# Assignments\n\nDetailed project briefs and additional exercises will be placed here.\n\n";

/// Regex matching a day directory name, capturing the ordinal digits.
static DAY_DIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^day-(\d{2,})$").expect("invalid day directory regex"));

/// Regex matching a note file name, capturing the ordinal digits.
static NOTE_FILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^day-(\d{2,})\.md$").expect("invalid note file regex"));

/// Counts from one materialization run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterializeReport {
    /// Day READMEs written (always equals the plan length).
    pub days_written: usize,

    /// Note placeholders created this run.
    pub notes_created: usize,

    /// Note files that already existed and were left untouched.
    pub notes_preserved: usize,

    /// Auxiliary placeholder READMEs written (always three).
    pub placeholders_written: usize,
}

/// Single-line placeholder seeded into a fresh note file.
pub fn note_placeholder(ordinal: usize) -> String {
    format!("<!-- Reflection notes for day {} -->\n", ordinal_label(ordinal))
}

/// Materialize the full scaffold for `plan` under `ctx`.
///
/// Steps run in a fixed order with no cross-step dependencies beyond
/// directory existence:
///
/// 1. Create the five top-level directories.
/// 2. Per day: create `days/day-NN/` and overwrite its `README.md` with the
///    rendered document.
/// 3. Per ordinal 1..=N: seed `notes/day-NN.md` if absent; never modify an
///    existing note.
/// 4. Overwrite the three fixed auxiliary placeholders.
///
/// Any filesystem failure aborts the run. No rollback is performed: every
/// write is independent and idempotent, so a re-run after the cause is fixed
/// resumes naturally.
pub fn materialize(ctx: &RoadmapContext, plan: &Plan) -> Result<MaterializeReport> {
    let mut report = MaterializeReport::default();

    for dir in ctx.top_level_dirs() {
        ensure_dir(dir)?;
    }

    for (i, day) in plan.days.iter().enumerate() {
        let ordinal = i + 1;
        ensure_dir(ctx.day_dir(ordinal))?;

        let doc = render_day(ordinal, day);
        materialize_file(ctx.day_readme_path(ordinal), &doc, WritePolicy::Overwrite)?;
        report.days_written += 1;
    }

    for ordinal in 1..=plan.len() {
        let outcome = materialize_file(
            ctx.note_path(ordinal),
            &note_placeholder(ordinal),
            WritePolicy::CreateIfAbsent,
        )?;
        match outcome {
            WriteOutcome::Written => report.notes_created += 1,
            WriteOutcome::Skipped => report.notes_preserved += 1,
        }
    }

    let placeholders = [
        (ctx.templates_dir.join("README.md"), TEMPLATES_README),
        (ctx.resources_dir.join("README.md"), RESOURCES_README),
        (ctx.assignments_dir.join("README.md"), ASSIGNMENTS_README),
    ];
    for (path, content) in placeholders {
        materialize_file(path, content, WritePolicy::Overwrite)?;
        report.placeholders_written += 1;
    }

    Ok(report)
}

/// On-disk scaffold entries, found by scanning an existing root.
///
/// Used by `status` to compare disk state against the plan. Missing
/// directories scan as empty rather than erroring, so `status` works on a
/// root that was never generated.
#[derive(Debug, Default)]
pub struct ScaffoldScan {
    /// Ordinals of existing `days/day-NN/` directories, sorted.
    pub day_ordinals: Vec<usize>,

    /// Ordinals of existing `notes/day-NN.md` files, sorted.
    pub note_ordinals: Vec<usize>,
}

impl ScaffoldScan {
    /// Scan the scaffold root for existing day directories and note files.
    pub fn scan(ctx: &RoadmapContext) -> Result<Self> {
        let mut scan = ScaffoldScan {
            day_ordinals: scan_ordinals(&ctx.days_dir, &DAY_DIR_REGEX, EntryKind::Dir)?,
            note_ordinals: scan_ordinals(&ctx.notes_dir, &NOTE_FILE_REGEX, EntryKind::File)?,
        };
        scan.day_ordinals.sort_unstable();
        scan.note_ordinals.sort_unstable();
        Ok(scan)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum EntryKind {
    Dir,
    File,
}

/// Collect ordinals of entries in `dir` whose names match `pattern`.
fn scan_ordinals(dir: &Path, pattern: &Regex, kind: EntryKind) -> Result<Vec<usize>> {
    let mut ordinals = Vec::new();

    if !dir.exists() {
        return Ok(ordinals);
    }

    let entries = fs::read_dir(dir).map_err(|e| {
        TrailheadError::FsError(format!(
            "failed to read directory '{}': {}",
            dir.display(),
            e
        ))
    })?;

    for entry in entries {
        let entry = entry
            .map_err(|e| TrailheadError::FsError(format!("failed to read directory entry: {}", e)))?;

        let path = entry.path();
        let matches_kind = match kind {
            EntryKind::Dir => path.is_dir(),
            EntryKind::File => path.is_file(),
        };
        if !matches_kind {
            continue;
        }

        if let Some(name) = path.file_name().and_then(|n| n.to_str())
            && let Some(caps) = pattern.captures(name)
            && let Ok(ordinal) = caps[1].parse::<usize>()
        {
            ordinals.push(ordinal);
        }
    }

    Ok(ordinals)
}
