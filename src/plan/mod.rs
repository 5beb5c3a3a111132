//! Plan model for trailhead.
//!
//! A plan is an ordered sequence of day records, deserialized from YAML.
//! Optional fields default to empty, and `title`/`focus` are mandatory: a
//! record without them fails deserialization with a missing-field error.
//!
//! # Plan File Format
//!
//! ```text
//! days:
//!   - title: Monorepo Bootstrap
//!     area: devops
//!     focus: Initialize the project repository.
//!     timebox: "~3 hours"
//!     study:
//!       - name: pnpm workspaces documentation
//!         url: https://pnpm.io/workspaces
//!     build:
//!       - Initialize Git repository.
//!     dod:
//!       - Repository builds successfully.
//!     commit_msg: "feat(setup): initialize monorepo structure"
//! ```

use crate::error::{Result, TrailheadError};
use serde::{Deserialize, Serialize};
use std::path::Path;

mod builtin;

/// A full roadmap plan: the ordered day records.
///
/// A day's ordinal is its 1-based position in `days`; ordering in the file
/// is the ordering of the scaffold.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Plan {
    /// The day records, in scaffold order.
    pub days: Vec<DayPlan>,
}

/// One day record.
///
/// `title` and `focus` are required; everything else degrades gracefully to
/// an empty list or a default string at render time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DayPlan {
    /// Day title, shown in the document heading.
    pub title: String,

    /// What the day is about.
    pub focus: String,

    /// Free-form category tag (renders as `misc` when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<String>,

    /// Human-readable duration (renders as `~3 hours` when absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timebox: Option<String>,

    /// Study links, rendered as a markdown link list in input order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub study: Vec<StudyLink>,

    /// Build steps, rendered as an ordered list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub build: Vec<String>,

    /// Assignments, rendered as an unordered list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<String>,

    /// Definition-of-done items, rendered as an unchecked task list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dod: Vec<String>,

    /// Suggested commit message for the day's work.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub commit_msg: String,

    /// Expected artifacts, rendered as an unordered list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outcome: Vec<String>,

    /// Self-review questions, rendered as an unordered list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub review_questions: Vec<String>,
}

/// A named study link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyLink {
    /// Link text.
    pub name: String,
    /// Link target.
    pub url: String,
}

impl Plan {
    /// Load a plan from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Plan)` - Successfully loaded and validated plan
    /// * `Err(TrailheadError::UserError)` - File could not be read
    /// * `Err(TrailheadError::PlanError)` - Parse error or contract violation
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TrailheadError::UserError(format!(
                "failed to read plan file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse a plan from a YAML string.
    ///
    /// A record missing `title` or `focus` is a contract violation and
    /// surfaces here as a missing-field parse error.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let plan: Plan = serde_yaml::from_str(yaml)
            .map_err(|e| TrailheadError::PlanError(format!("failed to parse plan YAML: {}", e)))?;

        plan.validate()?;
        Ok(plan)
    }

    /// Pick the plan for a run: an external file when given, otherwise the
    /// built-in plan.
    pub fn resolve(source: Option<&Path>) -> Result<Self> {
        match source {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    /// Validate the plan contract.
    ///
    /// `title` and `focus` must be present (enforced by deserialization) and
    /// non-empty. Everything else is deliberately unvalidated.
    pub fn validate(&self) -> Result<()> {
        for (i, day) in self.days.iter().enumerate() {
            let ordinal = i + 1;
            if day.title.trim().is_empty() {
                return Err(TrailheadError::PlanError(format!(
                    "day {}: title must be non-empty",
                    ordinal
                )));
            }
            if day.focus.trim().is_empty() {
                return Err(TrailheadError::PlanError(format!(
                    "day {}: focus must be non-empty",
                    ordinal
                )));
            }
        }
        Ok(())
    }

    /// Number of days in the plan.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when the plan has no days.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Zero-padded label for a 1-based day ordinal, e.g. `1` -> `01`.
///
/// The width is a fixed two-digit literal; plans beyond 99 days are outside
/// the contract and simply render with more digits.
pub fn ordinal_label(ordinal: usize) -> String {
    format!("{:02}", ordinal)
}
