//! Run journal for trailhead.
//!
//! Generation runs are recorded in an append-only NDJSON journal (one JSON
//! object per line) at `<root>/.trailhead/events.ndjson`, so a scaffold
//! directory carries its own history of when it was (re)generated and what
//! each run wrote.
//!
//! # Event Format
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: the action performed (currently only `generate`)
//! - `actor`: the owner string (e.g., `user@HOST`)
//! - `details`: freeform object with action-specific details

use crate::context::RoadmapContext;
use crate::error::{Result, TrailheadError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;

/// Actions that can be journaled.
///
/// `show` and `status` are read-only and never journaled; a run that writes
/// nothing leaves no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Full scaffold materialization run.
    Generate,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Generate => write!(f, "generate"),
        }
    }
}

/// An event record for the run journal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            TrailheadError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the run journal.
///
/// The journal directory and file are created on first use. Each append
/// results in one JSON line with a trailing newline, synced to disk.
///
/// # Returns
///
/// * `Ok(())` - Event was successfully appended
/// * `Err(TrailheadError::FsError)` - Journal write failed
pub fn append_event(ctx: &RoadmapContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();

    let json_line = event.to_ndjson_line()?;

    let journal_dir = ctx.journal_dir();
    if !journal_dir.exists() {
        fs::create_dir_all(&journal_dir).map_err(|e| {
            TrailheadError::FsError(format!(
                "failed to create journal directory '{}': {}",
                journal_dir.display(),
                e
            ))
        })?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            TrailheadError::FsError(format!(
                "failed to open journal file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        TrailheadError::FsError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    file.sync_all().map_err(|e| {
        TrailheadError::FsError(format!(
            "failed to sync journal file '{}': {}",
            events_file.display(),
            e
        ))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn journal_root() -> (TempDir, RoadmapContext) {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RoadmapContext::resolve(temp_dir.path()).unwrap();
        (temp_dir, ctx)
    }

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventAction::Generate);

        assert_eq!(event.action, EventAction::Generate);
        assert!(!event.actor.is_empty());
        // Timestamp should be recent (within last minute)
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_with_details() {
        let event = Event::new(EventAction::Generate)
            .with_details(json!({"days": 60, "notes_created": 60}));

        assert_eq!(event.details["days"], 60);
        assert_eq!(event.details["notes_created"], 60);
    }

    #[test]
    fn test_event_serialization_is_single_line() {
        let event = Event::new(EventAction::Generate).with_details(json!({"days": 3}));

        let json_line = event.to_ndjson_line().unwrap();

        let parsed: Event = serde_json::from_str(&json_line).unwrap();
        assert_eq!(parsed.action, EventAction::Generate);
        assert!(!json_line.contains('\n'));
    }

    #[test]
    fn test_event_action_serializes_snake_case() {
        let event = Event::new(EventAction::Generate);
        let json_line = event.to_ndjson_line().unwrap();
        assert!(json_line.contains("\"generate\""));
    }

    #[test]
    fn test_append_event_creates_journal() {
        let (_temp_dir, ctx) = journal_root();
        let events_file = ctx.events_file();

        assert!(!events_file.exists());

        let event = Event::new(EventAction::Generate).with_details(json!({"days": 1}));
        append_event(&ctx, &event).unwrap();

        assert!(events_file.exists());

        let content = fs::read_to_string(&events_file).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 1);

        let parsed: Event = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(parsed.action, EventAction::Generate);
        assert_eq!(parsed.details["days"], 1);
    }

    #[test]
    fn test_append_event_accumulates_lines() {
        let (_temp_dir, ctx) = journal_root();

        append_event(&ctx, &Event::new(EventAction::Generate)).unwrap();
        append_event(&ctx, &Event::new(EventAction::Generate)).unwrap();

        let content = fs::read_to_string(ctx.events_file()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_event_action_display() {
        assert_eq!(format!("{}", EventAction::Generate), "generate");
    }

    #[test]
    fn test_get_actor_string() {
        let actor = get_actor_string();
        assert!(actor.contains('@'));
        assert!(!actor.is_empty());
    }
}
