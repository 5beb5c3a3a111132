//! Document assembly for trailhead.
//!
//! This module is the pure half of the generator: it maps an ordinal and a
//! day record to the final Markdown text, with no I/O. Output is fully
//! deterministic, and the section layout is fixed so regenerated documents
//! diff cleanly against hand-reviewed ones.
//!
//! Layout, in order: title heading, a three-badge line, a horizontal rule,
//! then nine named sections. Every section is emitted even when its content
//! is empty.

use crate::plan::{DayPlan, ordinal_label};

/// Badge image base URL.
const SHIELDS_BASE: &str = "https://img.shields.io/badge";

/// Area shown when a record carries no area tag.
pub const DEFAULT_AREA: &str = "misc";

/// Timebox shown when a record carries no timebox.
pub const DEFAULT_TIMEBOX: &str = "~3 hours";

/// Priority marker shown on every day.
pub const PRIORITY_MARKER: &str = "P0";

/// Return a shields.io badge markdown string.
///
/// Label and message have every literal space replaced by `%20`; no other
/// character is altered.
pub fn badge(label: &str, message: &str, color: &str) -> String {
    let label = label.replace(' ', "%20");
    let message = message.replace(' ', "%20");
    format!("![{label}]({SHIELDS_BASE}/{label}-{message}-{color})")
}

/// Return a markdown section: level-3 heading, one blank line, the body with
/// leading/trailing whitespace stripped, exactly one trailing newline.
pub fn section(title: &str, content: &str) -> String {
    format!("### {}\n\n{}\n", title, content.trim())
}

/// Assemble the full README markdown for one day.
pub fn render_day(ordinal: usize, day: &DayPlan) -> String {
    let label = ordinal_label(ordinal);

    let title_line = format!("# Day {} — {}\n", label, day.title);

    let badges = [
        badge("Day", &label, "blue"),
        badge("Area", day.area.as_deref().unwrap_or(DEFAULT_AREA), "lightgrey"),
        badge("Priority", PRIORITY_MARKER, "red"),
    ]
    .join(" ");
    let header = format!("{badges}\n\n---\n");

    let study = day
        .study
        .iter()
        .map(|link| format!("- [{}]({})", link.name, link.url))
        .collect::<Vec<_>>()
        .join("\n");

    // Markdown renderers renumber ordered lists, so every line carries the
    // literal `1.` marker.
    let build = day
        .build
        .iter()
        .map(|step| format!("1. {}", step))
        .collect::<Vec<_>>()
        .join("\n");

    let dod = day
        .dod
        .iter()
        .map(|item| format!("- [ ] {}", item))
        .collect::<Vec<_>>()
        .join("\n");

    let mut doc = String::new();
    doc.push_str(&title_line);
    doc.push_str(&header);
    doc.push_str(&section("Focus", &day.focus));
    doc.push_str(&section(
        "Timebox",
        day.timebox.as_deref().unwrap_or(DEFAULT_TIMEBOX),
    ));
    doc.push_str(&section("Study", &study));
    doc.push_str(&section("Build", &build));
    doc.push_str(&section("Assignments", &bullet_list(&day.assignments)));
    doc.push_str(&section("DoD Checklist", &dod));
    doc.push_str(&section(
        "Commit Message",
        &format!("`{}`", day.commit_msg),
    ));
    doc.push_str(&section("Outcome Artifacts", &bullet_list(&day.outcome)));
    doc.push_str(&section(
        "Self-Review Questions",
        &bullet_list(&day.review_questions),
    ));
    doc
}

/// Render items as an unordered markdown list.
fn bullet_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}
