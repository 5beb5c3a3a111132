//! Implementation of the `trailhead status` command.
//!
//! Compares the on-disk scaffold against the plan and reports per-class
//! counts plus missing or orphan entries. Read-only: nothing is written,
//! not even a journal entry.

use crate::cli::StatusArgs;
use crate::context::RoadmapContext;
use crate::error::Result;
use crate::plan::{Plan, ordinal_label};
use crate::scaffold::ScaffoldScan;

/// Execute the `trailhead status` command.
pub fn cmd_status(args: StatusArgs) -> Result<()> {
    let ctx = RoadmapContext::resolve(&args.root)?;
    let plan = Plan::resolve(args.plan.as_deref())?;
    let scan = ScaffoldScan::scan(&ctx)?;

    let expected = plan.len();
    let days_present = scan.day_ordinals.iter().filter(|&&o| o <= expected).count();
    let notes_present = scan.note_ordinals.iter().filter(|&&o| o <= expected).count();

    println!("Roadmap Status");
    println!("==============");
    println!();
    println!("Root: {}", ctx.root.display());
    println!();
    println!("  {:12} {:>3} of {:>3}", "Day folders", days_present, expected);
    println!("  {:12} {:>3} of {:>3}", "Notes", notes_present, expected);
    println!();

    // Collect issues to highlight
    let mut issues: Vec<String> = Vec::new();

    let missing_days = missing_ordinals(&scan.day_ordinals, expected);
    if !missing_days.is_empty() {
        issues.push(format!(
            "missing day folder(s): {}",
            format_ordinals(&missing_days)
        ));
    }

    let missing_notes = missing_ordinals(&scan.note_ordinals, expected);
    if !missing_notes.is_empty() {
        issues.push(format!(
            "missing note file(s): {}",
            format_ordinals(&missing_notes)
        ));
    }

    let orphan_days: Vec<usize> = scan
        .day_ordinals
        .iter()
        .copied()
        .filter(|&o| o > expected)
        .collect();
    if !orphan_days.is_empty() {
        issues.push(format!(
            "day folder(s) beyond the plan: {}",
            format_ordinals(&orphan_days)
        ));
    }

    let orphan_notes: Vec<usize> = scan
        .note_ordinals
        .iter()
        .copied()
        .filter(|&o| o > expected)
        .collect();
    if !orphan_notes.is_empty() {
        issues.push(format!(
            "note file(s) beyond the plan: {}",
            format_ordinals(&orphan_notes)
        ));
    }

    if issues.is_empty() {
        println!("Scaffold is complete.");
    } else {
        println!("Issues:");
        for issue in &issues {
            println!("  - {}", issue);
        }
        println!();
        println!("Run `trailhead generate` to fill in missing entries.");
    }

    Ok(())
}

/// Ordinals in 1..=expected that are absent from `present` (assumed sorted).
fn missing_ordinals(present: &[usize], expected: usize) -> Vec<usize> {
    (1..=expected).filter(|o| !present.contains(o)).collect()
}

/// Render a list of ordinals as zero-padded labels, e.g. `03, 07, 12`.
fn format_ordinals(ordinals: &[usize]) -> String {
    ordinals
        .iter()
        .map(|&o| ordinal_label(o))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::StatusArgs;
    use crate::scaffold::materialize;
    use crate::test_support::sample_plan;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn write_plan(dir: &std::path::Path, days: usize) -> PathBuf {
        let mut yaml = String::from("days:\n");
        for i in 1..=days {
            yaml.push_str(&format!("  - title: Day {}\n    focus: F{}.\n", i, i));
        }
        let path = dir.join("plan.yaml");
        fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn test_status_on_generated_root_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = RoadmapContext::resolve(temp_dir.path()).unwrap();
        materialize(&ctx, &sample_plan(3)).unwrap();
        let plan_path = write_plan(temp_dir.path(), 3);

        let result = cmd_status(StatusArgs {
            root: temp_dir.path().to_path_buf(),
            plan: Some(plan_path),
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_status_on_empty_root_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = write_plan(temp_dir.path(), 2);

        let result = cmd_status(StatusArgs {
            root: temp_dir.path().to_path_buf(),
            plan: Some(plan_path),
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_status_is_read_only() {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = write_plan(temp_dir.path(), 2);

        cmd_status(StatusArgs {
            root: temp_dir.path().to_path_buf(),
            plan: Some(plan_path),
        })
        .unwrap();

        assert!(!temp_dir.path().join("days").exists());
        assert!(!temp_dir.path().join(".trailhead").exists());
    }

    #[test]
    fn test_missing_ordinals() {
        assert_eq!(missing_ordinals(&[1, 3], 4), vec![2, 4]);
        assert_eq!(missing_ordinals(&[], 2), vec![1, 2]);
        assert!(missing_ordinals(&[1, 2], 2).is_empty());
    }

    #[test]
    fn test_format_ordinals_zero_pads() {
        assert_eq!(format_ordinals(&[3, 7, 12]), "03, 07, 12");
        assert_eq!(format_ordinals(&[]), "");
    }
}
