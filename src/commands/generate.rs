//! Implementation of the `trailhead generate` command.
//!
//! Materializes the full roadmap scaffold under the chosen root and records
//! the run in the journal.

use crate::cli::GenerateArgs;
use crate::context::RoadmapContext;
use crate::error::Result;
use crate::events::{Event, EventAction, append_event};
use crate::plan::Plan;
use crate::scaffold;
use serde_json::json;

/// Execute the `trailhead generate` command.
///
/// Resolves the root and the plan, materializes the scaffold, journals the
/// run, and prints a summary of what was written.
pub fn cmd_generate(args: GenerateArgs) -> Result<()> {
    let ctx = RoadmapContext::resolve(&args.root)?;
    let plan = Plan::resolve(args.plan.as_deref())?;

    let report = scaffold::materialize(&ctx, &plan)?;

    let plan_source = match &args.plan {
        Some(path) => path.display().to_string(),
        None => "builtin".to_string(),
    };
    let event = Event::new(EventAction::Generate).with_details(json!({
        "root": ctx.root.display().to_string(),
        "plan_source": plan_source,
        "days": report.days_written,
        "notes_created": report.notes_created,
        "notes_preserved": report.notes_preserved,
        "placeholders": report.placeholders_written,
    }));
    append_event(&ctx, &event)?;

    // Print summary
    println!("Generated roadmap scaffold at: {}", ctx.root.display());
    println!();
    println!("  Days:         {} README file(s) written", report.days_written);
    println!(
        "  Notes:        {} created, {} preserved",
        report.notes_created, report.notes_preserved
    );
    println!(
        "  Placeholders: {} written",
        report.placeholders_written
    );
    if report.days_written > 0 {
        println!();
        println!("Open days/day-01/README.md to start.");
    }

    Ok(())
}
