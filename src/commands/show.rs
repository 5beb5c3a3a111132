//! Implementation of the `trailhead show` command.
//!
//! Renders a single day's document to stdout without touching the
//! filesystem.

use crate::cli::ShowArgs;
use crate::error::{Result, TrailheadError};
use crate::plan::Plan;
use crate::render::render_day;

/// Execute the `trailhead show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let plan = Plan::resolve(args.plan.as_deref())?;

    if args.day == 0 || args.day > plan.len() {
        return Err(TrailheadError::UserError(format!(
            "day {} is out of range: the plan has {} day(s).\n\n\
             Days are numbered starting at 1.",
            args.day,
            plan.len()
        )));
    }

    let doc = render_day(args.day, &plan.days[args.day - 1]);
    print!("{}", doc);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_show_day_zero_is_user_error() {
        let result = cmd_show(ShowArgs { day: 0, plan: None });

        assert!(result.is_err());
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_show_day_past_plan_end_is_user_error() {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = temp_dir.path().join("plan.yaml");
        fs::write(&plan_path, "days:\n  - title: X\n    focus: F\n").unwrap();

        let result = cmd_show(ShowArgs {
            day: 2,
            plan: Some(plan_path),
        });

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("1 day(s)"));
    }

    #[test]
    fn test_show_valid_day_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let plan_path = temp_dir.path().join("plan.yaml");
        fs::write(&plan_path, "days:\n  - title: X\n    focus: F\n").unwrap();

        let result = cmd_show(ShowArgs {
            day: 1,
            plan: Some(plan_path),
        });

        assert!(result.is_ok());
    }

    #[test]
    fn test_show_builtin_last_day_succeeds() {
        let result = cmd_show(ShowArgs { day: 60, plan: None });
        assert!(result.is_ok());
    }
}
