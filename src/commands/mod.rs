//! Command implementations for trailhead.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod generate;
mod show;
mod status;

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Generate(args) => generate::cmd_generate(args),
        Command::Show(args) => show::cmd_show(args),
        Command::Status(args) => status::cmd_status(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ShowArgs;
    use crate::exit_codes;

    #[test]
    fn dispatch_routes_to_correct_handler() {
        // `show` with day 0 fails fast without touching the filesystem,
        // which makes it a convenient routing probe.
        let result = dispatch(Command::Show(ShowArgs { day: 0, plan: None }));
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().exit_code(), exit_codes::USER_ERROR);
    }
}
