//! Exit code constants for the trailhead CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid root, unknown day)
//! - 2: Plan failure (missing mandatory field, unparseable plan file)
//! - 3: Filesystem failure (write/create error during materialization)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid root directory, or unknown day number.
pub const USER_ERROR: i32 = 1;

/// Plan failure: a record violates the plan contract or the plan file
/// could not be parsed.
pub const PLAN_FAILURE: i32 = 2;

/// Filesystem failure: a write or create operation failed mid-run.
pub const FS_FAILURE: i32 = 3;
