//! Error types for the trailhead CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for trailhead operations.
///
/// Each variant maps to a stable exit code. There is no recoverable error
/// category: every error aborts the run, and because every write is
/// idempotent, re-invoking after the cause is fixed simply resumes.
#[derive(Error, Debug)]
pub enum TrailheadError {
    /// User provided invalid arguments or pointed at an invalid root.
    #[error("{0}")]
    UserError(String),

    /// The plan violates its contract or could not be parsed.
    #[error("Plan error: {0}")]
    PlanError(String),

    /// A filesystem write or create operation failed.
    #[error("Filesystem error: {0}")]
    FsError(String),
}

impl TrailheadError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            TrailheadError::UserError(_) => exit_codes::USER_ERROR,
            TrailheadError::PlanError(_) => exit_codes::PLAN_FAILURE,
            TrailheadError::FsError(_) => exit_codes::FS_FAILURE,
        }
    }
}

/// Result type alias for trailhead operations.
pub type Result<T> = std::result::Result<T, TrailheadError>;
