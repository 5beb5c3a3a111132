//! Filesystem utilities for trailhead.
//!
//! This module provides safe filesystem operations: atomic overwrites and the
//! per-file-class write policies the materializer is built on.

pub mod atomic;
mod materialize;

pub use atomic::atomic_write;
pub use atomic::atomic_write_file;
pub use materialize::WriteOutcome;
pub use materialize::WritePolicy;
pub use materialize::ensure_dir;
pub use materialize::materialize_file;
