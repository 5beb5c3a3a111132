//! The built-in roadmap plan.
//!
//! The default plan is a complete 60-day full-stack study roadmap. It is
//! compiled into the binary as YAML and parsed on first use, so the generator
//! works with no external input at all.

use crate::error::Result;
use crate::plan::Plan;

/// YAML source of the built-in plan.
const DEFAULT_PLAN_YAML: &str = include_str!("default_plan.yaml");

impl Plan {
    /// The plan compiled into the binary.
    pub fn builtin() -> Result<Self> {
        Plan::from_yaml(DEFAULT_PLAN_YAML)
    }
}
