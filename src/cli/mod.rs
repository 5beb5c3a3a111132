//! CLI argument parsing for trailhead.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Trailhead: file-based scaffolding generator for day-by-day study roadmaps.
///
/// A roadmap is expressed as files and folders under one root directory:
/// - `days/day-NN/README.md` holds the rendered plan for each day
/// - `notes/day-NN.md` holds your reflection notes (never overwritten)
/// - `templates/`, `resources/`, `assignments/` hold auxiliary material
#[derive(Parser, Debug)]
#[command(name = "trailhead")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for trailhead.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Materialize the full roadmap scaffold.
    ///
    /// Writes every day README, seeds missing note placeholders, and
    /// refreshes the auxiliary placeholder documents. Safe to re-run:
    /// existing notes are never touched.
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// Render a single day's README to stdout.
    ///
    /// Pure preview: nothing is written to the filesystem.
    Show(ShowArgs),

    /// Report scaffold state against the plan.
    ///
    /// Compares the on-disk tree with the plan and lists missing or
    /// orphan entries. Read-only.
    Status(StatusArgs),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Root directory to materialize into.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Plan YAML file to use instead of the built-in plan.
    #[arg(long)]
    pub plan: Option<PathBuf>,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Day number to render (1-based).
    pub day: usize,

    /// Plan YAML file to use instead of the built-in plan.
    #[arg(long)]
    pub plan: Option<PathBuf>,
}

/// Arguments for the `status` command.
#[derive(Parser, Debug)]
pub struct StatusArgs {
    /// Root directory to inspect.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Plan YAML file to compare against instead of the built-in plan.
    #[arg(long)]
    pub plan: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
