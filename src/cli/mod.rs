//! CLI argument parsing for soroquest.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Soroquest: learn Soroban smart contracts through story-driven missions.
///
/// Missions are small contract-writing exercises validated by a declarative
/// check list:
/// - `start` writes a mission's starter template to a file
/// - `test` validates your contract and advances your progression
/// - XP, levels, and badges persist under ~/.soroquest
#[derive(Parser, Debug)]
#[command(name = "soroquest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for soroquest.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List all missions grouped by chapter.
    ///
    /// Shows completion and lock state for each mission.
    Missions,

    /// Show a mission briefing.
    ///
    /// Renders the story, learning goal, and check list for a mission.
    Show(ShowArgs),

    /// Start a mission by writing its starter template to a file.
    ///
    /// Defaults to `<mission-id>.rs` in the current directory.
    Start(StartArgs),

    /// Test a contract file against a mission's checks.
    ///
    /// Runs syntax and structure pre-checks, then every mission check,
    /// and records the attempt. A full pass completes the mission and
    /// awards XP and badges.
    Test(TestArgs),

    /// Validate a contract file without touching progression.
    ///
    /// Runs the same checks as `test` but records nothing.
    Check(CheckArgs),

    /// Show your player profile.
    ///
    /// Displays level, rank, XP progress, badges, and completed missions.
    Profile,

    /// Erase all progression.
    ///
    /// Requires --force to prevent accidental resets.
    Reset(ResetArgs),

    /// Export your progression to a snapshot file.
    ///
    /// Defaults to a date-stamped file in the current directory.
    Export(ExportArgs),

    /// Import progression from a snapshot file.
    ///
    /// Replaces the current progression with the snapshot's contents.
    Import(ImportArgs),
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Mission ID to show (e.g., hello-soroban).
    pub mission_id: String,

    /// Also show the mission's hints.
    #[arg(long)]
    pub hints: bool,
}

/// Arguments for the `start` command.
#[derive(Parser, Debug)]
pub struct StartArgs {
    /// Mission ID to start.
    pub mission_id: String,

    /// Where to write the starter template (default: `<mission-id>.rs`).
    pub file: Option<PathBuf>,

    /// Overwrite the target file if it already exists.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `test` command.
#[derive(Parser, Debug)]
pub struct TestArgs {
    /// Mission ID to test against.
    pub mission_id: String,

    /// Contract source file to validate.
    pub file: PathBuf,

    /// Print the full report immediately, without staged pacing.
    #[arg(long)]
    pub no_delay: bool,
}

/// Arguments for the `check` command.
#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Contract source file to validate.
    pub file: PathBuf,

    /// Mission whose checks to run (default: only the structural pre-checks).
    #[arg(long)]
    pub mission: Option<String>,
}

/// Arguments for the `reset` command.
#[derive(Parser, Debug)]
pub struct ResetArgs {
    /// Actually erase progression (required for safety).
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `export` command.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Snapshot destination (default: soroquest-progress-<date>.json).
    pub path: Option<PathBuf>,
}

/// Arguments for the `import` command.
#[derive(Parser, Debug)]
pub struct ImportArgs {
    /// Snapshot file to import.
    pub path: PathBuf,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
