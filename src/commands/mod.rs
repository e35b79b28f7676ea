//! Command implementations for soroquest.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each `cmd_*` entry point resolves the quest context from
//! the environment and delegates to a `run_*` function that takes the
//! context explicitly, so tests can drive commands against a temporary home.

mod check;
mod missions;
mod profile;
mod snapshot;
mod start;
mod test_cmd;

use crate::cli::Command;
use crate::config::Config;
use crate::context::QuestContext;
use crate::error::Result;
use crate::mission::Catalog;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Missions => missions::cmd_missions(),
        Command::Show(args) => missions::cmd_show(args),
        Command::Start(args) => start::cmd_start(args),
        Command::Test(args) => test_cmd::cmd_test(args),
        Command::Check(args) => check::cmd_check(args),
        Command::Profile => profile::cmd_profile(),
        Command::Reset(args) => snapshot::cmd_reset(args),
        Command::Export(args) => snapshot::cmd_export(args),
        Command::Import(args) => snapshot::cmd_import(args),
    }
}

/// Load the mission catalog for a context.
///
/// The built-in catalog is merged with the configured missions directory, or
/// with `<home>/missions` when none is configured. Relative configured paths
/// resolve against the home directory.
pub(crate) fn load_catalog(ctx: &QuestContext, config: &Config) -> Result<Catalog> {
    let dir = match &config.missions_dir {
        Some(dir) if dir.is_absolute() => dir.clone(),
        Some(dir) => ctx.home.join(dir),
        None => ctx.missions_dir(),
    };
    Catalog::builtin_with_dir(dir)
}
