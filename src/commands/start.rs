//! The `start` command: write a mission's starter template to disk.

use super::load_catalog;
use super::missions::require_mission;
use crate::cli::StartArgs;
use crate::config::Config;
use crate::context::QuestContext;
use crate::error::{QuestError, Result};
use crate::fs::atomic_write_file;
use crate::store;
use std::path::{Path, PathBuf};

pub fn cmd_start(args: StartArgs) -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_start(&ctx, &args.mission_id, args.file.as_deref(), args.force)
}

pub(crate) fn run_start(
    ctx: &QuestContext,
    mission_id: &str,
    file: Option<&Path>,
    force: bool,
) -> Result<()> {
    ctx.ensure_home()?;
    let config = Config::load(ctx.config_path())?;
    let catalog = load_catalog(ctx, &config)?;
    let mission = require_mission(&catalog, mission_id)?;
    let record = store::load(ctx)?;

    if !catalog.is_unlocked(&mission.id, &record.completed_missions) {
        let previous = catalog
            .previous_before(&mission.id)
            .map(|m| m.id.clone())
            .unwrap_or_default();
        return Err(QuestError::UserError(format!(
            "mission '{}' is locked.\nFix: complete '{}' first.",
            mission.id, previous
        )));
    }

    let dest = file
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(format!("{}.rs", mission.id)));

    if dest.exists() && !force {
        return Err(QuestError::UserError(format!(
            "'{}' already exists.\nFix: pass --force to overwrite, or name a different file.",
            dest.display()
        )));
    }

    atomic_write_file(&dest, &mission.template)?;

    let mut next = record;
    next.current_mission = Some(mission.id.clone());
    store::save(ctx, &next)?;

    println!("🚀 Mission started: {}", mission.title);
    println!("   Template written to {}", dest.display());
    println!(
        "   When ready: soroquest test {} {}",
        mission.id,
        dest.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn ctx_in(temp: &TempDir) -> QuestContext {
        QuestContext::at(temp.path().join("home"))
    }

    #[test]
    fn writes_the_template_and_records_the_current_mission() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx_in(&temp);
        let dest = temp.path().join("attempt.rs");

        run_start(&ctx, "hello-soroban", Some(&dest), false).unwrap();

        let written = fs::read_to_string(&dest).unwrap();
        assert!(written.contains("pub struct HelloContract"));

        let record = store::load(&ctx).unwrap();
        assert_eq!(record.current_mission.as_deref(), Some("hello-soroban"));
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx_in(&temp);
        let dest = temp.path().join("attempt.rs");
        fs::write(&dest, "my work in progress").unwrap();

        let err = run_start(&ctx, "hello-soroban", Some(&dest), false).unwrap_err();
        assert!(err.to_string().contains("--force"));
        assert_eq!(fs::read_to_string(&dest).unwrap(), "my work in progress");

        run_start(&ctx, "hello-soroban", Some(&dest), true).unwrap();
        assert!(fs::read_to_string(&dest).unwrap().contains("HelloContract"));
    }

    #[test]
    fn locked_missions_cannot_be_started() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx_in(&temp);
        let dest = temp.path().join("attempt.rs");

        let err = run_start(&ctx, "counter-vault", Some(&dest), false).unwrap_err();
        assert!(err.to_string().contains("locked"));
        assert!(err.to_string().contains("greetings-protocol"));
        assert!(!dest.exists());
    }
}
