//! The `reset`, `export`, and `import` commands: whole-record operations.

use crate::cli::{ExportArgs, ImportArgs, ResetArgs};
use crate::context::QuestContext;
use crate::error::{QuestError, Result};
use crate::events::{append_event, EventAction};
use crate::store;
use std::path::{Path, PathBuf};

pub fn cmd_reset(args: ResetArgs) -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_reset(&ctx, args.force)
}

pub(crate) fn run_reset(ctx: &QuestContext, force: bool) -> Result<()> {
    if !force {
        return Err(QuestError::UserError(
            "reset erases all XP, badges, and completions.\n\
             Fix: re-run with --force if you are sure."
                .to_string(),
        ));
    }

    store::reset(ctx)?;
    append_event(ctx, EventAction::Reset, None, None);
    println!("🧹 Progression erased. Fresh start!");
    Ok(())
}

pub fn cmd_export(args: ExportArgs) -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_export(&ctx, args.path.as_deref())
}

pub(crate) fn run_export(ctx: &QuestContext, path: Option<&Path>) -> Result<()> {
    let dest = path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(store::default_export_filename()));

    let record = store::export_snapshot(ctx, &dest)?;
    append_event(
        ctx,
        EventAction::Export,
        None,
        Some(&dest.display().to_string()),
    );

    println!(
        "📦 Exported {} XP and {} completed missions to {}",
        record.xp,
        record.completed_missions.len(),
        dest.display()
    );
    Ok(())
}

pub fn cmd_import(args: ImportArgs) -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_import(&ctx, &args.path)
}

pub(crate) fn run_import(ctx: &QuestContext, path: &Path) -> Result<()> {
    ctx.ensure_home()?;
    let record = store::import_snapshot(ctx, path)?;
    append_event(
        ctx,
        EventAction::Import,
        None,
        Some(&path.display().to_string()),
    );

    println!(
        "📥 Imported: level {}, {} XP, {} missions completed",
        record.level,
        record.xp,
        record.completed_missions.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit_codes;
    use crate::progress::{award_xp, ProgressRecord};
    use std::fs;
    use tempfile::TempDir;

    fn ctx_in(temp: &TempDir) -> QuestContext {
        QuestContext::at(temp.path().join("home"))
    }

    #[test]
    fn reset_without_force_is_refused() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx_in(&temp);
        store::save(&ctx, &ProgressRecord::new()).unwrap();

        let err = run_reset(&ctx, false).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(ctx.progress_path().exists());
    }

    #[test]
    fn forced_reset_erases_the_record() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx_in(&temp);

        let (record, _) = award_xp(&ProgressRecord::new(), 500);
        store::save(&ctx, &record).unwrap();

        run_reset(&ctx, true).unwrap();
        assert!(!ctx.progress_path().exists());
        assert_eq!(store::load(&ctx).unwrap(), ProgressRecord::new());
    }

    #[test]
    fn export_import_round_trips_through_a_named_file() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx_in(&temp);

        let (record, _) = award_xp(&ProgressRecord::new(), 1500);
        store::save(&ctx, &record).unwrap();

        let snapshot = temp.path().join("backup.json");
        run_export(&ctx, Some(&snapshot)).unwrap();
        run_reset(&ctx, true).unwrap();
        run_import(&ctx, &snapshot).unwrap();

        assert_eq!(store::load(&ctx).unwrap(), record);
    }

    #[test]
    fn reset_and_snapshot_commands_are_logged() {
        let temp = TempDir::new().unwrap();
        let ctx = ctx_in(&temp);
        ctx.ensure_home().unwrap();

        let snapshot = temp.path().join("backup.json");
        run_export(&ctx, Some(&snapshot)).unwrap();
        run_import(&ctx, &snapshot).unwrap();
        run_reset(&ctx, true).unwrap();

        let log = fs::read_to_string(ctx.events_path()).unwrap();
        assert!(log.contains("\"action\":\"export\""));
        assert!(log.contains("\"action\":\"import\""));
        assert!(log.contains("\"action\":\"reset\""));
    }
}
