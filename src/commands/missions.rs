//! The `missions` and `show` commands: browsing the catalog.

use super::load_catalog;
use crate::cli::ShowArgs;
use crate::config::Config;
use crate::context::QuestContext;
use crate::error::{QuestError, Result};
use crate::mission::{Catalog, Mission};
use crate::progress::ProgressRecord;
use crate::store;

pub fn cmd_missions() -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_missions(&ctx)
}

pub(crate) fn run_missions(ctx: &QuestContext) -> Result<()> {
    let config = Config::load(ctx.config_path())?;
    let catalog = load_catalog(ctx, &config)?;
    let record = store::load(ctx)?;

    println!("🗺️  Mission Map");
    println!();

    for (chapter, missions) in catalog.by_chapter() {
        println!("Chapter {}", chapter);
        for mission in missions {
            let status = mission_status(&catalog, mission, &record);
            println!(
                "  {} {:<20} {:<28} [{}] {} XP",
                status,
                mission.id,
                mission.title,
                mission.difficulty,
                mission.xp_reward
            );
        }
        println!();
    }

    let completed = record.completed_missions.len();
    println!("Completed: {}/{}", completed, catalog.all().len());
    Ok(())
}

fn mission_status(catalog: &Catalog, mission: &Mission, record: &ProgressRecord) -> &'static str {
    if record.has_completed(&mission.id) {
        "✅"
    } else if catalog.is_unlocked(&mission.id, &record.completed_missions) {
        "🔓"
    } else {
        "🔒"
    }
}

pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_show(&ctx, &args.mission_id, args.hints)
}

pub(crate) fn run_show(ctx: &QuestContext, mission_id: &str, hints: bool) -> Result<()> {
    let config = Config::load(ctx.config_path())?;
    let catalog = load_catalog(ctx, &config)?;
    let mission = require_mission(&catalog, mission_id)?;

    println!(
        "{} (Chapter {}, {} | {} XP)",
        mission.title, mission.chapter, mission.difficulty, mission.xp_reward
    );
    println!();
    println!("{}", mission.story.trim_end());
    println!();
    println!("Goal: {}", mission.learning_goal);

    if !mission.concepts_introduced.is_empty() {
        println!("Concepts: {}", mission.concepts_introduced.join(", "));
    }

    if hints {
        println!();
        println!("💡 Hints:");
        for (i, hint) in mission.hints.iter().enumerate() {
            println!("  {}. {}", i + 1, hint);
        }
    }

    println!();
    println!(
        "Next: soroquest start {} && soroquest test {} {}.rs",
        mission.id, mission.id, mission.id
    );
    Ok(())
}

/// Look up a mission or fail with the list of valid ids.
pub(crate) fn require_mission<'a>(catalog: &'a Catalog, mission_id: &str) -> Result<&'a Mission> {
    catalog.by_id(mission_id).ok_or_else(|| {
        let ids: Vec<&str> = catalog.all().iter().map(|m| m.id.as_str()).collect();
        QuestError::UserError(format!(
            "unknown mission '{}'.\nFix: pick one of: {}",
            mission_id,
            ids.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mission::Catalog;

    #[test]
    fn unknown_mission_error_lists_valid_ids() {
        let catalog = Catalog::builtin().unwrap();
        let err = require_mission(&catalog, "nope").unwrap_err();

        let text = err.to_string();
        assert!(text.contains("unknown mission 'nope'"));
        assert!(text.contains("hello-soroban"));
    }

    #[test]
    fn status_tracks_completion_and_locks() {
        let catalog = Catalog::builtin().unwrap();
        let mut record = ProgressRecord::new();

        let first = catalog.by_id("hello-soroban").unwrap();
        let second = catalog.by_id("greetings-protocol").unwrap();
        let third = catalog.by_id("counter-vault").unwrap();

        assert_eq!(mission_status(&catalog, first, &record), "🔓");
        assert_eq!(mission_status(&catalog, second, &record), "🔒");

        record.completed_missions.push("hello-soroban".to_string());
        assert_eq!(mission_status(&catalog, first, &record), "✅");
        assert_eq!(mission_status(&catalog, second, &record), "🔓");
        assert_eq!(mission_status(&catalog, third, &record), "🔒");
    }
}
