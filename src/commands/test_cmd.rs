//! The `test` command: validate a submission and advance progression.

use super::load_catalog;
use super::missions::require_mission;
use crate::cli::TestArgs;
use crate::config::Config;
use crate::context::QuestContext;
use crate::error::{QuestError, Result};
use crate::events::{append_event, EventAction};
use crate::progress::{badge_by_id, complete_mission, rank_title, record_attempt};
use crate::runner::{run_tests, StagePhase, TestReport};
use crate::store;
use std::path::Path;
use std::thread;
use std::time::Duration;

/// Per-phase print delays. Presentation only.
#[derive(Debug, Clone, Copy)]
struct Pacing {
    stage_ms: u64,
    check_ms: u64,
}

impl Pacing {
    fn from_config(config: &Config) -> Self {
        Self {
            stage_ms: config.stage_delay_ms,
            check_ms: config.check_delay_ms,
        }
    }

    fn none() -> Self {
        Self {
            stage_ms: 0,
            check_ms: 0,
        }
    }
}

pub fn cmd_test(args: TestArgs) -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_test(&ctx, &args.mission_id, &args.file, args.no_delay)
}

pub(crate) fn run_test(
    ctx: &QuestContext,
    mission_id: &str,
    file: &Path,
    no_delay: bool,
) -> Result<()> {
    ctx.ensure_home()?;
    let config = Config::load(ctx.config_path())?;
    let catalog = load_catalog(ctx, &config)?;
    let mission = require_mission(&catalog, mission_id)?;
    let code = read_submission(file)?;
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

    // The attempt counts even when validation fails; persist before running.
    let record = record_attempt(&record, &mission.id);
    store::save(ctx, &record)?;
    append_event(ctx, EventAction::Attempt, Some(&mission.id), None);

    let report = run_tests(&code, mission);
    let pacing = if no_delay {
        Pacing::none()
    } else {
        Pacing::from_config(&config)
    };
    print_report(&report, pacing);

    if !report.all_passed {
        return Err(QuestError::ValidationError(format!(
            "{}/{} checks passed",
            report.passed_count, report.total_count
        )));
    }

    let (next, outcome) = complete_mission(&record, &mission.id, mission.xp_reward);
    store::save(ctx, &next)?;
    append_event(
        ctx,
        EventAction::Complete,
        Some(&mission.id),
        Some(&format!("xp={}", outcome.xp_awarded)),
    );

    println!();
    if outcome.already_completed {
        println!("📘 Mission was already completed - no new rewards.");
    } else {
        println!("⭐ +{} XP", outcome.xp_awarded);
        if outcome.leveled_up {
            println!(
                "🎖️  Level up! You are now level {} ({})",
                outcome.new_level,
                rank_title(outcome.new_level)
            );
        }
        for badge_id in &outcome.new_badges {
            if let Some(badge) = badge_by_id(badge_id) {
                println!("{} New badge: {}", badge.icon, badge.name);
            }
        }
    }

    if let Some(next_mission) = catalog.next_after(&mission.id) {
        println!(
            "Next mission: {} ({})",
            next_mission.id, next_mission.title
        );
    }
    Ok(())
}

fn read_submission(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).map_err(|e| {
        QuestError::UserError(format!(
            "could not read '{}': {}\nFix: check the path, or run `soroquest start` to create it.",
            file.display(),
            e
        ))
    })
}

fn print_report(report: &TestReport, pacing: Pacing) {
    for stage in &report.stages {
        println!("{}", stage.label);
        let delay = match stage.phase {
            StagePhase::Syntax | StagePhase::Structure => pacing.stage_ms,
            StagePhase::Check => pacing.check_ms,
        };
        if delay > 0 {
            thread::sleep(Duration::from_millis(delay));
        }
        println!("   {}", stage.message);
    }
    println!();
    println!("{}", report.summary);
}
