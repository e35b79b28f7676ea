//! The `profile` command: progression summary.

use crate::context::QuestContext;
use crate::error::Result;
use crate::progress::{badge_by_id, rank_title, xp_progress};
use crate::store;

pub fn cmd_profile() -> Result<()> {
    let ctx = QuestContext::resolve()?;
    run_profile(&ctx)
}

pub(crate) fn run_profile(ctx: &QuestContext) -> Result<()> {
    let record = store::load(ctx)?;

    println!("🛡️  Guardian Profile");
    println!();
    println!("Level {} - {}", record.level, rank_title(record.level));

    let progress = xp_progress(record.xp, record.level);
    println!(
        "XP: {} total  [{}] {}/{} to next level",
        record.xp,
        progress_bar(progress.percentage),
        progress.current,
        progress.needed
    );
    println!();

    if record.badges.is_empty() {
        println!("Badges: none yet");
    } else {
        println!("Badges:");
        for badge_id in &record.badges {
            if let Some(badge) = badge_by_id(badge_id) {
                println!("  {} {} - {}", badge.icon, badge.name, badge.description);
            }
        }
    }
    println!();

    println!("Missions completed: {}", record.completed_missions.len());
    for id in &record.completed_missions {
        println!("  ✅ {}", id);
    }

    if let Some(current) = &record.current_mission {
        println!();
        println!("In progress: {}", current);
    }

    let total_attempts: u32 = record.attempts.values().sum();
    if total_attempts > 0 {
        println!();
        println!("Total attempts: {}", total_attempts);
    }
    Ok(())
}

/// Ten-slot text progress bar.
fn progress_bar(percentage: u32) -> String {
    let filled = (percentage.min(100) / 10) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled))
}
