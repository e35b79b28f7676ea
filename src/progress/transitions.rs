//! State transitions over the progress record.

use super::badges::evaluate_badges;
use super::record::ProgressRecord;
use super::xp::level_from_xp;

/// What one XP award changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AwardOutcome {
    pub xp_awarded: u64,
    pub leveled_up: bool,
    pub new_level: u32,
}

/// What one mission completion changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    /// True when the mission was already complete; nothing else changed.
    pub already_completed: bool,
    pub xp_awarded: u64,
    pub leveled_up: bool,
    pub new_level: u32,
    /// True when this completion happened on the first recorded attempt.
    pub first_try: bool,
    /// Badge ids earned by this completion, in award order.
    pub new_badges: Vec<&'static str>,
}

/// Record one submission attempt against a mission.
pub fn record_attempt(record: &ProgressRecord, mission_id: &str) -> ProgressRecord {
    let mut next = record.clone();
    *next.attempts.entry(mission_id.to_string()).or_insert(0) += 1;
    next
}

/// Add XP and re-derive the level.
pub fn award_xp(record: &ProgressRecord, amount: u64) -> (ProgressRecord, AwardOutcome) {
    let mut next = record.clone();
    next.xp += amount;
    next.level = level_from_xp(next.xp);

    let outcome = AwardOutcome {
        xp_awarded: amount,
        leveled_up: next.level > record.level,
        new_level: next.level,
    };
    (next, outcome)
}

/// Mark a mission complete, award its XP, and evaluate badges.
///
/// Completing an already-complete mission is a no-op: the returned record
/// equals the input and the outcome says so. Repeating a completion can
/// therefore never double-award XP or badges.
pub fn complete_mission(
    record: &ProgressRecord,
    mission_id: &str,
    xp_reward: u64,
) -> (ProgressRecord, CompletionOutcome) {
    if record.has_completed(mission_id) {
        return (
            record.clone(),
            CompletionOutcome {
                already_completed: true,
                xp_awarded: 0,
                leveled_up: false,
                new_level: record.level,
                first_try: false,
                new_badges: Vec::new(),
            },
        );
    }

    let (mut next, award) = award_xp(record, xp_reward);
    next.completed_missions.push(mission_id.to_string());

    let first_try = next.attempts_for(mission_id) <= 1;
    if first_try {
        next.first_try_completions.push(mission_id.to_string());
    }

    if next.current_mission.as_deref() == Some(mission_id) {
        next.current_mission = None;
    }

    let (next, badges) = evaluate_badges(&next);

    let outcome = CompletionOutcome {
        already_completed: false,
        xp_awarded: award.xp_awarded,
        leveled_up: award.leveled_up,
        new_level: award.new_level,
        first_try,
        new_badges: badges.new_badges,
    };
    (next, outcome)
}
