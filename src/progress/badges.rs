//! Badge definitions and evaluation.

use super::record::ProgressRecord;

/// One badge: identity, display strings, and the rule that earns it.
///
/// Rules are pure predicates over the record, so evaluation order within one
/// pass never matters and re-evaluating an already-earned badge is harmless.
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    rule: fn(&ProgressRecord) -> bool,
}

/// Every badge the tutor can award, in display order.
pub const BADGES: [Badge; 8] = [
    Badge {
        id: "first_contract",
        name: "First Contract",
        icon: "📜",
        description: "Complete your first mission",
        rule: |r| r.completed_missions.len() >= 1,
    },
    Badge {
        id: "triple_threat",
        name: "Triple Threat",
        icon: "⚡",
        description: "Complete 3 missions",
        rule: |r| r.completed_missions.len() >= 3,
    },
    Badge {
        id: "five_star",
        name: "Five Star",
        icon: "🌟",
        description: "Complete 5 missions",
        rule: |r| r.completed_missions.len() >= 5,
    },
    Badge {
        id: "completionist",
        name: "Completionist",
        icon: "👑",
        description: "Complete all 7 missions",
        rule: |r| r.completed_missions.len() >= 7,
    },
    Badge {
        id: "level_3",
        name: "Rising Star",
        icon: "🚀",
        description: "Reach level 3",
        rule: |r| r.level >= 3,
    },
    Badge {
        id: "level_5",
        name: "Seasoned Guardian",
        icon: "🛡️",
        description: "Reach level 5",
        rule: |r| r.level >= 5,
    },
    Badge {
        id: "xp_1000",
        name: "XP Hoarder",
        icon: "💰",
        description: "Accumulate 1000 XP",
        rule: |r| r.xp >= 1000,
    },
    Badge {
        id: "speed_demon",
        name: "Speed Demon",
        icon: "⚡",
        description: "Complete a mission on the first try",
        rule: |r| !r.first_try_completions.is_empty(),
    },
];

/// Badges newly earned in one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BadgeOutcome {
    /// Ids of badges earned by this pass, in table order.
    pub new_badges: Vec<&'static str>,
}

/// Evaluate every badge rule against `record` and append the newly earned
/// ones. Already-held badges are never re-awarded.
pub fn evaluate_badges(record: &ProgressRecord) -> (ProgressRecord, BadgeOutcome) {
    let mut next = record.clone();
    let mut outcome = BadgeOutcome::default();

    for badge in &BADGES {
        if !next.has_badge(badge.id) && (badge.rule)(&next) {
            next.badges.push(badge.id.to_string());
            outcome.new_badges.push(badge.id);
        }
    }

    (next, outcome)
}

/// Look up a badge definition by id.
pub fn badge_by_id(id: &str) -> Option<&'static Badge> {
    BADGES.iter().find(|b| b.id == id)
}
