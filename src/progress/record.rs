//! The persistent progression record.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::xp::level_from_xp;

/// Everything the tutor remembers about a player between sessions.
///
/// Unknown fields in a stored record are ignored on load and missing fields
/// take their defaults, so records written by older or newer versions still
/// load.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressRecord {
    /// Total accumulated XP. The level is always derived from this.
    pub xp: u64,
    /// Cached level; re-derived from `xp` by [`ProgressRecord::normalized`].
    pub level: u32,
    /// Mission ids completed at least once, in completion order.
    pub completed_missions: Vec<String>,
    /// Badge ids earned, in earn order.
    pub badges: Vec<String>,
    /// Submission attempts per mission id, counted across all sessions.
    pub attempts: BTreeMap<String, u32>,
    /// Missions completed on the first recorded attempt.
    pub first_try_completions: Vec<String>,
    /// Mission last started with `soroquest start`, if any.
    pub current_mission: Option<String>,
}

impl ProgressRecord {
    /// A fresh record for a new player.
    pub fn new() -> Self {
        Self {
            level: 1,
            ..Self::default()
        }
    }

    /// Repair invariants after deserialization: the level always matches the
    /// XP total, and the completion and badge lists carry no duplicates.
    pub fn normalized(mut self) -> Self {
        self.level = level_from_xp(self.xp);
        dedup_preserving_order(&mut self.completed_missions);
        dedup_preserving_order(&mut self.badges);
        dedup_preserving_order(&mut self.first_try_completions);
        // A first-try entry only makes sense for a completed mission.
        let completed = self.completed_missions.clone();
        self.first_try_completions
            .retain(|id| completed.contains(id));
        self
    }

    pub fn has_completed(&self, mission_id: &str) -> bool {
        self.completed_missions.iter().any(|id| id == mission_id)
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.iter().any(|id| id == badge_id)
    }

    pub fn attempts_for(&self, mission_id: &str) -> u32 {
        self.attempts.get(mission_id).copied().unwrap_or(0)
    }
}

fn dedup_preserving_order(items: &mut Vec<String>) {
    let mut seen = std::collections::BTreeSet::new();
    items.retain(|item| seen.insert(item.clone()));
}
