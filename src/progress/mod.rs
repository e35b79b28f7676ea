//! Player progression: the persistent record, the XP curve, badge rules,
//! and the transitions that move a record forward.
//!
//! Transitions are copy-on-write: every function takes the current record by
//! reference and returns a new record plus an outcome describing what changed
//! in this call. Facts that are only true for one transition (a level-up, a
//! freshly earned badge) live in the outcome, never in the record, so a saved
//! record can always be reloaded without replaying history.

mod badges;
mod record;
mod transitions;
mod xp;

#[cfg(test)]
mod tests;

pub use badges::{badge_by_id, evaluate_badges, Badge, BadgeOutcome, BADGES};
pub use record::ProgressRecord;
pub use transitions::{award_xp, complete_mission, record_attempt, AwardOutcome, CompletionOutcome};
pub use xp::{level_from_xp, rank_title, xp_for_level, xp_progress, XpProgress};
