//! The XP curve and derived display values.

/// Multiplier of the level curve.
const LEVEL_BASE: f64 = 500.0;
/// Exponent of the level curve.
const LEVEL_EXPONENT: f64 = 1.5;

/// Rank titles by level. Levels past the table share the final title.
const RANK_TITLES: [&str; 11] = [
    "Initiate",
    "Apprentice",
    "Scribe",
    "Coder",
    "Architect",
    "Sentinel",
    "Guardian",
    "Master Guardian",
    "Elder",
    "Luminary",
    "Stellar Sovereign",
];

/// Total XP required to reach `level`.
///
/// Level 1 costs nothing; each level after follows
/// `floor(500 * (level - 1)^1.5)`.
pub fn xp_for_level(level: u32) -> u64 {
    if level <= 1 {
        return 0;
    }
    (LEVEL_BASE * f64::from(level - 1).powf(LEVEL_EXPONENT)).floor() as u64
}

/// Hard ceiling on the derived level. Reaching it legitimately would take
/// more XP than the mission catalog can award in a lifetime; the bound keeps
/// level derivation cheap even for absurd hand-edited XP values.
const MAX_LEVEL: u32 = 1_000;

/// The level an XP total corresponds to. Total order: more XP never means a
/// lower level.
pub fn level_from_xp(xp: u64) -> u32 {
    let mut level = 1;
    while level < MAX_LEVEL && xp_for_level(level + 1) <= xp {
        level += 1;
    }
    level
}

/// Title shown for a level.
pub fn rank_title(level: u32) -> &'static str {
    let index = (level as usize).min(RANK_TITLES.len() - 1);
    RANK_TITLES[index]
}

/// Progress through the current level, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct XpProgress {
    /// XP earned past the current level's threshold.
    pub current: u64,
    /// XP between the current level's threshold and the next.
    pub needed: u64,
    /// Percent of the way to the next level, clamped to 100.
    pub percentage: u32,
}

/// Compute display progress for a player at `level` holding `xp` total XP.
///
/// `level` is taken as given rather than re-derived, so a caller showing a
/// stale level still gets a coherent (clamped) bar.
pub fn xp_progress(xp: u64, level: u32) -> XpProgress {
    let floor = xp_for_level(level);
    let ceiling = xp_for_level(level + 1);
    let current = xp.saturating_sub(floor);
    let needed = ceiling.saturating_sub(floor).max(1);
    let percentage = ((current * 100) / needed).min(100) as u32;

    XpProgress {
        current,
        needed,
        percentage,
    }
}
