//! Mission data model.

use crate::checks::Check;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Mission difficulty tier, for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// One mission: story, template, reward, and the checks a submission must
/// pass.
///
/// The core never validates catalog integrity beyond what check evaluation
/// naturally requires; a mission with an empty check list simply passes on
/// any structurally valid contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mission {
    pub id: String,
    pub title: String,
    #[serde(default = "default_chapter")]
    pub chapter: u32,
    /// Position within the overall progression; missions unlock in this
    /// order.
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub difficulty: Difficulty,
    pub xp_reward: u64,
    /// Markdown narrative shown by `soroquest show`.
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub learning_goal: String,
    /// Starting code written out by `soroquest start`.
    #[serde(default)]
    pub template: String,
    /// Reference solution; must pass this mission's own checks.
    #[serde(default)]
    pub solution: String,
    #[serde(default)]
    pub checks: Vec<Check>,
    #[serde(default)]
    pub hints: Vec<String>,
    #[serde(default)]
    pub concepts_introduced: Vec<String>,
}

fn default_chapter() -> u32 {
    1
}
