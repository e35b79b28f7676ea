//! Mission catalog: built-in missions plus optional user-supplied files.

use super::model::Mission;
use crate::error::{QuestError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Built-in mission files, embedded at compile time.
const BUILTIN_MISSIONS: [(&str, &str); 7] = [
    (
        "hello-soroban.yaml",
        include_str!("../../missions/hello-soroban.yaml"),
    ),
    (
        "greetings-protocol.yaml",
        include_str!("../../missions/greetings-protocol.yaml"),
    ),
    (
        "counter-vault.yaml",
        include_str!("../../missions/counter-vault.yaml"),
    ),
    (
        "guardian-ledger.yaml",
        include_str!("../../missions/guardian-ledger.yaml"),
    ),
    (
        "token-forge.yaml",
        include_str!("../../missions/token-forge.yaml"),
    ),
    (
        "time-lock.yaml",
        include_str!("../../missions/time-lock.yaml"),
    ),
    (
        "multi-party-pact.yaml",
        include_str!("../../missions/multi-party-pact.yaml"),
    ),
];

/// An ordered mission catalog.
///
/// Missions are sorted by (chapter, order, id); unlock progression follows
/// that order.
#[derive(Debug, Clone)]
pub struct Catalog {
    missions: Vec<Mission>,
}

impl Catalog {
    /// The catalog embedded in the binary.
    pub fn builtin() -> Result<Self> {
        let mut missions = Vec::with_capacity(BUILTIN_MISSIONS.len());
        for (name, content) in BUILTIN_MISSIONS {
            let mission: Mission = serde_yaml::from_str(content).map_err(|e| {
                QuestError::ConfigError(format!("invalid built-in mission '{}': {}", name, e))
            })?;
            missions.push(mission);
        }
        Ok(Self::from_missions(missions))
    }

    /// Built-in catalog merged with mission files from a directory.
    ///
    /// Every `*.yaml`/`*.yml` file in the directory is one mission. A file
    /// whose id matches a built-in mission replaces it; new ids extend the
    /// catalog.
    pub fn builtin_with_dir<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let mut catalog = Self::builtin()?;
        let dir = dir.as_ref();

        if !dir.exists() {
            return Ok(catalog);
        }

        let entries = fs::read_dir(dir).map_err(|e| {
            QuestError::ConfigError(format!(
                "failed to read missions directory '{}': {}",
                dir.display(),
                e
            ))
        })?;

        let mut paths: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| {
                matches!(
                    path.extension().and_then(|e| e.to_str()),
                    Some("yaml") | Some("yml")
                )
            })
            .collect();
        // Directory iteration order is platform-dependent; sort for
        // deterministic replacement behavior.
        paths.sort();

        for path in paths {
            let content = fs::read_to_string(&path).map_err(|e| {
                QuestError::ConfigError(format!("failed to read '{}': {}", path.display(), e))
            })?;
            let mission: Mission = serde_yaml::from_str(&content).map_err(|e| {
                QuestError::ConfigError(format!("invalid mission '{}': {}", path.display(), e))
            })?;
            catalog.upsert(mission);
        }

        catalog.sort();
        Ok(catalog)
    }

    fn from_missions(mut missions: Vec<Mission>) -> Self {
        missions.sort_by(|a, b| {
            (a.chapter, a.order, &a.id).cmp(&(b.chapter, b.order, &b.id))
        });
        Self { missions }
    }

    fn sort(&mut self) {
        self.missions.sort_by(|a, b| {
            (a.chapter, a.order, &a.id).cmp(&(b.chapter, b.order, &b.id))
        });
    }

    fn upsert(&mut self, mission: Mission) {
        if let Some(existing) = self.missions.iter_mut().find(|m| m.id == mission.id) {
            *existing = mission;
        } else {
            self.missions.push(mission);
        }
    }

    /// All missions in progression order.
    pub fn all(&self) -> &[Mission] {
        &self.missions
    }

    pub fn by_id(&self, id: &str) -> Option<&Mission> {
        self.missions.iter().find(|m| m.id == id)
    }

    /// Missions grouped by chapter, chapters ascending.
    pub fn by_chapter(&self) -> BTreeMap<u32, Vec<&Mission>> {
        let mut chapters: BTreeMap<u32, Vec<&Mission>> = BTreeMap::new();
        for mission in &self.missions {
            chapters.entry(mission.chapter).or_default().push(mission);
        }
        chapters
    }

    /// The mission after `id` in progression order, if any.
    pub fn next_after(&self, id: &str) -> Option<&Mission> {
        let idx = self.missions.iter().position(|m| m.id == id)?;
        self.missions.get(idx + 1)
    }

    /// The mission before `id` in progression order, if any.
    pub fn previous_before(&self, id: &str) -> Option<&Mission> {
        let idx = self.missions.iter().position(|m| m.id == id)?;
        idx.checked_sub(1).and_then(|i| self.missions.get(i))
    }

    /// Whether a mission is unlocked given the set of completed mission ids.
    ///
    /// The first mission is always unlocked; each later mission requires the
    /// previous one to be completed.
    pub fn is_unlocked(&self, id: &str, completed: &[String]) -> bool {
        let Some(idx) = self.missions.iter().position(|m| m.id == id) else {
            return false;
        };
        if idx == 0 {
            return true;
        }
        let previous = &self.missions[idx - 1];
        completed.iter().any(|c| c == &previous.id)
    }
}
