//! Configuration model for soroquest.
//!
//! This module defines the Config struct that represents `config.yaml` in the
//! soroquest home directory. It supports forward-compatible YAML parsing
//! (unknown fields are ignored) and sensible defaults for all fields, so a
//! missing config file is the common case and works out of the box.

use crate::error::{QuestError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Configuration for the soroquest CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Extra directory of mission YAML files, merged over the built-in
    /// catalog. Relative paths are resolved against the home directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub missions_dir: Option<PathBuf>,

    /// Delay between orchestrated test phases, in milliseconds. Presentation
    /// only: the report is identical with pacing disabled.
    pub stage_delay_ms: u64,

    /// Delay between individual mission checks, in milliseconds.
    pub check_delay_ms: u64,
}

fn default_stage_delay_ms() -> u64 {
    300
}

fn default_check_delay_ms() -> u64 {
    200
}

impl Default for Config {
    fn default() -> Self {
        Self {
            missions_dir: None,
            stage_delay_ms: default_stage_delay_ms(),
            check_delay_ms: default_check_delay_ms(),
        }
    }
}

impl Config {
    /// Load config from a YAML file.
    ///
    /// A missing file yields the defaults; a present-but-invalid file is a
    /// `ConfigError` so typos don't silently revert settings.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| {
            QuestError::ConfigError(format!("failed to read '{}': {}", path.display(), e))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            QuestError::ConfigError(format!(
                "invalid config '{}': {}\nFix: correct the YAML or delete the file to use defaults.",
                path.display(),
                e
            ))
        })
    }
}
