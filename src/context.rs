//! Home directory resolution for soroquest.
//!
//! All durable state (config, progress, event log, custom missions) lives
//! under a single home directory. The default is `~/.soroquest`, overridable
//! with the `SOROQUEST_HOME` environment variable so tests and multi-profile
//! setups can point at their own directory.

use crate::error::{QuestError, Result};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable that overrides the home directory.
pub const HOME_ENV: &str = "SOROQUEST_HOME";

/// Default home directory name under the user's home.
pub const DEFAULT_HOME_DIR: &str = ".soroquest";

/// Resolved paths for soroquest state.
///
/// All paths are derived from the home directory; nothing else in the crate
/// constructs state paths directly.
#[derive(Debug, Clone)]
pub struct QuestContext {
    /// Absolute path to the soroquest home directory.
    pub home: PathBuf,
}

impl QuestContext {
    /// Resolve the context from the environment.
    ///
    /// Order: `SOROQUEST_HOME`, then `$HOME/.soroquest` (or `%USERPROFILE%`
    /// on Windows).
    pub fn resolve() -> Result<Self> {
        if let Ok(home) = env::var(HOME_ENV)
            && !home.trim().is_empty()
        {
            return Ok(Self::at(PathBuf::from(home)));
        }

        let user_home = env::var("HOME")
            .or_else(|_| env::var("USERPROFILE"))
            .map_err(|_| {
                QuestError::UserError(format!(
                    "could not determine home directory.\n\
                     Fix: set {} to the directory soroquest should use for its state.",
                    HOME_ENV
                ))
            })?;

        Ok(Self::at(PathBuf::from(user_home).join(DEFAULT_HOME_DIR)))
    }

    /// Build a context rooted at a specific directory (used by tests).
    pub fn at<P: Into<PathBuf>>(home: P) -> Self {
        Self { home: home.into() }
    }

    /// Path to the YAML config file.
    pub fn config_path(&self) -> PathBuf {
        self.home.join("config.yaml")
    }

    /// Path to the persisted progress record.
    pub fn progress_path(&self) -> PathBuf {
        self.home.join("progress.json")
    }

    /// Path to the append-only event log.
    pub fn events_path(&self) -> PathBuf {
        self.home.join("events.ndjson")
    }

    /// Default directory for user-supplied mission files.
    pub fn missions_dir(&self) -> PathBuf {
        self.home.join("missions")
    }

    /// Create the home directory if it does not exist yet.
    pub fn ensure_home(&self) -> Result<()> {
        if !self.home.exists() {
            fs::create_dir_all(&self.home).map_err(|e| {
                QuestError::StorageError(format!(
                    "failed to create home directory '{}': {}",
                    self.home.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl AsRef<Path> for QuestContext {
    fn as_ref(&self) -> &Path {
        &self.home
    }
}
