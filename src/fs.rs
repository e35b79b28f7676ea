//! Atomic filesystem operations for soroquest.
//!
//! Progress is a single JSON file, and a crash mid-write must never leave it
//! half-written. All writes go through a temp-file-then-rename sequence:
//!
//! 1. Write content to `.{filename}.tmp` in the same directory
//! 2. Sync the file to disk (fsync)
//! 3. Rename over the original file
//!
//! Rename is atomic on POSIX when source and destination share a filesystem,
//! which holds here because the temp file lives next to the target.

use crate::error::{QuestError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories as needed.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            QuestError::StorageError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        QuestError::StorageError(format!("failed to replace '{}': {}", path.display(), e))
    })?;

    Ok(())
}

/// Temp file path in the same directory as the target: `.{filename}.tmp`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| QuestError::StorageError("invalid file path".to_string()))?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        QuestError::StorageError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content).map_err(|e| {
        let _ = fs::remove_file(path);
        QuestError::StorageError(format!("failed to write temporary file: {}", e))
    })?;

    file.sync_all().map_err(|e| {
        let _ = fs::remove_file(path);
        QuestError::StorageError(format!("failed to sync temporary file to disk: {}", e))
    })?;

    Ok(())
}
