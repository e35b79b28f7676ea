//! Progress persistence: one JSON file under the soroquest home.
//!
//! Loading is forgiving: a missing file means a fresh player and a corrupt
//! file falls back to a fresh record rather than wedging the CLI. Imports are
//! the opposite: an explicitly supplied snapshot that does not parse is an
//! error the user must see.

use crate::context::QuestContext;
use crate::error::{QuestError, Result};
use crate::fs::atomic_write_file;
use crate::progress::ProgressRecord;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Load the progress record, normalizing invariants after deserialization.
///
/// Absent or unreadable-as-JSON files yield a fresh record.
pub fn load(ctx: &QuestContext) -> Result<ProgressRecord> {
    let path = ctx.progress_path();
    if !path.exists() {
        return Ok(ProgressRecord::new());
    }

    let content = fs::read_to_string(&path).map_err(|e| {
        QuestError::StorageError(format!("failed to read '{}': {}", path.display(), e))
    })?;

    match serde_json::from_str::<ProgressRecord>(&content) {
        Ok(record) => Ok(record.normalized()),
        Err(_) => Ok(ProgressRecord::new()),
    }
}

/// Atomically persist the progress record as pretty-printed JSON.
pub fn save(ctx: &QuestContext, record: &ProgressRecord) -> Result<()> {
    let json = serde_json::to_string_pretty(record)
        .map_err(|e| QuestError::StorageError(format!("failed to serialize progress: {}", e)))?;
    atomic_write_file(ctx.progress_path(), &json)
}

/// Delete the stored record. Missing file counts as already reset.
pub fn reset(ctx: &QuestContext) -> Result<()> {
    let path = ctx.progress_path();
    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            QuestError::StorageError(format!("failed to remove '{}': {}", path.display(), e))
        })?;
    }
    Ok(())
}

/// Write the current record to `dest` as a portable snapshot.
pub fn export_snapshot(ctx: &QuestContext, dest: &Path) -> Result<ProgressRecord> {
    let record = load(ctx)?;
    let json = serde_json::to_string_pretty(&record)
        .map_err(|e| QuestError::StorageError(format!("failed to serialize progress: {}", e)))?;
    atomic_write_file(dest, &json)?;
    Ok(record)
}

/// Replace the stored record with a snapshot from `src`.
///
/// Unlike [`load`], a snapshot that does not parse is an error: the user
/// named this file explicitly and silently discarding it would lose data.
pub fn import_snapshot(ctx: &QuestContext, src: &Path) -> Result<ProgressRecord> {
    let content = fs::read_to_string(src).map_err(|e| {
        QuestError::StorageError(format!("failed to read '{}': {}", src.display(), e))
    })?;

    let record: ProgressRecord = serde_json::from_str(&content).map_err(|e| {
        QuestError::StorageError(format!("invalid progress snapshot '{}': {}", src.display(), e))
    })?;

    let record = record.normalized();
    save(ctx, &record)?;
    Ok(record)
}

/// Date-stamped default filename for exports.
pub fn default_export_filename() -> String {
    format!("soroquest-progress-{}.json", Local::now().format("%Y-%m-%d"))
}
