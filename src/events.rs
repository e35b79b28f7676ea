//! Append-only event log.
//!
//! Every state-changing command appends one JSON line to `events.ndjson`
//! under the soroquest home. The log is observational: appends are
//! best-effort and a failed append never fails the command that triggered it.

use crate::context::QuestContext;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::io::Write;

/// What happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventAction {
    Attempt,
    Complete,
    Reset,
    Import,
    Export,
}

/// One logged event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    /// `user@host` of the invoking session.
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl Event {
    pub fn now(action: EventAction, mission: Option<&str>, details: Option<&str>) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor(),
            mission: mission.map(str::to_string),
            details: details.map(str::to_string),
        }
    }
}

fn actor() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());
    let host = hostname::get()
        .ok()
        .and_then(|h| h.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string());
    format!("{}@{}", user, host)
}

/// Append one event line. Errors are swallowed.
pub fn append_event(
    ctx: &QuestContext,
    action: EventAction,
    mission: Option<&str>,
    details: Option<&str>,
) {
    let event = Event::now(action, mission, details);
    let Ok(line) = serde_json::to_string(&event) else {
        return;
    };

    let _ = OpenOptions::new()
        .create(true)
        .append(true)
        .open(ctx.events_path())
        .and_then(|mut file| writeln!(file, "{}", line));
}
