use serde::{Deserialize, Serialize};

use crate::util::now_ms;

/// Severity of an activity entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Info,
    Warn,
    Error,
}

/// One user-visible line in the activity feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// Unix epoch milliseconds at append time.
    pub at_ms: i64,
    pub level: ActivityLevel,
    pub message: String,
}

/// Append-only feed of operation outcomes shown to the user. Entries are
/// removed only by an explicit full clear.
#[derive(Clone, Debug, Default)]
pub struct ActivityLog {
    entries: Vec<ActivityEntry>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, level: ActivityLevel, message: impl Into<String>) {
        self.entries.push(ActivityEntry {
            at_ms: now_ms(),
            level,
            message: message.into(),
        });
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ActivityLevel::Info, message);
    }

    pub fn warn(&mut self, message: impl Into<String>) {
        self.push(ActivityLevel::Warn, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ActivityLevel::Error, message);
    }

    pub fn entries(&self) -> &[ActivityEntry] {
        &self.entries
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
