use serde::{Deserialize, Serialize};

use crate::error::SnapshotError;

/// Current snapshot schema version. Parsers reject any other value instead
/// of guessing at field meanings.
pub const SNAPSHOT_VERSION: u32 = 1;

/// Editor-configuration tag for the single supported layout (three web
/// panes). Carried verbatim through save/load; reserved for future layouts.
pub const KIND_WEB_ONLY: &str = "web-only";

/// Serializable project snapshot: the exact shape written to the durable
/// slot and to exported project files.
///
/// A snapshot is a short-lived value: built from the live buffers right
/// before composition or persistence, consumed once, then dropped. Every
/// field carries a serde default so a structurally partial document still
/// parses; only a non-object body or an unknown `version` rejects the
/// input as a whole.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectSnapshot {
    /// Schema version tag.
    #[serde(default = "default_version")]
    pub version: u32,
    /// Editor configuration tag, currently always `"web-only"`.
    #[serde(default = "default_kind")]
    pub kind: String,
    /// Instructional prompt shown to the author. Opaque, never executed.
    #[serde(default)]
    pub assignment: String,
    /// Test script, appended to the composed document only on request.
    #[serde(default)]
    pub test: String,
    /// Markup buffer.
    #[serde(default)]
    pub html: String,
    /// Style buffer.
    #[serde(default)]
    pub css: String,
    /// Script buffer.
    #[serde(default)]
    pub js: String,
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

fn default_kind() -> String {
    KIND_WEB_ONLY.to_string()
}

impl Default for ProjectSnapshot {
    fn default() -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            kind: KIND_WEB_ONLY.to_string(),
            assignment: String::new(),
            test: String::new(),
            html: String::new(),
            css: String::new(),
            js: String::new(),
        }
    }
}

impl ProjectSnapshot {
    /// Parse a serialized snapshot. Missing fields default per-field;
    /// failure is all-or-nothing and only happens when the bytes are not a
    /// keyed JSON document or the version is unsupported.
    pub fn from_json(bytes: &[u8]) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_slice(bytes)?;
        if snapshot.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: snapshot.version,
            });
        }
        Ok(snapshot)
    }

    /// Serialized byte form used for the durable slot and file export.
    pub fn to_json_pretty(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(serde_json::to_vec_pretty(self)?)
    }
}
