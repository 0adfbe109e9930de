use thiserror::Error;

/// Failures at the snapshot parse/serialize boundary.
#[derive(Debug, Error)]
pub enum SnapshotError {
    /// The input carries a schema version this build does not understand.
    #[error("unsupported snapshot version {found}")]
    UnsupportedVersion { found: u32 },
    /// The input could not be read as a keyed JSON document.
    #[error("malformed snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}
