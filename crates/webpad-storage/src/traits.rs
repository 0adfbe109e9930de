use webpad_core::ProjectSnapshot;

/// Durable project persistence: each named slot holds the latest snapshot
/// written to it, nothing else. A write replaces the slot wholesale.
pub trait ProjectStore: Send + Sync {
    fn put(&self, slot: &str, snapshot: &ProjectSnapshot) -> anyhow::Result<()>;

    /// Returns `None` when the slot has never been written.
    fn get(&self, slot: &str) -> anyhow::Result<Option<ProjectSnapshot>>;
}
