use std::collections::HashMap;
use std::sync::Mutex;

use webpad_core::ProjectSnapshot;

use crate::traits::ProjectStore;

/// In-memory store for tests. Not durable, but good for unit/small
/// scenario tests.
#[derive(Default)]
pub struct InMemoryStore {
    inner: Mutex<HashMap<String, ProjectSnapshot>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProjectStore for InMemoryStore {
    fn put(&self, slot: &str, snapshot: &ProjectSnapshot) -> anyhow::Result<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.insert(slot.to_string(), snapshot.clone());
        Ok(())
    }

    fn get(&self, slot: &str) -> anyhow::Result<Option<ProjectSnapshot>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.get(slot).cloned())
    }
}
