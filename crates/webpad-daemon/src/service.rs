use std::sync::{Mutex, RwLock};

use anyhow::{Context, Result};
use tracing::{debug, error};

use webpad_core::{
    compose, ActivityEntry, ActivityLevel, ActivityLog, BufferPatch, ProjectSnapshot, Workbench,
    BLANK_DOCUMENT,
};
use webpad_storage::ProjectStore;

/// Suggested filename for exported project files.
pub const EXPORT_FILENAME: &str = "webpad-project.json";

/// The imperative shell around the core: owns the live workbench, the
/// activity feed, the published preview document, and the durable store.
/// Each operation takes its locks, runs to completion, and releases them,
/// so state transitions are atomic per request and a snapshot is built and
/// consumed inside a single operation.
pub struct PlaygroundService {
    store: Box<dyn ProjectStore>,
    slot: String,
    workbench: Mutex<Workbench>,
    activity: Mutex<ActivityLog>,
    published: RwLock<Option<String>>,
}

impl PlaygroundService {
    pub fn new(store: Box<dyn ProjectStore>, slot: impl Into<String>) -> Self {
        Self {
            store,
            slot: slot.into(),
            workbench: Mutex::new(Workbench::default()),
            activity: Mutex::new(ActivityLog::new()),
            published: RwLock::new(None),
        }
    }

    /// Load the durable slot into the workbench, or seed placeholder
    /// content when nothing readable is stored. Always ends with the ready
    /// banner so the feed is never empty.
    pub fn bootstrap(&self) {
        match self.store.get(&self.slot) {
            Ok(Some(snapshot)) => {
                self.workbench.lock().unwrap().restore(&snapshot);
                self.log(ActivityLevel::Info, "Web project loaded.");
            }
            Ok(None) => {
                self.workbench.lock().unwrap().apply_placeholders();
            }
            Err(e) => {
                self.workbench.lock().unwrap().apply_placeholders();
                self.log(
                    ActivityLevel::Error,
                    format!("Failed to load project: {e:#}"),
                );
            }
        }
        self.log(ActivityLevel::Info, "Ready - web editor (HTML/CSS/JS)");
    }

    /// Trigger mode (a): compose from the current buffers and publish into
    /// the embedded preview slot, replacing any prior document wholesale.
    ///
    /// Success means "document delivered to the preview", never anything
    /// about the user script's behavior: a script that throws still
    /// renders, with the error contained by the document's own catch.
    pub fn render(&self, include_tests: bool) {
        let snapshot = self.workbench.lock().unwrap().snapshot();
        let doc = compose(&snapshot, include_tests);
        *self.published.write().unwrap() = Some(doc);
        let message = if include_tests {
            "Run with tests."
        } else {
            "Preview updated."
        };
        self.log(ActivityLevel::Info, message);
    }

    /// Latest published preview document, or a blank document before the
    /// first render.
    pub fn preview_document(&self) -> String {
        self.published
            .read()
            .unwrap()
            .clone()
            .unwrap_or_else(|| BLANK_DOCUMENT.to_string())
    }

    /// Trigger mode (b): a fresh standalone composition of the current
    /// buffers (tests excluded), independent of the embedded preview. Uses
    /// the same compositor as `render`; there is no second algorithm.
    pub fn standalone_document(&self) -> String {
        let snapshot = self.workbench.lock().unwrap().snapshot();
        compose(&snapshot, false)
    }

    /// Persist the current buffers into the durable slot. A failure here
    /// is a programming or environment fault, not an authoring mistake, so
    /// it goes to the diagnostic channel and the slot is left as it was.
    pub fn save(&self) {
        let snapshot = self.workbench.lock().unwrap().snapshot();
        match self.store.put(&self.slot, &snapshot) {
            Ok(()) => self.log(ActivityLevel::Info, "Project saved."),
            Err(e) => error!("failed to persist project: {e:#}"),
        }
    }

    /// Serialized snapshot bytes for file export, plus the fixed suggested
    /// filename.
    pub fn export(&self) -> Result<(&'static str, Vec<u8>)> {
        let snapshot = self.workbench.lock().unwrap().snapshot();
        let bytes = snapshot.to_json_pretty().context("serialize project")?;
        self.log(ActivityLevel::Info, "Project exported.");
        Ok((EXPORT_FILENAME, bytes))
    }

    /// Restore a project from uploaded file bytes. Returns whether the
    /// restore happened: a parse failure logs an error entry and leaves
    /// both the buffers and the durable slot untouched.
    pub fn import(&self, bytes: &[u8]) -> bool {
        match ProjectSnapshot::from_json(bytes) {
            Ok(snapshot) => {
                self.workbench.lock().unwrap().restore(&snapshot);
                self.log(ActivityLevel::Info, "Web project loaded.");
                true
            }
            Err(e) => {
                self.log(ActivityLevel::Error, format!("Invalid project file: {e}"));
                false
            }
        }
    }

    /// Current buffer contents, for the external editor surface.
    pub fn buffers(&self) -> Workbench {
        self.workbench.lock().unwrap().clone()
    }

    /// Apply a partial buffer update from an editor client.
    pub fn update_buffers(&self, patch: BufferPatch) {
        self.workbench.lock().unwrap().apply_patch(patch);
    }

    pub fn activity(&self) -> Vec<ActivityEntry> {
        self.activity.lock().unwrap().entries().to_vec()
    }

    pub fn clear_activity(&self) {
        self.activity.lock().unwrap().clear();
        debug!("cleared activity feed");
    }

    fn log(&self, level: ActivityLevel, message: impl Into<String>) {
        self.activity.lock().unwrap().push(level, message);
    }
}
