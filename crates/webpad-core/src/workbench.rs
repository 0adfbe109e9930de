use serde::{Deserialize, Serialize};

use crate::model::{ProjectSnapshot, KIND_WEB_ONLY, SNAPSHOT_VERSION};

/// Placeholder content for each code buffer, applied on a cold start so
/// the editors are never blank before the first saved project exists.
pub const PLACEHOLDER_HTML: &str = "<!-- Write your html code here -->";
pub const PLACEHOLDER_CSS: &str = "/* Write your CSS code here */";
pub const PLACEHOLDER_JS: &str = "// Write your JavaScript code here";

/// Live editing state: the three code buffers plus the assignment prompt
/// and the test snippet. The shell owns exactly one of these; a
/// `ProjectSnapshot` is an independent copy taken at a single instant,
/// never a live reference into the workbench.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Workbench {
    pub html: String,
    pub css: String,
    pub js: String,
    pub test: String,
    pub assignment: String,
}

/// Partial buffer update from an editor client. Unset fields keep their
/// current text.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BufferPatch {
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub css: Option<String>,
    #[serde(default)]
    pub js: Option<String>,
    #[serde(default)]
    pub test: Option<String>,
    #[serde(default)]
    pub assignment: Option<String>,
}

impl Workbench {
    /// Copy of the current buffers tagged with the current schema version.
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            version: SNAPSHOT_VERSION,
            kind: KIND_WEB_ONLY.to_string(),
            assignment: self.assignment.clone(),
            test: self.test.clone(),
            html: self.html.clone(),
            css: self.css.clone(),
            js: self.js.clone(),
        }
    }

    /// Overwrite every buffer from a parsed snapshot. Fields that were
    /// absent in the original input are already empty strings by the time
    /// they get here, so restore is total over parsed snapshots.
    pub fn restore(&mut self, snapshot: &ProjectSnapshot) {
        self.html = snapshot.html.clone();
        self.css = snapshot.css.clone();
        self.js = snapshot.js.clone();
        self.test = snapshot.test.clone();
        self.assignment = snapshot.assignment.clone();
    }

    /// Default content for a cold start: per-language placeholder comments
    /// in the code buffers, assignment and test left empty.
    pub fn apply_placeholders(&mut self) {
        self.html = PLACEHOLDER_HTML.to_string();
        self.css = PLACEHOLDER_CSS.to_string();
        self.js = PLACEHOLDER_JS.to_string();
        self.test.clear();
        self.assignment.clear();
    }

    /// Apply a partial update; unset fields are untouched.
    pub fn apply_patch(&mut self, patch: BufferPatch) {
        if let Some(html) = patch.html {
            self.html = html;
        }
        if let Some(css) = patch.css {
            self.css = css;
        }
        if let Some(js) = patch.js {
            self.js = js;
        }
        if let Some(test) = patch.test {
            self.test = test;
        }
        if let Some(assignment) = patch.assignment {
            self.assignment = assignment;
        }
    }
}
