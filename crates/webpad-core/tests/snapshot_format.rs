//! Tests pinning the external snapshot file format.

use webpad_core::{compose, ProjectSnapshot, SnapshotError, KIND_WEB_ONLY, SNAPSHOT_VERSION};

#[test]
fn exported_json_uses_the_published_field_names() {
    let snapshot = ProjectSnapshot {
        assignment: "a".into(),
        test: "t".into(),
        html: "h".into(),
        css: "c".into(),
        js: "j".into(),
        ..Default::default()
    };
    let bytes = snapshot.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(value["version"], SNAPSHOT_VERSION);
    assert_eq!(value["kind"], KIND_WEB_ONLY);
    assert_eq!(value["assignment"], "a");
    assert_eq!(value["test"], "t");
    assert_eq!(value["html"], "h");
    assert_eq!(value["css"], "c");
    assert_eq!(value["js"], "j");
}

#[test]
fn parses_files_written_by_the_original_editor() {
    // Byte layout of a project file saved by the browser playground this
    // format is shared with.
    let file = br#"{
  "version": 1,
  "kind": "web-only",
  "assignment": "Center the box.",
  "test": "console.assert(!!document.querySelector('.box'))",
  "html": "<div class=\"box\"></div>",
  "css": ".box { margin: auto; }",
  "js": "console.log('ready')"
}"#;
    let snapshot = ProjectSnapshot::from_json(file).unwrap();
    assert_eq!(snapshot.html, r#"<div class="box"></div>"#);
    assert_eq!(snapshot.css, ".box { margin: auto; }");
    assert_eq!(snapshot.js, "console.log('ready')");
    assert_eq!(snapshot.assignment, "Center the box.");
}

#[test]
fn version_gate_rejects_future_files() {
    let err = ProjectSnapshot::from_json(br#"{"version": 99, "html": "<p></p>"}"#).unwrap_err();
    match err {
        SnapshotError::UnsupportedVersion { found } => assert_eq!(found, 99),
        other => panic!("expected version rejection, got {other}"),
    }
}

#[test]
fn missing_buffers_default_to_empty_text() {
    let snapshot = ProjectSnapshot::from_json(br#"{"html": "<p>only markup</p>"}"#).unwrap();
    assert_eq!(snapshot.html, "<p>only markup</p>");
    assert_eq!(snapshot.css, "");
    assert_eq!(snapshot.js, "");

    // And an all-defaults snapshot still composes a complete document.
    let doc = compose(&snapshot, true);
    assert!(doc.contains("<p>only markup</p>"));
    assert!(doc.contains("try {"));
}
