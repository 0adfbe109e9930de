use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use webpad_core::{now_ms, ProjectSnapshot};
use webpad_storage::ProjectStore;

/// SQLite-backed project store. The whole snapshot is kept as one
/// serialized JSON body per slot, so the table stays schema-stable while
/// the snapshot format evolves behind its own version tag.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).ok();
        }
        let conn = Connection::open(db_path)
            .with_context(|| format!("open sqlite db {}", db_path.display()))?;
        // init schema
        let init_sql = include_str!("../migrations/0001_init.sql");
        conn.execute_batch(init_sql)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

impl ProjectStore for SqliteStore {
    fn put(&self, slot: &str, snapshot: &ProjectSnapshot) -> Result<()> {
        let body = String::from_utf8(snapshot.to_json_pretty()?)
            .context("snapshot body is not utf-8")?;
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO project_slots(slot, body, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(slot) DO UPDATE SET body = excluded.body, updated_at = excluded.updated_at",
            params![slot, body, now_ms()],
        )?;
        Ok(())
    }

    fn get(&self, slot: &str) -> Result<Option<ProjectSnapshot>> {
        let conn = self.conn.lock().unwrap();
        let body: Option<String> = conn
            .query_row(
                "SELECT body FROM project_slots WHERE slot = ?1",
                params![slot],
                |r| r.get(0),
            )
            .optional()?;
        match body {
            Some(body) => {
                let snapshot = ProjectSnapshot::from_json(body.as_bytes())
                    .with_context(|| format!("stored body in slot '{slot}' is unreadable"))?;
                Ok(Some(snapshot))
            }
            None => Ok(None),
        }
    }
}
