//! SQLite persistence layer for the save slot.
//!
//! RULE: Only store.rs talks to the database. Everything else hands a
//! Snapshot in or takes a Snapshot out. The slot is a single row; a
//! new save overwrites the old one.

use crate::error::SaveResult;
use crate::snapshot::Snapshot;
use rusqlite::{params, Connection, OptionalExtension};

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS save_slot (
    slot        TEXT PRIMARY KEY,
    version     TEXT NOT NULL,
    scene_name  TEXT NOT NULL DEFAULT '',
    checkpoint  TEXT NOT NULL DEFAULT '',
    state_json  TEXT NOT NULL,
    saved_at    INTEGER NOT NULL
);
";

/// Columns kept alongside the blob so a save can be described without
/// parsing it.
#[derive(Debug, Clone)]
pub struct SaveSummary {
    pub slot: String,
    pub version: String,
    pub scene_name: String,
    pub checkpoint: String,
    pub saved_at: i64,
}

pub struct SaveStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for a file
}

impl SaveStore {
    pub fn open(path: &str) -> SaveResult<Self> {
        let conn = Connection::open_with_flags(
            path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE
                | rusqlite::OpenFlags::SQLITE_OPEN_CREATE
                | rusqlite::OpenFlags::SQLITE_OPEN_URI,
        )?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SaveResult<Self> {
        let conn = Connection::open(":memory:")?;
        Ok(Self { conn, path: None })
    }

    pub fn migrate(&self) -> SaveResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Overwrite `slot` with a new snapshot blob.
    pub fn write_save(&self, slot: &str, snapshot: &Snapshot) -> SaveResult<()> {
        let state_json = serde_json::to_string(snapshot)?;
        self.conn.execute(
            "INSERT INTO save_slot (slot, version, scene_name, checkpoint, state_json, saved_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(slot) DO UPDATE SET
                version    = excluded.version,
                scene_name = excluded.scene_name,
                checkpoint = excluded.checkpoint,
                state_json = excluded.state_json,
                saved_at   = excluded.saved_at",
            params![
                slot,
                snapshot.version,
                snapshot.scene_name().unwrap_or(""),
                snapshot.checkpoint(),
                state_json,
                chrono::Utc::now().timestamp(),
            ],
        )?;
        log::debug!("Save written to slot '{slot}'");
        Ok(())
    }

    /// Read the slot back, if anything was ever saved there.
    pub fn read_save(&self, slot: &str) -> SaveResult<Option<Snapshot>> {
        let state_json: Option<String> = self
            .conn
            .query_row(
                "SELECT state_json FROM save_slot WHERE slot = ?1",
                params![slot],
                |row| row.get(0),
            )
            .optional()?;
        match state_json {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Describe the slot without parsing the blob.
    pub fn summary(&self, slot: &str) -> SaveResult<Option<SaveSummary>> {
        let summary = self
            .conn
            .query_row(
                "SELECT slot, version, scene_name, checkpoint, saved_at
                 FROM save_slot WHERE slot = ?1",
                params![slot],
                |row| {
                    Ok(SaveSummary {
                        slot: row.get(0)?,
                        version: row.get(1)?,
                        scene_name: row.get(2)?,
                        checkpoint: row.get(3)?,
                        saved_at: row.get(4)?,
                    })
                },
            )
            .optional()?;
        Ok(summary)
    }

    pub fn has_save(&self, slot: &str) -> SaveResult<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM save_slot WHERE slot = ?1",
            params![slot],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Remove the slot. Returns whether a save existed.
    pub fn delete_save(&self, slot: &str) -> SaveResult<bool> {
        let removed = self
            .conn
            .execute("DELETE FROM save_slot WHERE slot = ?1", params![slot])?;
        Ok(removed > 0)
    }
}
