//! The public save/load/export/import surface, orchestrating capture,
//! store, codec, and restore.
//!
//! Outcome model: Ok(false) is a defined negative outcome ("nothing to
//! persist", "no saved data", "no restoring host", "document not
//! restorable"), never an error. Errors are database and file-transport
//! faults only; content problems are logged and degrade to Ok(false).
//! Capture and merge complete in memory before any observable effect,
//! so a failure never leaves the interpreter half-restored.

use crate::config::SaveConfig;
use crate::error::{SaveError, SaveResult};
use crate::export;
use crate::live::LiveState;
use crate::restore::{prepare_restore, RestoreHost};
use crate::snapshot::Snapshot;
use crate::store::{SaveStore, SaveSummary};
use std::path::Path;

pub struct SaveSession {
    store: SaveStore,
    config: SaveConfig,
}

impl SaveSession {
    pub fn new(store: SaveStore) -> Self {
        Self::with_config(store, SaveConfig::default())
    }

    pub fn with_config(store: SaveStore, config: SaveConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &SaveStore {
        &self.store
    }

    pub fn config(&self) -> &SaveConfig {
        &self.config
    }

    /// Capture the live state and persist it to the slot. Ok(false)
    /// when there is nothing to persist.
    pub fn save(&self, live: &LiveState) -> SaveResult<bool> {
        let Some(snapshot) = Snapshot::capture(live) else {
            return Ok(false);
        };
        self.store.write_save(&self.config.slot, &snapshot)?;
        log::info!(
            "Saved scene '{}' at checkpoint '{}'",
            snapshot.scene_name().unwrap_or(""),
            snapshot.checkpoint()
        );
        Ok(true)
    }

    /// Load the stored save and resume it on `host`. Ok(false) when no
    /// save exists, no host was supplied, or the stored document is not
    /// restorable against the current live state.
    pub fn load(&self, live: &LiveState, host: Option<&mut dyn RestoreHost>) -> SaveResult<bool> {
        let Some(host) = host else {
            return Ok(false);
        };
        let Some(snapshot) = self.store.read_save(&self.config.slot)? else {
            return Ok(false);
        };
        match prepare_restore(&snapshot, live) {
            Ok(directive) => {
                directive.apply(host);
                Ok(true)
            }
            Err(err) => content_failure(err),
        }
    }

    /// Capture the live state and write the export file. Ok(false) when
    /// there is nothing to export.
    pub fn export_to(&self, live: &LiveState, path: &Path) -> SaveResult<bool> {
        let Some(snapshot) = Snapshot::capture(live) else {
            return Ok(false);
        };
        log::debug!(
            "Exporting scene index {:?}, checkpoint '{}'",
            snapshot.current_scene_index,
            snapshot.checkpoint()
        );
        export::export_to_file(&snapshot, path)?;
        Ok(true)
    }

    /// Parse an exported document and resume it on `host`.
    pub fn import_from_str(
        &self,
        text: &str,
        live: &LiveState,
        host: Option<&mut dyn RestoreHost>,
    ) -> SaveResult<bool> {
        let Some(host) = host else {
            return Ok(false);
        };
        let snapshot = match export::parse_import(text) {
            Ok(snapshot) => snapshot,
            Err(err) => return content_failure(err),
        };
        match prepare_restore(&snapshot, live) {
            Ok(directive) => {
                directive.apply(host);
                Ok(true)
            }
            Err(err) => content_failure(err),
        }
    }

    /// Read an exported file and resume it on `host`.
    pub fn import_from_file(
        &self,
        path: &Path,
        live: &LiveState,
        host: Option<&mut dyn RestoreHost>,
    ) -> SaveResult<bool> {
        let text = std::fs::read_to_string(path)?;
        self.import_from_str(&text, live, host)
    }

    pub fn has_save(&self) -> SaveResult<bool> {
        self.store.has_save(&self.config.slot)
    }

    pub fn summary(&self) -> SaveResult<Option<SaveSummary>> {
        self.store.summary(&self.config.slot)
    }

    pub fn clear_save(&self) -> SaveResult<bool> {
        self.store.delete_save(&self.config.slot)
    }
}

/// Degrade a content problem to the boolean failure outcome; transport
/// faults keep propagating.
fn content_failure(err: SaveError) -> SaveResult<bool> {
    match err {
        SaveError::Database(_) | SaveError::Io(_) => Err(err),
        other => {
            log::warn!("Restore rejected: {other}");
            Ok(false)
        }
    }
}
