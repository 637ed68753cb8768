//! Export/import codec: the snapshot as human-readable JSON text.
//!
//! The pretty form is byte-stable for a given snapshot value. Struct
//! fields serialize in declaration order and value maps iterate in
//! BTree key order, so no host-dependent iteration order leaks into
//! the output.

use crate::error::{SaveError, SaveResult};
use crate::snapshot::Snapshot;
use std::path::Path;

/// The transportable text form: pretty-printed, 2-space indented.
pub fn to_export_string(snapshot: &Snapshot) -> SaveResult<String> {
    Ok(serde_json::to_string_pretty(snapshot)?)
}

/// Parse an imported document. Tolerates a UTF-8 BOM and surrounding
/// whitespace; rejects empty input and documents that fail the
/// admissibility gate.
pub fn parse_import(text: &str) -> SaveResult<Snapshot> {
    let text = text.trim_start_matches('\u{feff}').trim();
    if text.is_empty() {
        return Err(SaveError::EmptyImport);
    }
    let snapshot: Snapshot = serde_json::from_str(text)?;
    if !snapshot.is_admissible() {
        return Err(SaveError::NotAdmissible {
            reason: "no scene name or catalog index",
        });
    }
    Ok(snapshot)
}

pub fn export_to_file(snapshot: &Snapshot, path: &Path) -> SaveResult<()> {
    std::fs::write(path, to_export_string(snapshot)?)?;
    log::info!("Exported save to {}", path.display());
    Ok(())
}

pub fn import_from_file(path: &Path) -> SaveResult<Snapshot> {
    let text = std::fs::read_to_string(path)?;
    parse_import(&text)
}
