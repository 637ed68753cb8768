//! save-tool: headless companion for Idoll save databases and export
//! files.
//!
//! Usage:
//!   save-tool --db saves.db inspect
//!   save-tool --db saves.db export idoll-save.json
//!   save-tool --db saves.db import idoll-save.json
//!   save-tool validate idoll-save.json
//!   save-tool --db saves.db clear

use anyhow::{bail, Result};
use idoll_core::{
    config::SaveConfig,
    export,
    store::{SaveStore, SaveSummary},
};
use std::env;
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = flag_value(&args, "--db").unwrap_or("saves.db");
    let slot_default = SaveConfig::default().slot;
    let slot = flag_value(&args, "--slot").unwrap_or(&slot_default);

    let positional = positional_args(&args);
    let command = positional.first().copied().unwrap_or("inspect");
    let file = positional.get(1).copied();

    match command {
        "inspect" => inspect(db, slot),
        "validate" => validate(file),
        "export" => export_save(db, slot, file),
        "import" => import_save(db, slot, file),
        "clear" => clear(db, slot),
        other => bail!("unknown command: {other}"),
    }
}

fn open_store(db: &str) -> Result<SaveStore> {
    log::debug!("Opening save store at {db}");
    let store = SaveStore::open(db)?;
    store.migrate()?;
    Ok(store)
}

fn inspect(db: &str, slot: &str) -> Result<()> {
    let store = open_store(db)?;
    match store.summary(slot)? {
        Some(summary) => print_summary(&summary),
        None => println!("No saved data in slot '{slot}'."),
    }
    Ok(())
}

fn validate(file: Option<&str>) -> Result<()> {
    let Some(file) = file else {
        bail!("validate needs a file argument");
    };
    match export::import_from_file(Path::new(file)) {
        Ok(snapshot) => {
            println!(
                "{}",
                serde_json::json!({
                    "ok": true,
                    "version": snapshot.version,
                    "sceneName": snapshot.scene_name(),
                    "checkpoint": snapshot.checkpoint(),
                    "currentSceneIndex": snapshot.current_scene_index,
                })
            );
            Ok(())
        }
        Err(err) => {
            println!("{}", serde_json::json!({ "ok": false, "reason": err.to_string() }));
            Ok(())
        }
    }
}

fn export_save(db: &str, slot: &str, file: Option<&str>) -> Result<()> {
    // A missing target is a cancelled export, not an error.
    let Some(file) = file else {
        println!("Export cancelled: no target file given.");
        return Ok(());
    };
    let store = open_store(db)?;
    match store.read_save(slot)? {
        Some(snapshot) => {
            export::export_to_file(&snapshot, Path::new(file))?;
            println!(
                "Exported scene '{}' (checkpoint '{}') to {file}.",
                snapshot.scene_name().unwrap_or(""),
                snapshot.checkpoint()
            );
        }
        None => println!("No saved data in slot '{slot}'."),
    }
    Ok(())
}

fn import_save(db: &str, slot: &str, file: Option<&str>) -> Result<()> {
    let Some(file) = file else {
        println!("Import cancelled: no file given.");
        return Ok(());
    };
    let snapshot = match export::import_from_file(Path::new(file)) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            println!("Import failed: {err}");
            return Ok(());
        }
    };
    let store = open_store(db)?;
    store.write_save(slot, &snapshot)?;
    println!(
        "Imported scene '{}' (checkpoint '{}') into slot '{slot}'.",
        snapshot.scene_name().unwrap_or(""),
        snapshot.checkpoint()
    );
    Ok(())
}

fn clear(db: &str, slot: &str) -> Result<()> {
    let store = open_store(db)?;
    if store.delete_save(slot)? {
        println!("Cleared slot '{slot}'.");
    } else {
        println!("No saved data in slot '{slot}'.");
    }
    Ok(())
}

fn print_summary(summary: &SaveSummary) {
    let saved_at = chrono::DateTime::from_timestamp(summary.saved_at, 0)
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| summary.saved_at.to_string());
    println!("Slot:       {}", summary.slot);
    println!("Version:    {}", summary.version);
    println!("Scene:      {}", summary.scene_name);
    println!("Checkpoint: {}", summary.checkpoint);
    println!("Saved at:   {saved_at}");
}

fn flag_value<'a>(args: &'a [String], name: &str) -> Option<&'a str> {
    args.windows(2)
        .find(|w| w[0] == name)
        .map(|w| w[1].as_str())
}

/// Everything that is neither a `--flag` nor its operand.
fn positional_args(args: &[String]) -> Vec<&str> {
    let mut positional = Vec::new();
    let mut i = 1;
    while i < args.len() {
        if args[i].starts_with("--") {
            i += 2;
        } else {
            positional.push(args[i].as_str());
            i += 1;
        }
    }
    positional
}
