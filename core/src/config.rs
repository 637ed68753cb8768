//! Tunables for the save system.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SLOT: &str = "idoll_save_system";
pub const DEFAULT_EXPORT_FILENAME: &str = "idoll-save.json";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveConfig {
    /// Store slot the quick-save writes to.
    pub slot: String,
    /// Filename suggested for exported saves.
    pub export_filename: String,
}

impl Default for SaveConfig {
    fn default() -> Self {
        Self {
            slot: DEFAULT_SLOT.to_string(),
            export_filename: DEFAULT_EXPORT_FILENAME.to_string(),
        }
    }
}
