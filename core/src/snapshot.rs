//! Snapshot capture: one portable document of resumable state.
//!
//! A snapshot is built fresh on every capture and owns cloned data
//! only. No live references, no callables, nothing shared with the
//! interpreter. Wire field names match the document format the
//! interpreter has always exported, so older saves keep parsing.

use crate::checkpoint::checkpoint_at;
use crate::live::LiveState;
use crate::types::{LineNum, SceneIndex};
use crate::value::{clone_map, data_clone, Value, ValueMap};
use serde::{Deserialize, Serialize};

/// Reserved bank field holding the live scene object.
/// Never captured, never merged.
pub const SCENE_KEY: &str = "scene";

/// Synthesized stats field: the captured scene's name.
pub const SCENE_NAME_KEY: &str = "sceneName";

/// Synthesized stats field: the resolved checkpoint label.
pub const CHECKPOINT_KEY: &str = "_idoll_checkpoint";

/// Version tag recorded when the host does not report one.
pub const UNKNOWN_VERSION: &str = "UNKNOWN";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default = "unknown_version")]
    pub version: String,
    /// The cloned persistent bank, plus `sceneName` and
    /// `_idoll_checkpoint`, minus the reserved scene field.
    pub stats: ValueMap,
    #[serde(default)]
    pub temps: ValueMap,
    /// Position inside the scene at capture time. Advisory only:
    /// restore always rewinds to line 0, indent 0 and lets the
    /// interpreter seek to the checkpoint label.
    #[serde(default)]
    pub line_num: LineNum,
    #[serde(default)]
    pub indent: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_scene_index: Option<SceneIndex>,
    #[serde(default)]
    pub past_lines: Vec<Value>,
    #[serde(default)]
    pub recent_checks: ValueMap,
}

fn unknown_version() -> String {
    UNKNOWN_VERSION.to_string()
}

impl Snapshot {
    /// Assemble a snapshot from the live interpreter. None means there
    /// is nothing to persist (no bank, or no resolvable scene), not a
    /// hard error.
    pub fn capture(live: &LiveState) -> Option<Snapshot> {
        let bank = live.bank.as_ref()?;

        let mut stats = ValueMap::new();
        for (key, value) in bank {
            if key == SCENE_KEY {
                continue;
            }
            if let Some(cloned) = data_clone(value) {
                stats.insert(key.clone(), cloned);
            }
        }

        let (temps, line_num, indent) = match &live.scene {
            Some(scene) => {
                stats.insert(SCENE_NAME_KEY.to_string(), Value::Str(scene.name.clone()));
                stats.insert(
                    CHECKPOINT_KEY.to_string(),
                    Value::Str(checkpoint_at(&scene.labels, scene.line_num)),
                );
                (clone_map(&scene.temps), scene.line_num, scene.indent)
            }
            None => (ValueMap::new(), 0, 0),
        };

        let (past_lines, recent_checks) = match &live.nav {
            Some(nav) => (
                nav.past_lines
                    .iter()
                    .map(|line| data_clone(line).unwrap_or(Value::Null))
                    .collect(),
                clone_map(&nav.recent_checks),
            ),
            None => (Vec::new(), ValueMap::new()),
        };

        let snapshot = Snapshot {
            version: live.version.clone().unwrap_or_else(unknown_version),
            stats,
            temps,
            line_num,
            indent,
            current_scene_index: live.current_scene_index(),
            past_lines,
            recent_checks,
        };

        snapshot.is_admissible().then_some(snapshot)
    }

    /// The sole admissibility gate for capture and restore: the stats
    /// must name a scene, either by a non-empty `sceneName` or by a
    /// catalog ordinal.
    pub fn is_admissible(&self) -> bool {
        self.scene_name().is_some() || self.current_scene_index.is_some()
    }

    /// Non-empty `sceneName` carried in stats, if any.
    pub fn scene_name(&self) -> Option<&str> {
        self.stats
            .get(SCENE_NAME_KEY)
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Checkpoint label carried in stats, defaulted to empty.
    pub fn checkpoint(&self) -> &str {
        self.stats
            .get(CHECKPOINT_KEY)
            .and_then(Value::as_str)
            .unwrap_or("")
    }
}
