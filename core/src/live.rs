//! Live interpreter state, passed in as an explicit value.
//!
//! RULE: The core never reads interpreter state from ambient globals.
//! Every public operation is a function of the LiveState handed to it,
//! and any piece of that state may be missing; dependent operations
//! degrade gracefully instead of failing hard.

use crate::catalog::SceneCatalog;
use crate::snapshot::SCENE_NAME_KEY;
use crate::types::{LabelTable, LineNum, SceneIndex};
use crate::value::{Value, ValueMap};

/// The currently executing scene, as exposed by the host interpreter.
#[derive(Debug, Clone, Default)]
pub struct SceneState {
    pub name: String,
    pub labels: LabelTable,
    pub line_num: LineNum,
    pub indent: i64,
    /// Scene-local variables. Not persistent; captured into `temps`.
    pub temps: ValueMap,
}

/// Navigation history, cloned verbatim into a snapshot.
#[derive(Debug, Clone, Default)]
pub struct NavState {
    pub past_lines: Vec<Value>,
    pub recent_checks: ValueMap,
}

/// Everything the core reads from the host interpreter at capture or
/// restore time.
#[derive(Debug, Clone, Default)]
pub struct LiveState {
    /// Interpreter build tag. Carried through opaquely.
    pub version: Option<String>,
    /// The persistent-variable bank. May contain callables and may carry
    /// a reserved `scene` field; both are stripped on capture.
    pub bank: Option<ValueMap>,
    pub scene: Option<SceneState>,
    pub catalog: Option<SceneCatalog>,
    /// Ordinal cached from an earlier resolution, consulted when the
    /// catalog lookup comes up empty.
    pub cached_scene_index: Option<SceneIndex>,
    pub nav: Option<NavState>,
}

impl LiveState {
    /// Name of the current scene: the live scene object when present,
    /// otherwise a `sceneName` field already sitting in the bank.
    pub fn current_scene_name(&self) -> Option<&str> {
        if let Some(scene) = &self.scene {
            if !scene.name.is_empty() {
                return Some(&scene.name);
            }
        }
        self.bank
            .as_ref()
            .and_then(|bank| bank.get(SCENE_NAME_KEY))
            .and_then(Value::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Forward scene-identity resolution: the catalog position of the
    /// current scene name, falling back to the cached ordinal when the
    /// catalog lookup is unresolved.
    pub fn current_scene_index(&self) -> Option<SceneIndex> {
        if let (Some(name), Some(catalog)) = (self.current_scene_name(), self.catalog.as_ref()) {
            if let Some(index) = catalog.index_of(name) {
                return Some(index);
            }
        }
        self.cached_scene_index
    }
}
