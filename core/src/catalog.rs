//! Scene identity: mapping a scene name to and from its catalog ordinal.
//!
//! Scene objects are not stable across interpreter restarts. Only the
//! position in the engine's ordered scene catalog survives, so identity
//! is re-derived from that position on every capture and restore.

use crate::types::SceneIndex;
use serde::{Deserialize, Serialize};

/// The engine's ordered list of all scene names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneCatalog(Vec<String>);

impl SceneCatalog {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Forward resolution: the ordinal of `name`, or unresolved.
    pub fn index_of(&self, name: &str) -> Option<SceneIndex> {
        self.0.iter().position(|entry| entry == name)
    }

    /// Reverse resolution: the entry at `index`, or unresolved when the
    /// index is out of range.
    pub fn name_at(&self, index: SceneIndex) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index_of(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
