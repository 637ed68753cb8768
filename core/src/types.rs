//! Shared primitive types used across the save system.

use std::collections::BTreeMap;

/// A zero-based source line inside a scene. Signed so that a position
/// preceding every label (the interpreter sits at -1 before the first
/// executed line) stays representable.
pub type LineNum = i64;

/// Ordinal position of a scene in the engine's ordered scene catalog.
pub type SceneIndex = usize;

/// Label name to the line at which it is defined, for one scene.
/// Label lines are unique within a scene.
pub type LabelTable = BTreeMap<String, LineNum>;
