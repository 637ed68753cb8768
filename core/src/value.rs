//! The open value model for host-defined interpreter data.
//!
//! RULE: Snapshots carry data only. Callables exist in live state,
//! never in a serialized document. Cloning is what strips them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// String-keyed mapping of host-defined fields. The set of persistent
/// fields is host-defined and unbounded, so banks are open mappings
/// rather than statically-fielded records. BTreeMap keeps key iteration
/// (and therefore the pretty-printed export) deterministic.
pub type ValueMap = BTreeMap<String, Value>;

/// Any value the host interpreter can hold in a variable bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    List(Vec<Value>),
    Map(ValueMap),
    /// Live-only marker for function-valued fields. Never serialized;
    /// [`data_clone`] drops it.
    #[serde(skip)]
    Callable,
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Callable)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Number(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v as f64)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

/// Structurally independent copy of `value`. A callable clones to None
/// ("absent"); inside a sequence an absent slot degrades to Null so the
/// positions of the surviving elements do not shift.
///
/// The owned tree representation cannot express a cycle, so cloning
/// always terminates; acyclic inputs clone exactly.
pub fn data_clone(value: &Value) -> Option<Value> {
    match value {
        Value::Callable => None,
        Value::List(items) => Some(Value::List(
            items
                .iter()
                .map(|item| data_clone(item).unwrap_or(Value::Null))
                .collect(),
        )),
        Value::Map(fields) => Some(Value::Map(clone_map(fields))),
        other => Some(other.clone()),
    }
}

/// Mapping-level clone. Callable-valued entries drop out entirely.
pub fn clone_map(fields: &ValueMap) -> ValueMap {
    fields
        .iter()
        .filter_map(|(key, value)| data_clone(value).map(|cloned| (key.clone(), cloned)))
        .collect()
}
