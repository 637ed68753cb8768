//! Reconciliation merge: snapshot stats over live stats, field by field.
//!
//! RULE: The merge is asymmetric on purpose. An interpreter upgrade may
//! introduce persistent fields after a snapshot was taken; those fields
//! must survive a restore. Where both sides define a field the snapshot
//! wins, and sequences replace wholesale, never element-wise.

use crate::snapshot::SCENE_KEY;
use crate::value::{data_clone, Value, ValueMap};

/// Deep-merge `snapshot` onto `live`. Fields present only in `live`
/// clone through unchanged; fields present only in `snapshot` clone in;
/// fields present in both merge recursively. The reserved scene field
/// is excluded at every mapping level.
pub fn merge_stats(live: &ValueMap, snapshot: &ValueMap) -> ValueMap {
    let mut result = ValueMap::new();
    for (key, live_value) in live {
        if key == SCENE_KEY {
            continue;
        }
        let merged = match snapshot.get(key) {
            Some(snapshot_value) => merge_value(live_value, snapshot_value),
            None => data_clone(live_value),
        };
        if let Some(value) = merged {
            result.insert(key.clone(), value);
        }
    }
    for (key, snapshot_value) in snapshot {
        if key == SCENE_KEY || result.contains_key(key) {
            continue;
        }
        if let Some(value) = data_clone(snapshot_value) {
            result.insert(key.clone(), value);
        }
    }
    result
}

/// One field: recurse when both sides are mappings, otherwise the
/// snapshot side replaces. A snapshot sequence fully replaces a live
/// sequence.
fn merge_value(live: &Value, snapshot: &Value) -> Option<Value> {
    match (live, snapshot) {
        (Value::Map(live_fields), Value::Map(snapshot_fields)) => {
            Some(Value::Map(merge_stats(live_fields, snapshot_fields)))
        }
        (_, replacement) => data_clone(replacement),
    }
}
