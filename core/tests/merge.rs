//! Reconciliation merge: snapshot wins per field, live-only fields
//! survive, sequences replace wholesale.

use idoll_core::merge::merge_stats;
use idoll_core::value::{Value, ValueMap};

fn map(entries: &[(&str, Value)]) -> ValueMap {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

#[test]
fn merge_is_additive_in_both_directions() {
    let live = map(&[("a", Value::from(1i64)), ("b", Value::from(2i64))]);
    let snapshot = map(&[("b", Value::from(3i64)), ("c", Value::from(4i64))]);

    let merged = merge_stats(&live, &snapshot);

    assert_eq!(merged.get("a"), Some(&Value::from(1i64)), "live-only survives");
    assert_eq!(merged.get("b"), Some(&Value::from(3i64)), "snapshot wins overlap");
    assert_eq!(merged.get("c"), Some(&Value::from(4i64)), "snapshot-only is added");
}

#[test]
fn snapshot_sequence_replaces_live_sequence() {
    let live = map(&[(
        "x",
        Value::List(vec![Value::from(1i64), Value::from(2i64), Value::from(3i64)]),
    )]);
    let snapshot = map(&[("x", Value::List(vec![Value::from(9i64)]))]);

    let merged = merge_stats(&live, &snapshot);

    assert_eq!(
        merged.get("x"),
        Some(&Value::List(vec![Value::from(9i64)])),
        "sequences are never merged element-wise"
    );
}

#[test]
fn nested_mappings_merge_recursively() {
    let live = map(&[(
        "player",
        Value::Map(map(&[("hp", Value::from(10i64)), ("stamina", Value::from(5i64))])),
    )]);
    let snapshot = map(&[(
        "player",
        Value::Map(map(&[("hp", Value::from(3i64)), ("mp", Value::from(2i64))])),
    )]);

    let merged = merge_stats(&live, &snapshot);

    let Some(Value::Map(player)) = merged.get("player") else {
        panic!("player stays a mapping");
    };
    assert_eq!(player.get("hp"), Some(&Value::from(3i64)));
    assert_eq!(player.get("stamina"), Some(&Value::from(5i64)));
    assert_eq!(player.get("mp"), Some(&Value::from(2i64)));
}

#[test]
fn scene_field_is_excluded_at_every_level() {
    let live = map(&[
        ("scene", Value::Map(ValueMap::new())),
        (
            "outer",
            Value::Map(map(&[
                ("scene", Value::from(1i64)),
                ("keep", Value::from(2i64)),
            ])),
        ),
    ]);
    let snapshot = map(&[
        ("scene", Value::from("stale")),
        ("outer", Value::Map(ValueMap::new())),
    ]);

    let merged = merge_stats(&live, &snapshot);

    assert!(!merged.contains_key("scene"));
    let Some(Value::Map(outer)) = merged.get("outer") else {
        panic!("outer stays a mapping");
    };
    assert!(!outer.contains_key("scene"));
    assert_eq!(outer.get("keep"), Some(&Value::from(2i64)));
}

#[test]
fn live_callables_drop_out_of_the_result() {
    let live = map(&[("on_tick", Value::Callable), ("a", Value::from(1i64))]);
    let snapshot = ValueMap::new();

    let merged = merge_stats(&live, &snapshot);

    assert!(!merged.contains_key("on_tick"));
    assert_eq!(merged.get("a"), Some(&Value::from(1i64)));
}

#[test]
fn snapshot_scalar_replaces_live_mapping() {
    let live = map(&[("cfg", Value::Map(map(&[("x", Value::from(1i64))])))]);
    let snapshot = map(&[("cfg", Value::from(5i64))]);

    let merged = merge_stats(&live, &snapshot);
    assert_eq!(merged.get("cfg"), Some(&Value::from(5i64)));
}

#[test]
fn snapshot_mapping_replaces_live_scalar() {
    let live = map(&[("cfg", Value::from(5i64))]);
    let snapshot = map(&[("cfg", Value::Map(map(&[("x", Value::from(1i64))])))]);

    let merged = merge_stats(&live, &snapshot);
    assert_eq!(
        merged.get("cfg"),
        Some(&Value::Map(map(&[("x", Value::from(1i64))])))
    );
}
