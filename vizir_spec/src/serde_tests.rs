// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::string::ToString;

use serde_json::json;

use crate::{EncodeKind, MarkKind, Node, Spec, Value, compile};

fn interval() -> Node {
    Node::new(MarkKind::Interval)
        .with_prop("legend", false)
        .with_children([
            Node::new(EncodeKind::Field)
                .with_prop("name", "x")
                .with_prop("value", "genre"),
            Node::new(EncodeKind::Field)
                .with_prop("name", "y")
                .with_prop("value", "sold"),
        ])
}

#[test]
fn compiled_spec_serializes_to_engine_json_shape() {
    let json = serde_json::to_value(compile(&interval())).unwrap();
    assert_eq!(
        json,
        json!({
            "type": "interval",
            "legend": false,
            "encode": { "x": "genre", "y": "sold" },
        })
    );
}

#[test]
fn values_use_the_untagged_json_shape() {
    let value: Value = [
        ("n", Value::Null),
        ("ok", Value::from(true)),
        ("w", Value::from(1.5)),
        ("tags", Value::from(alloc::vec!["a", "b"])),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        serde_json::to_value(&value).unwrap(),
        json!({ "n": null, "ok": true, "w": 1.5, "tags": ["a", "b"] })
    );

    let parsed: Value = serde_json::from_str(r#"{"size": 300, "tags": ["a"]}"#).unwrap();
    assert_eq!(parsed.get("size"), Some(&Value::from(300)));
    assert_eq!(
        parsed.get("tags").and_then(Value::as_array),
        Some([Value::from("a")].as_slice())
    );
}

#[test]
fn compiled_spec_survives_a_json_round_trip() {
    let spec = compile(&interval().with_prop("width", 300));
    let text = serde_json::to_string(&spec).unwrap();
    let back: Spec = serde_json::from_str(&text).unwrap();
    assert_eq!(back, spec);
    assert_eq!(back.kind(), "interval");
}

#[test]
fn objects_without_a_string_type_are_not_specs() {
    let missing = serde_json::from_str::<Spec>(r#"{"x": 1}"#).unwrap_err();
    assert!(
        missing.to_string().contains("type"),
        "unexpected error: {missing}"
    );
    assert!(serde_json::from_str::<Spec>(r#"{"type": 3}"#).is_err());
    assert!(serde_json::from_str::<Spec>(r#"["interval"]"#).is_err());
}
