// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec;
use alloc::vec::Vec;

use crate::{
    ComponentKind, Compiler, CoordinateKind, DataKind, EncodeKind, Map, MarkKind, Node,
    SlotRegistry, Spec, TransformKind, Value, ViewKind, compile,
};

fn encode(name: &str, value: &str) -> Node {
    Node::new(EncodeKind::Field)
        .with_prop("name", name)
        .with_prop("value", value)
}

fn object(pairs: &[(&str, Value)]) -> Value {
    pairs.iter().map(|(k, v)| (*k, v.clone())).collect()
}

#[test]
fn leaf_node_is_type_plus_own_properties() {
    let spec = compile(
        &Node::new(MarkKind::Interval)
            .with_prop("x", 300)
            .with_prop("legend", false),
    );
    assert_eq!(spec.kind(), "interval");
    assert_eq!(spec.len(), 3);
    assert_eq!(spec.get("x"), Some(&Value::from(300)));
    assert_eq!(spec.get("legend"), Some(&Value::from(false)));
}

#[test]
fn interval_with_two_encodes_compiles_to_encode_map() {
    let mark = Node::new(MarkKind::Interval)
        .with_prop("width", 300)
        .with_children([encode("x", "genre"), encode("y", "sold")]);

    let spec = compile(&mark);

    let expected = object(&[
        ("type", "interval".into()),
        ("width", 300.into()),
        (
            "encode",
            object(&[("x", "genre".into()), ("y", "sold".into())]),
        ),
    ]);
    assert_eq!(Value::from(spec), expected);
}

#[test]
fn space_layer_keeps_mark_children_in_order() {
    let first = Node::new(MarkKind::Interval).with_child(encode("x", "letter"));
    let second = Node::new(MarkKind::Line).with_child(encode("y", "frequency"));
    let layer = Node::new(ViewKind::SpaceLayer).with_children([first.clone(), second.clone()]);

    let spec = compile(&layer);

    let expected: Vec<Value> = vec![compile(&first).into(), compile(&second).into()];
    assert_eq!(spec.kind(), "spaceLayer");
    assert_eq!(spec.collection("children"), expected.as_slice());
}

#[test]
fn collection_slots_preserve_order_and_length() {
    let transforms = [
        TransformKind::SortX,
        TransformKind::StackY,
        TransformKind::DodgeX,
        TransformKind::SortX,
        TransformKind::Filter,
    ];
    let mark = Node::new(MarkKind::Interval)
        .with_children(transforms.map(|t| Node::new(t).with_prop("by", t.name())));

    let spec = compile(&mark);
    let got: Vec<&str> = spec
        .collection("transform")
        .iter()
        .map(|v| v.get("type").and_then(Value::as_str).unwrap())
        .collect();
    let expected: Vec<&str> = transforms.iter().map(|t| t.name()).collect();
    assert_eq!(got, expected);
}

#[test]
fn distinct_encode_names_yield_one_entry_each() {
    let names = ["x", "y", "color", "size", "shape", "opacity"];
    let mark = Node::new(MarkKind::Point)
        .with_children(names.iter().map(|n| encode(n, n)).collect::<Vec<_>>());

    let spec = compile(&mark);
    let encode = spec.get("encode").and_then(Value::as_object).unwrap();
    assert_eq!(encode.len(), names.len());
    for n in names {
        assert_eq!(encode.get(n), Some(&Value::from(n)));
    }
}

#[test]
fn repeated_encode_name_keeps_the_last_value() {
    let mark = Node::new(MarkKind::Interval).with_children([
        encode("color", "genre"),
        encode("color", "sold"),
    ]);
    let spec = compile(&mark);
    assert_eq!(
        spec.get("encode"),
        Some(&object(&[("color", "sold".into())]))
    );
}

#[test]
fn malformed_named_pair_children_are_dropped() {
    let mark = Node::new(MarkKind::Interval).with_children([
        Node::new(EncodeKind::Field).with_prop("name", "x"),
        Node::new(EncodeKind::Field).with_prop("value", "genre"),
        Node::new(EncodeKind::Field)
            .with_prop("name", "y")
            .with_prop("value", Value::Null),
        Node::new(EncodeKind::Constant)
            .with_prop("name", "size")
            .with_prop("value", 0),
    ]);
    let spec = compile(&mark);
    assert_eq!(spec.get("encode"), Some(&object(&[("size", 0.into())])));
}

#[test]
fn only_malformed_named_pairs_leave_no_slot() {
    let mark = Node::new(MarkKind::Interval)
        .with_child(Node::new(EncodeKind::Field).with_prop("name", "x"));
    let spec = compile(&mark);
    assert!(!spec.contains_key("encode"));
}

#[test]
fn named_pair_reads_own_properties_not_compiled_children() {
    let axis = Node::new(ComponentKind::AxisX)
        .with_prop("name", "x")
        .with_prop("value", object(&[("title", "Genre".into())]))
        .with_child(Node::new(ComponentKind::Title).with_prop("text", "ignored"));
    let spec = compile(&Node::new(MarkKind::Interval).with_child(axis));
    assert_eq!(
        spec.get("axis"),
        Some(&object(&[("x", object(&[("title", "Genre".into())]))]))
    );
}

#[test]
fn attribute_children_flatten_to_one_key_each() {
    let mark = Node::new(MarkKind::Interval)
        .with_prop("height", 300)
        .with_children([
            Node::new(CoordinateKind::Theta).with_prop("innerRadius", 0.5),
            Node::new(ComponentKind::Title).with_prop("title", "Sales"),
            Node::new(DataKind::Inline).with_prop("value", vec![1, 2, 3]),
        ]);
    let spec = compile(&mark);

    let mut keys: Vec<&str> = spec.entries().keys().map(|k| k.as_str()).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["coordinate", "data", "height", "title", "type"]);
    assert_eq!(
        spec.get("coordinate").and_then(|c| c.get("innerRadius")),
        Some(&Value::from(0.5))
    );
}

#[test]
fn attribute_siblings_are_order_independent_across_keys() {
    let coord = Node::new(CoordinateKind::Polar);
    let title = Node::new(ComponentKind::Title).with_prop("title", "t");
    let a = Node::new(MarkKind::Line).with_children([coord.clone(), title.clone()]);
    let b = Node::new(MarkKind::Line).with_children([title, coord]);
    assert_eq!(compile(&a), compile(&b));
}

#[test]
fn duplicate_attribute_slot_keeps_the_last_declaration() {
    let mark = Node::new(MarkKind::Interval).with_children([
        Node::new(CoordinateKind::Polar),
        Node::new(CoordinateKind::Theta),
    ]);
    let spec = compile(&mark);
    assert_eq!(
        spec.get("coordinate").and_then(|c| c.get("type")),
        Some(&Value::from("theta"))
    );
}

#[test]
fn explicit_slot_overrides_the_registry() {
    let mark = Node::new(MarkKind::Interval).with_children([
        Node::new(MarkKind::Text).with_slot("labels").with_prop("text", "sold"),
        Node::new(ComponentKind::Legends).with_slot("legend"),
    ]);
    let spec = compile(&mark);
    assert_eq!(spec.collection("labels").len(), 1);
    assert!(!spec.contains_key("children"));
    assert_eq!(
        spec.get("legend").and_then(|l| l.get("type")),
        Some(&Value::from("legends"))
    );
}

#[test]
fn unregistered_variant_lands_under_its_own_name() {
    let registry = SlotRegistry::builder(0)
        .slot(EncodeKind::Field, "encode")
        .build();
    let compiler = Compiler::new(registry);
    let spec = compiler.compile(
        &Node::new(MarkKind::Interval).with_child(Node::new(TransformKind::StackY)),
    );
    assert_eq!(
        spec.get("stackY").and_then(|s| s.get("type")),
        Some(&Value::from("stackY"))
    );
}

#[test]
fn child_slots_replace_own_properties_wholesale() {
    let mark = Node::new(MarkKind::Interval)
        .with_prop("encode", object(&[("shape", "smooth".into())]))
        .with_prop("transform", Value::from("not-a-list"))
        .with_children([encode("x", "genre"), Node::new(TransformKind::StackY)]);
    let spec = compile(&mark);
    assert_eq!(spec.get("encode"), Some(&object(&[("x", "genre".into())])));
    assert_eq!(spec.collection("transform").len(), 1);
}

#[test]
fn type_always_reflects_the_tag() {
    let mark = Node::new(MarkKind::Interval)
        .with_prop("type", "line")
        .with_child(Node::new(CoordinateKind::Polar).with_slot("type"));
    assert_eq!(compile(&mark).kind(), "interval");
}

#[test]
fn bare_child_compiles_like_a_single_element_sequence() {
    let children = [
        encode("x", "genre"),
        Node::new(TransformKind::StackY),
        Node::new(CoordinateKind::Theta),
    ];
    for child in children {
        let bare = Node::new(MarkKind::Interval).with_children(child.clone());
        let listed = Node::new(MarkKind::Interval).with_children(vec![child]);
        assert_eq!(compile(&bare), compile(&listed));
    }
}

#[test]
fn compiling_twice_is_idempotent() {
    let tree = reference_tree();
    let compiler = Compiler::default();
    assert_eq!(compiler.compile(&tree), compiler.compile(&tree));
}

#[test]
fn bare_mark_is_wrapped_in_an_implicit_view() {
    let mark = Node::new(MarkKind::Interval).with_child(encode("x", "genre"));
    let compiler = Compiler::default();

    let spec = compiler.compile_root(core::slice::from_ref(&mark)).unwrap();

    let expected: Vec<Value> = vec![compiler.compile(&mark).into()];
    assert_eq!(spec.kind(), "view");
    assert_eq!(spec.collection("children"), expected.as_slice());
}

#[test]
fn single_view_top_level_is_compiled_directly() {
    let tree = reference_tree();
    let compiler = Compiler::default();
    assert_eq!(
        compiler.compile_root(core::slice::from_ref(&tree)),
        Some(compiler.compile(&tree))
    );
    assert_eq!(compiler.compile_root(&[]), None);
}

#[test]
fn mixed_top_level_children_keep_their_default_slots() {
    let compiler = Compiler::default();
    let spec = compiler
        .compile_root(&[
            Node::new(DataKind::Fetch).with_prop("value", "data.csv"),
            Node::new(MarkKind::Interval),
            Node::new(MarkKind::Line),
        ])
        .unwrap();
    assert_eq!(spec.kind(), "view");
    assert_eq!(spec.collection("children").len(), 2);
    assert_eq!(
        spec.get("data").and_then(|d| d.get("type")),
        Some(&Value::from("fetch"))
    );
}

#[test]
fn reference_tree_compiles_to_expected_shape() {
    let spec: Spec = compile(&reference_tree());
    let children = spec.collection("children");
    assert_eq!(children.len(), 2);

    let data = spec.get("data").unwrap();
    assert_eq!(data.get("format"), Some(&Value::from("csv")));

    let first = &children[0];
    assert_eq!(
        first.get("encode"),
        Some(&object(&[
            ("x", "letter".into()),
            ("y", "frequency".into()),
            ("color", "letter".into()),
        ]))
    );
    assert_eq!(
        first.get("title").and_then(|t| t.get("align")),
        Some(&Value::from("center"))
    );
    let transform = first.get("transform").and_then(Value::as_array).unwrap();
    assert_eq!(transform[0].get("reverse"), Some(&Value::from(true)));

    let second = &children[1];
    assert_eq!(second.get("x"), Some(&Value::from(300)));
    assert_eq!(
        second.get("coordinate").and_then(|c| c.get("type")),
        Some(&Value::from("theta"))
    );
    assert!(
        second
            .as_object()
            .is_some_and(|m: &Map| !m.contains_key("title"))
    );
}

fn reference_tree() -> Node {
    Node::new(ViewKind::SpaceLayer).with_children([
        Node::new(DataKind::Fetch)
            .with_prop("value", "https://example.com/letters.csv")
            .with_prop("format", "csv"),
        Node::new(MarkKind::Interval).with_children([
            Node::new(ComponentKind::Title)
                .with_prop("title", "test title")
                .with_prop("align", "center"),
            encode("x", "letter"),
            encode("y", "frequency"),
            encode("color", "letter"),
            Node::new(TransformKind::SortX)
                .with_prop("reverse", true)
                .with_prop("by", "y"),
        ]),
        Node::new(MarkKind::Interval)
            .with_props([("x", 300), ("y", 65), ("width", 300), ("height", 300)])
            .with_prop("legend", false)
            .with_children([
                encode("y", "frequency"),
                encode("color", "letter"),
                Node::new(TransformKind::StackY),
                Node::new(CoordinateKind::Theta),
            ]),
    ])
}
