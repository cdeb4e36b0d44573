// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visual encodings.
//!
//! Encodings land in the `encode` named-pair slot: each contributes `name -> value` to the
//! parent's `encode` object. `name` is the visual channel (`x`, `y`, `color`, ...), `value` the
//! field, constant, column or function reference the channel is bound to.

extern crate alloc;

use alloc::string::String;

use vizir_spec::{EncodeKind, NAME_KEY, Node, VALUE_KEY, Value};

fn encoding(kind: EncodeKind, name: impl Into<String>, value: impl Into<Value>) -> Node {
    Node::new(kind)
        .with_prop(NAME_KEY, name.into())
        .with_prop(VALUE_KEY, value)
}

/// Binds `channel` to a data field. Same as [`field`].
pub fn encode(channel: impl Into<String>, field_name: impl Into<Value>) -> Node {
    field(channel, field_name)
}

/// Binds `channel` to a data field.
pub fn field(channel: impl Into<String>, field_name: impl Into<Value>) -> Node {
    encoding(EncodeKind::Field, channel, field_name)
}

/// Binds `channel` to a constant.
pub fn constant(channel: impl Into<String>, value: impl Into<Value>) -> Node {
    encoding(EncodeKind::Constant, channel, value)
}

/// Binds `channel` to a column of precomputed values.
pub fn column(channel: impl Into<String>, values: impl Into<Value>) -> Node {
    encoding(EncodeKind::Column, channel, values)
}

/// Binds `channel` to a transform reference evaluated by the engine.
pub fn transform(channel: impl Into<String>, value: impl Into<Value>) -> Node {
    encoding(EncodeKind::Transform, channel, value)
}

/// Binds `channel` to a custom encoding understood by the engine.
pub fn custom(channel: impl Into<String>, value: impl Into<Value>) -> Node {
    encoding(EncodeKind::Custom, channel, value)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use vizir_spec::compile;

    use super::*;
    use crate::mark;

    #[test]
    fn encodings_of_every_kind_share_the_encode_slot() {
        let spec = compile(&mark::interval().with_children([
            encode("x", "genre"),
            field("y", "sold"),
            constant("size", 4),
            column("color", "red"),
            transform("shape", "smooth"),
            custom("opacity", 0.5),
        ]));
        let map = spec.get("encode").and_then(Value::as_object).unwrap();
        assert_eq!(map.len(), 6);
        assert_eq!(map.get("size"), Some(&Value::from(4)));
        assert_eq!(map.get("opacity"), Some(&Value::from(0.5)));
    }
}
