// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Decorative components.
//!
//! Titles occupy the `title` attribute slot, legends the `legends` collection, and axes the
//! `axis` named-pair slot (each axis contributes `name -> value`, where `name` is the channel it
//! guides and `value` its options object, or `false` to hide it).

extern crate alloc;

use alloc::string::String;

use vizir_spec::{ComponentKind, NAME_KEY, Node, VALUE_KEY, Value};

/// Creates a chart title.
pub fn title(text: impl Into<String>) -> Node {
    Node::new(ComponentKind::Title).with_prop("title", text.into())
}

/// Creates an x axis entry for `channel`.
pub fn axis_x(channel: impl Into<String>, options: impl Into<Value>) -> Node {
    axis(ComponentKind::AxisX, channel, options)
}

/// Creates a y axis entry for `channel`.
pub fn axis_y(channel: impl Into<String>, options: impl Into<Value>) -> Node {
    axis(ComponentKind::AxisY, channel, options)
}

/// Creates a z axis entry for `channel`.
pub fn axis_z(channel: impl Into<String>, options: impl Into<Value>) -> Node {
    axis(ComponentKind::AxisZ, channel, options)
}

fn axis(kind: ComponentKind, channel: impl Into<String>, options: impl Into<Value>) -> Node {
    Node::new(kind)
        .with_prop(NAME_KEY, channel.into())
        .with_prop(VALUE_KEY, options)
}

constructors! {
    ComponentKind {
        legend => Legends,
        slider => Slider,
        scrollbar => Scrollbar,
        tooltip => Tooltip,
    }
}
