// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declared chart nodes.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use crate::slot::SlotKey;
use crate::tag::TypeTag;
use crate::value::{Map, Value};

/// A caller-supplied stable identity for a node.
///
/// Identity is optional and only used for lookup and diagnostics; compilation never depends on a
/// child's position being stable between declarations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u64);

/// One declared element of a chart tree.
///
/// The type tag is fixed at construction. Properties and children can be replaced wholesale
/// between compilations, but there is no API for editing a single child in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    tag: TypeTag,
    id: Option<NodeId>,
    slot: Option<SlotKey>,
    props: Map,
    children: Vec<Self>,
}

impl Node {
    /// Creates a node with no properties and no children.
    pub fn new(tag: impl Into<TypeTag>) -> Self {
        Self {
            tag: tag.into(),
            id: None,
            slot: None,
            props: Map::new(),
            children: Vec::new(),
        }
    }

    /// Returns the type tag.
    pub fn tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns the stable id, if one was assigned.
    pub fn id(&self) -> Option<NodeId> {
        self.id
    }

    /// Returns the explicit slot key, if one was assigned.
    pub fn explicit_slot(&self) -> Option<&SlotKey> {
        self.slot.as_ref()
    }

    /// Returns the own properties.
    pub fn props(&self) -> &Map {
        &self.props
    }

    /// Returns an own property.
    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.get(key)
    }

    /// Returns the children in declaration order.
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Assigns a stable id.
    pub fn with_id(mut self, id: NodeId) -> Self {
        self.id = Some(id);
        self
    }

    /// Overrides the default slot this node occupies in its parent.
    pub fn with_slot(mut self, slot: impl Into<SlotKey>) -> Self {
        self.slot = Some(slot.into());
        self
    }

    /// Sets one own property.
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Sets several own properties.
    pub fn with_props<K, V>(mut self, props: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.props
            .extend(props.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends one child.
    pub fn with_child(mut self, child: impl Into<Self>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends children. A bare node is accepted as a one-element sequence.
    pub fn with_children(mut self, children: impl IntoChildren) -> Self {
        self.children.extend(children.into_children());
        self
    }

    /// Replaces every own property.
    pub fn set_props(&mut self, props: Map) {
        self.props = props;
    }

    /// Replaces every child.
    pub fn set_children(&mut self, children: impl IntoChildren) {
        self.children = children.into_children();
    }

    /// Finds a node by id in this subtree, depth first in declaration order.
    pub fn find(&self, id: NodeId) -> Option<&Self> {
        if self.id == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }
}

/// Conversion into an ordered child sequence.
///
/// Implemented so that a single bare node and a one-element sequence are interchangeable.
pub trait IntoChildren {
    /// Converts into children, in declaration order.
    fn into_children(self) -> Vec<Node>;
}

impl IntoChildren for Node {
    fn into_children(self) -> Vec<Node> {
        alloc::vec![self]
    }
}

impl IntoChildren for Option<Node> {
    fn into_children(self) -> Vec<Node> {
        self.into_iter().collect()
    }
}

impl IntoChildren for Vec<Node> {
    fn into_children(self) -> Vec<Node> {
        self
    }
}

impl<const N: usize> IntoChildren for [Node; N] {
    fn into_children(self) -> Vec<Node> {
        self.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use super::*;
    use crate::tag::{EncodeKind, MarkKind, ViewKind};

    #[test]
    fn bare_child_and_single_element_sequence_are_equal() {
        let child = Node::new(MarkKind::Line).with_prop("x", 1);
        let a = Node::new(ViewKind::View).with_children(child.clone());
        let b = Node::new(ViewKind::View).with_children(vec![child.clone()]);
        let c = Node::new(ViewKind::View).with_children([child.clone()]);
        let d = Node::new(ViewKind::View).with_children(Some(child));
        assert_eq!(a, b);
        assert_eq!(b, c);
        assert_eq!(c, d);
    }

    #[test]
    fn find_searches_in_declaration_order() {
        let tree = Node::new(ViewKind::SpaceLayer).with_children([
            Node::new(MarkKind::Interval)
                .with_id(NodeId(1))
                .with_child(Node::new(EncodeKind::Field).with_id(NodeId(2))),
            Node::new(MarkKind::Interval).with_id(NodeId(3)),
        ]);
        assert_eq!(
            tree.find(NodeId(2)).map(Node::tag),
            Some(EncodeKind::Field.into())
        );
        assert_eq!(tree.find(NodeId(3)).and_then(Node::id), Some(NodeId(3)));
        assert!(tree.find(NodeId(9)).is_none());
    }

    #[test]
    fn wholesale_replacement_keeps_the_tag() {
        let mut node = Node::new(MarkKind::Point)
            .with_prop("size", 4)
            .with_child(Node::new(EncodeKind::Field));
        node.set_props(Map::new());
        node.set_children(Vec::new());
        assert_eq!(node.tag(), MarkKind::Point.into());
        assert!(node.props().is_empty());
        assert!(node.children().is_empty());
    }
}
