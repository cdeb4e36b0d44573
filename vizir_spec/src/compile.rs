// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The node compiler.
//!
//! Compilation is a bottom-up, full recompute over the declared tree:
//! 1. the result starts as the node's own properties, plus `type`;
//! 2. each child is assigned a slot (explicit key, else registry default, else its variant) and
//!    that slot is classified;
//! 3. children are merged by class: attribute slots hold the last child's spec, collection slots
//!    an ordered array of child specs, named-pair slots a `name -> value` object read from each
//!    child's own properties.
//!
//! Child-produced slots replace own properties with the same key wholesale. Layers apply in the
//! order own properties, attribute slots, collection slots, named-pair slots. `type` always
//! reflects the tag.
//!
//! Slot assignments are rebuilt on every pass; nothing is cached between compilations.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::node::Node;
use crate::registry::SlotRegistry;
use crate::slot::{SlotClass, SlotKey};
use crate::spec::{Spec, TYPE_KEY};
use crate::tag::TypeTag;
use crate::value::{Map, Value};

/// Own property read as the key of a named-pair child.
pub const NAME_KEY: &str = "name";
/// Own property read as the value of a named-pair child.
pub const VALUE_KEY: &str = "value";

/// A child with its resolved slot and class, valid for one compilation pass.
#[derive(Clone, Debug)]
struct Assignment<'a> {
    slot: SlotKey,
    class: SlotClass,
    node: &'a Node,
}

/// Compiles node trees against a [`SlotRegistry`].
#[derive(Clone, Debug, Default)]
pub struct Compiler {
    registry: SlotRegistry,
}

impl Compiler {
    /// Creates a compiler using `registry` for default slots.
    pub fn new(registry: SlotRegistry) -> Self {
        Self { registry }
    }

    /// Returns the registry.
    pub fn registry(&self) -> &SlotRegistry {
        &self.registry
    }

    /// Resolves the slot `child` occupies in its parent.
    pub fn resolve_slot(&self, child: &Node) -> SlotKey {
        child
            .explicit_slot()
            .cloned()
            .unwrap_or_else(|| self.registry.default_slot(child.tag()))
    }

    /// Compiles one node and its subtree.
    pub fn compile(&self, node: &Node) -> Spec {
        self.compile_parts(node.tag(), node.props(), node.children())
    }

    /// Compiles a declared top level.
    ///
    /// A single view-typed node is compiled as is. Anything else (bare marks, data sources, a mix)
    /// is compiled as the children of an implicit `view`. Returns `None` when nothing is declared.
    pub fn compile_root(&self, top_level: &[Node]) -> Option<Spec> {
        match top_level {
            [] => None,
            [single] if single.tag().is_view() => Some(self.compile(single)),
            nodes => {
                tracing::trace!(count = nodes.len(), "wrapping top level in implicit view");
                Some(self.compile_parts(TypeTag::DEFAULT_VIEW, &Map::new(), nodes))
            }
        }
    }

    fn compile_parts(&self, tag: TypeTag, props: &Map, children: &[Node]) -> Spec {
        tracing::trace!(%tag, children = children.len(), "compile node");

        let mut entries = props.clone();
        if entries.remove(TYPE_KEY).is_some() {
            tracing::debug!(%tag, "own `type` property ignored; the tag decides the variant");
        }

        if !children.is_empty() {
            let assignments = self.assign(children);

            let mut attributes = Map::new();
            let mut collections: HashMap<String, Vec<Value>> = HashMap::new();
            let mut pairs: HashMap<String, Map> = HashMap::new();

            for Assignment { slot, class, node } in assignments {
                match class {
                    SlotClass::Attribute => {
                        let spec = self.compile(node);
                        if attributes.insert(slot.as_str().into(), spec.into()).is_some() {
                            tracing::trace!(%tag, %slot, "attribute slot overwritten by a later sibling");
                        }
                    }
                    SlotClass::Collection => {
                        collections
                            .entry(slot.as_str().into())
                            .or_default()
                            .push(self.compile(node).into());
                    }
                    SlotClass::NamedPair => match named_pair(node) {
                        Some((name, value)) => {
                            pairs
                                .entry(slot.as_str().into())
                                .or_default()
                                .insert(name.into(), value.clone());
                        }
                        None => {
                            tracing::debug!(
                                %tag,
                                %slot,
                                child = %node.tag(),
                                "named-pair child without `name` and `value` dropped"
                            );
                        }
                    },
                }
            }

            entries.extend(attributes);
            entries.extend(collections.into_iter().map(|(k, v)| (k, Value::Array(v))));
            entries.extend(pairs.into_iter().map(|(k, m)| (k, Value::Object(m))));
        }

        entries.insert(TYPE_KEY.into(), tag.variant().into());
        Spec::from_entries(entries)
    }

    fn assign<'a>(&self, children: &'a [Node]) -> SmallVec<[Assignment<'a>; 8]> {
        children
            .iter()
            .map(|node| {
                let slot = self.resolve_slot(node);
                let class = slot.class();
                Assignment { slot, class, node }
            })
            .collect()
    }
}

/// Reads the `name`/`value` pair from a child's own properties.
///
/// `name` must be a string; a `null` value counts as missing.
fn named_pair(node: &Node) -> Option<(&str, &Value)> {
    let name = node.prop(NAME_KEY)?.as_str()?;
    let value = node.prop(VALUE_KEY).filter(|v| !v.is_null())?;
    Some((name, value))
}

/// Compiles `node` with the standard registry.
pub fn compile(node: &Node) -> Spec {
    Compiler::default().compile(node)
}
