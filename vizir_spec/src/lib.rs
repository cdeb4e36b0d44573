// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative chart trees and their compiler.
//!
//! A chart is declared as a tree of typed [`Node`]s (views, data sources, marks, encodings,
//! transforms, coordinates, components). [`Compiler`] turns that tree into one nested [`Spec`]
//! object for a rendering engine to consume:
//! - a [`TypeTag`] names each node's category and variant,
//! - a [`SlotRegistry`] supplies the parent slot a child lands in by default,
//! - [`classify`] decides how siblings sharing a slot are merged.
//!
//! Compilation is synchronous, pure, and a full recompute: the same tree always compiles to an
//! equal spec. Malformed trees never fail to compile; named-pair children missing `name` or
//! `value` are dropped, and duplicate attribute slots keep the last declaration.
//!
//! With the `serde` feature, [`Value`] and [`Spec`] serialize to the JSON shape engines expect.

#![no_std]

extern crate alloc;

mod compile;
#[cfg(test)]
mod compile_tests;
mod node;
mod registry;
#[cfg(all(test, feature = "serde"))]
mod serde_tests;
mod slot;
mod spec;
mod tag;
mod value;

pub use compile::{Compiler, NAME_KEY, VALUE_KEY, compile};
pub use node::{IntoChildren, Node, NodeId};
pub use registry::{SlotRegistry, SlotRegistryBuilder};
pub use slot::{SlotClass, SlotKey, classify};
pub use spec::{Spec, SpecError, TYPE_KEY};
pub use tag::{
    Category, ComponentKind, CoordinateKind, DataKind, EncodeKind, MarkKind, TransformKind,
    TypeTag, ViewKind,
};
pub use value::{Map, Value};
