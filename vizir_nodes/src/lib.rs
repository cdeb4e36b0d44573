// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node constructors for declaring chart trees.
//!
//! One constructor exists per supported variant, grouped by category:
//! [`view`], [`data`], [`mark`], [`encode`], [`transform`], [`coordinate`] and [`component`].
//! Every constructor returns a plain [`Node`], so further properties, children and an explicit
//! slot are added with the [`Node`] builder methods:
//!
//! ```
//! use vizir_nodes::{coordinate, encode, mark, transform, view};
//!
//! let chart = view::space_layer().with_children([
//!     mark::interval()
//!         .with_prop("x", 300)
//!         .with_children([
//!             encode::field("y", "frequency"),
//!             encode::field("color", "letter"),
//!             transform::stack_y(),
//!             coordinate::theta(),
//!         ]),
//! ]);
//! assert_eq!(vizir_spec::compile(&chart).kind(), "spaceLayer");
//! ```
//!
//! Variants that collide on their variant string (`pack`, `custom`) are kept apart by module.

#![no_std]

extern crate alloc;

macro_rules! constructors {
    ($kind:ident { $($fn_name:ident => $variant:ident,)* }) => {
        $(
            #[doc = concat!("Creates a [`", stringify!($kind), "::", stringify!($variant), "`] node.")]
            pub fn $fn_name() -> vizir_spec::Node {
                vizir_spec::Node::new(vizir_spec::$kind::$variant)
            }
        )*
    };
}

pub mod component;
pub mod coordinate;
pub mod data;
pub mod encode;
pub mod mark;
pub mod transform;
pub mod view;

pub use vizir_spec::{Node, NodeId, Value};
