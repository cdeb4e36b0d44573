// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The rendering-engine boundary.
//!
//! The engine itself (drawing, data loading, event dispatch) lives outside this crate. A
//! [`ChartRoot`](crate::ChartRoot) only needs to create one, hand it a whole specification,
//! ask it to draw, and release it.

extern crate alloc;

use alloc::string::String;

use kurbo::Size;
use vizir_spec::{Map, Value};

/// Where an engine draws: target size and the presentation attributes of its container.
#[derive(Clone, Debug, PartialEq)]
pub struct Container {
    /// Canvas size in pixels.
    pub size: Size,
    /// Space-separated class list for the container element.
    pub class_name: String,
    /// Inline style properties for the container element.
    pub style: Map,
}

/// A long-lived rendering engine instance.
///
/// An instance is owned by exactly one root, so calls are never concurrent.
pub trait Engine {
    /// Replaces the current specification wholesale.
    fn options(&mut self, spec: Value);

    /// Draws using the last supplied specification.
    fn render(&mut self);

    /// Releases every engine-held resource. Called exactly once, as the last call.
    fn destroy(&mut self);
}

/// A drawing surface an engine can be bound to.
pub trait Surface {
    /// The engine type created on this surface.
    type Engine: Engine;

    /// Creates an engine bound to this surface.
    fn create_engine(&mut self, container: &Container) -> Result<Self::Engine, crate::SurfaceError>;
}
