// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart composition root for `vizir_spec` trees.
//!
//! [`ChartRoot`] ties a declared chart tree to one long-lived rendering engine:
//! - it creates the engine once, on a [`Surface`], at the configured size,
//! - on every tree or option change it recompiles the whole tree, layers the result over the
//!   root attributes (size and pass-through [`ChartOptions::engine_options`]) and pushes it,
//! - it releases the engine exactly once, on [`ChartRoot::unmount`] or drop.
//!
//! Bare marks declared at the top level are wrapped in an implicit `view`.
//!
//! The engine is an external collaborator behind the [`Engine`] trait; drawing, data loading
//! and event dispatch are its business.

#![no_std]

extern crate alloc;

mod engine;
mod error;
mod options;
mod root;

pub use engine::{Container, Engine, Surface};
pub use error::{ChartError, SurfaceError};
pub use options::{
    CONTAINER_CLASS, ChartOptions, DEFAULT_HEIGHT, DEFAULT_WIDTH, Hooks, Interaction,
};
pub use root::{ChartRoot, RootState};
