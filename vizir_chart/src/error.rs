// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lifecycle and surface errors.
//!
//! Problems inside a declared tree never surface here: they are recovered while compiling.
//! These errors report lifecycle misuse and engine allocation failures.

extern crate alloc;

use alloc::string::String;

use thiserror::Error;

/// Errors returned by a [`Surface`](crate::Surface) when creating an engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// The drawing surface does not exist or is not attached.
    #[error("drawing surface is unavailable")]
    Unavailable,
    /// The engine refused to initialize on the surface.
    #[error("engine creation failed: {0}")]
    Backend(String),
}

/// Errors returned by [`ChartRoot`](crate::ChartRoot).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ChartError {
    /// `mount` was called on a root that already owns an engine.
    #[error("chart root is already mounted")]
    AlreadyMounted,
    /// The operation needs a mounted root.
    #[error("chart root is not mounted")]
    NotMounted,
    /// The root released its engine and cannot be used again.
    #[error("chart root was destroyed")]
    Destroyed,
    /// The configured canvas size is negative or not finite.
    #[error("invalid chart size {width}x{height}")]
    InvalidSize {
        /// Configured width.
        width: f64,
        /// Configured height.
        height: f64,
    },
    /// Engine creation failed; the root stays unmounted.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
}
