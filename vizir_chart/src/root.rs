// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The composition root.
//!
//! A [`ChartRoot`] owns one engine for its whole life:
//! - **Unmounted**: the declared tree and options are stored, nothing is pushed.
//! - **Mounted**: every change recompiles the whole tree and pushes it (`options`, then
//!   `render`).
//! - **Destroyed**: the engine was released; every further call is an error.
//!
//! All pushes take `&mut self`, so updates to the engine are serialized through the root and
//! `destroy` is always the last engine call.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

use vizir_spec::{Compiler, IntoChildren, Node, Value};

use crate::engine::{Engine, Surface};
use crate::options::{ChartOptions, Hooks, Interaction};
use crate::ChartError;

/// Observable lifecycle state of a [`ChartRoot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RootState {
    /// No engine yet.
    Unmounted,
    /// An engine is owned and receives pushes.
    Mounted,
    /// The engine was released (terminal).
    Destroyed,
}

enum Lifecycle<E> {
    Unmounted,
    Mounted(E),
    Destroyed,
}

/// Owns a rendering engine and keeps it in sync with a declared chart tree.
pub struct ChartRoot<E: Engine> {
    options: ChartOptions,
    hooks: Hooks,
    compiler: Compiler,
    top_level: Vec<Node>,
    lifecycle: Lifecycle<E>,
}

impl<E: Engine> ChartRoot<E> {
    /// Creates an unmounted root using the standard slot registry.
    pub fn new(options: ChartOptions) -> Self {
        Self {
            options,
            hooks: Hooks::default(),
            compiler: Compiler::default(),
            top_level: Vec::new(),
            lifecycle: Lifecycle::Unmounted,
        }
    }

    /// Sets the callback hooks.
    pub fn with_hooks(mut self, hooks: Hooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Uses `compiler` (and its registry) instead of the standard one.
    pub fn with_compiler(mut self, compiler: Compiler) -> Self {
        self.compiler = compiler;
        self
    }

    /// Returns the lifecycle state.
    pub fn state(&self) -> RootState {
        match self.lifecycle {
            Lifecycle::Unmounted => RootState::Unmounted,
            Lifecycle::Mounted(_) => RootState::Mounted,
            Lifecycle::Destroyed => RootState::Destroyed,
        }
    }

    /// Returns the current options.
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// Returns the declared top level.
    pub fn top_level(&self) -> &[Node] {
        &self.top_level
    }

    /// Returns the engine while mounted.
    pub fn engine(&self) -> Option<&E> {
        match &self.lifecycle {
            Lifecycle::Mounted(engine) => Some(engine),
            _ => None,
        }
    }

    /// Returns the engine mutably while mounted.
    pub fn engine_mut(&mut self) -> Option<&mut E> {
        match &mut self.lifecycle {
            Lifecycle::Mounted(engine) => Some(engine),
            _ => None,
        }
    }

    /// Creates the engine on `surface` and pushes the declared tree, if any.
    ///
    /// On failure the root stays unmounted and no engine call has been made.
    pub fn mount<S>(&mut self, surface: &mut S) -> Result<(), ChartError>
    where
        S: Surface<Engine = E>,
    {
        match self.lifecycle {
            Lifecycle::Unmounted => {}
            Lifecycle::Mounted(_) => {
                tracing::warn!("mount called on a mounted chart root");
                return Err(ChartError::AlreadyMounted);
            }
            Lifecycle::Destroyed => return Err(self.destroyed("mount")),
        }

        let container = self.options.container()?;
        let engine = surface.create_engine(&container).inspect_err(|err| {
            tracing::debug!(%err, "engine creation failed; chart root stays unmounted");
        })?;
        tracing::debug!(
            width = container.size.width,
            height = container.size.height,
            "chart root mounted"
        );
        self.lifecycle = Lifecycle::Mounted(engine);
        self.push();
        Ok(())
    }

    /// Replaces the declared top level, pushing it when mounted.
    pub fn set_children(&mut self, top_level: impl IntoChildren) -> Result<(), ChartError> {
        if matches!(self.lifecycle, Lifecycle::Destroyed) {
            return Err(self.destroyed("set_children"));
        }
        self.top_level = top_level.into_children();
        self.push();
        Ok(())
    }

    /// Replaces the options, pushing the tree again when mounted.
    ///
    /// The engine keeps the size it was created with; the new size only reaches it through the
    /// pushed `width`/`height` attributes.
    ///
    /// An invalid size is rejected and the current options are kept.
    pub fn set_options(&mut self, options: ChartOptions) -> Result<(), ChartError> {
        if matches!(self.lifecycle, Lifecycle::Destroyed) {
            return Err(self.destroyed("set_options"));
        }
        options.size()?;
        self.options = options;
        self.push();
        Ok(())
    }

    /// Replaces the hooks. Nothing is pushed.
    pub fn set_hooks(&mut self, hooks: Hooks) {
        self.hooks = hooks;
    }

    /// Recompiles and pushes without any change. Returns whether a push happened.
    pub fn refresh(&mut self) -> Result<bool, ChartError> {
        if matches!(self.lifecycle, Lifecycle::Destroyed) {
            return Err(self.destroyed("refresh"));
        }
        Ok(self.push())
    }

    /// Returns the specification a push would send, without touching the engine.
    ///
    /// `None` when no top level is declared.
    pub fn compile(&self) -> Result<Option<Value>, ChartError> {
        if matches!(self.lifecycle, Lifecycle::Destroyed) {
            return Err(self.destroyed("compile"));
        }
        Ok(self.merged_spec())
    }

    /// Forwards an element interaction to the interaction hook.
    pub fn dispatch_interaction(&mut self, interaction: &Interaction) -> Result<(), ChartError> {
        match self.lifecycle {
            Lifecycle::Mounted(_) => {}
            Lifecycle::Unmounted => return Err(ChartError::NotMounted),
            Lifecycle::Destroyed => return Err(self.destroyed("dispatch_interaction")),
        }
        tracing::trace!(event = %interaction.event, "element interaction");
        if let Some(hook) = self.hooks.element_interaction.as_mut() {
            hook(interaction);
        }
        Ok(())
    }

    /// Releases the engine. The root cannot be mounted again.
    pub fn unmount(&mut self) -> Result<(), ChartError> {
        match core::mem::replace(&mut self.lifecycle, Lifecycle::Destroyed) {
            Lifecycle::Mounted(mut engine) => {
                engine.destroy();
                tracing::debug!("chart root destroyed");
                Ok(())
            }
            Lifecycle::Unmounted => {
                self.lifecycle = Lifecycle::Unmounted;
                Err(ChartError::NotMounted)
            }
            Lifecycle::Destroyed => Err(self.destroyed("unmount")),
        }
    }

    fn merged_spec(&self) -> Option<Value> {
        let spec = self.compiler.compile_root(&self.top_level)?;
        Some(Value::Object(spec.layered_over(self.options.root_attributes())))
    }

    fn push(&mut self) -> bool {
        if !matches!(self.lifecycle, Lifecycle::Mounted(_)) {
            return false;
        }
        let Some(spec) = self.merged_spec() else {
            tracing::trace!("nothing declared; push skipped");
            return false;
        };
        let Lifecycle::Mounted(engine) = &mut self.lifecycle else {
            return false;
        };

        if let Some(hook) = self.hooks.before_render.as_mut() {
            hook(&spec);
        }
        tracing::debug!(nodes = self.top_level.len(), "pushing chart spec");
        engine.options(spec);
        engine.render();
        if let Some(hook) = self.hooks.after_render.as_mut() {
            hook();
        }
        true
    }

    fn destroyed(&self, op: &'static str) -> ChartError {
        tracing::warn!(op, "chart root used after destroy");
        ChartError::Destroyed
    }
}

impl<E: Engine> Drop for ChartRoot<E> {
    fn drop(&mut self) {
        if let Lifecycle::Mounted(engine) = &mut self.lifecycle {
            engine.destroy();
            tracing::debug!("chart root destroyed on drop");
        }
        self.lifecycle = Lifecycle::Destroyed;
    }
}

impl<E: Engine> fmt::Debug for ChartRoot<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartRoot")
            .field("state", &self.state())
            .field("options", &self.options)
            .field("hooks", &self.hooks)
            .field("top_level", &self.top_level.len())
            .finish_non_exhaustive()
    }
}
