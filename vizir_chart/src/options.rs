// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart configuration and callback hooks.

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use core::fmt;

use kurbo::Size;
use vizir_spec::{Map, Value};

use crate::ChartError;
use crate::engine::Container;

/// Default canvas width in pixels.
pub const DEFAULT_WIDTH: f64 = 600.0;
/// Default canvas height in pixels.
pub const DEFAULT_HEIGHT: f64 = 300.0;
/// Class always present on the chart container.
pub const CONTAINER_CLASS: &str = "vizir-chart";

/// Root-level chart configuration.
///
/// `width`, `height` and `engine_options` are merged under every compiled specification pushed
/// to the engine; the compiled specification wins on key conflicts. `class_name` and `style`
/// only describe the container.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Canvas width in pixels.
    pub width: f64,
    /// Canvas height in pixels.
    pub height: f64,
    /// Extra classes for the container.
    pub class_name: String,
    /// Inline style for the container, layered over the default block style.
    pub style: Map,
    /// Pass-through engine options (`autoFit`, `theme`, `padding`, ...).
    pub engine_options: Map,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            class_name: String::new(),
            style: Map::new(),
            engine_options: Map::new(),
        }
    }
}

impl ChartOptions {
    /// Sets the canvas size.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Sets the extra container classes.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Sets one inline container style property.
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.style.insert(key.into(), value.into());
        self
    }

    /// Sets one pass-through engine option.
    pub fn with_engine_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.engine_options.insert(key.into(), value.into());
        self
    }

    /// Returns the validated canvas size.
    pub fn size(&self) -> Result<Size, ChartError> {
        let valid = |v: f64| v.is_finite() && v >= 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(Size::new(self.width, self.height))
        } else {
            Err(ChartError::InvalidSize {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Describes the container an engine is created in.
    pub fn container(&self) -> Result<Container, ChartError> {
        let size = self.size()?;
        let class_name = match self.class_name.trim() {
            "" => String::from(CONTAINER_CLASS),
            extra => format!("{CONTAINER_CLASS} {extra}"),
        };
        let mut style: Map = [
            ("display", "block"),
            ("width", "100%"),
            ("height", "100%"),
        ]
        .into_iter()
        .map(|(k, v)| (String::from(k), Value::from(v)))
        .collect();
        style.extend(self.style.iter().map(|(k, v)| (k.clone(), v.clone())));
        Ok(Container {
            size,
            class_name,
            style,
        })
    }

    /// Root attributes that compiled specifications are layered over.
    pub fn root_attributes(&self) -> Map {
        let mut attrs = self.engine_options.clone();
        attrs.insert("width".into(), self.width.into());
        attrs.insert("height".into(), self.height.into());
        attrs
    }
}

/// An element interaction forwarded from the engine.
#[derive(Clone, Debug, PartialEq)]
pub struct Interaction {
    /// Event name, e.g. `click` or `pointerover`.
    pub event: String,
    /// Variant string of the mark that was hit, if any.
    pub mark: Option<String>,
    /// The datum bound to the hit element.
    pub datum: Value,
}

impl Interaction {
    /// Creates an interaction with no target.
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            event: event.into(),
            mark: None,
            datum: Value::Null,
        }
    }

    /// Sets the mark that was hit.
    pub fn with_mark(mut self, mark: impl Into<String>) -> Self {
        self.mark = Some(mark.into());
        self
    }

    /// Sets the datum.
    pub fn with_datum(mut self, datum: impl Into<Value>) -> Self {
        self.datum = datum.into();
        self
    }
}

type BeforeRender = Box<dyn FnMut(&Value)>;
type AfterRender = Box<dyn FnMut()>;
type ElementInteraction = Box<dyn FnMut(&Interaction)>;

/// Lifecycle and interaction callbacks.
#[derive(Default)]
pub struct Hooks {
    pub(crate) before_render: Option<BeforeRender>,
    pub(crate) after_render: Option<AfterRender>,
    pub(crate) element_interaction: Option<ElementInteraction>,
}

impl Hooks {
    /// Called with the merged specification right before it is pushed to the engine.
    pub fn on_before_render(mut self, hook: impl FnMut(&Value) + 'static) -> Self {
        self.before_render = Some(Box::new(hook));
        self
    }

    /// Called after the engine was asked to render.
    pub fn on_after_render(mut self, hook: impl FnMut() + 'static) -> Self {
        self.after_render = Some(Box::new(hook));
        self
    }

    /// Called for every interaction forwarded through
    /// [`ChartRoot::dispatch_interaction`](crate::ChartRoot::dispatch_interaction).
    pub fn on_element_interaction(mut self, hook: impl FnMut(&Interaction) + 'static) -> Self {
        self.element_interaction = Some(Box::new(hook));
        self
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before_render", &self.before_render.is_some())
            .field("after_render", &self.after_render.is_some())
            .field("element_interaction", &self.element_interaction.is_some())
            .finish()
    }
}
