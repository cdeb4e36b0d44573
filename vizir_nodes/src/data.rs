// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data sources.
//!
//! Data sources land in the `data` slot. A fetch source only describes where and how to load the
//! data; acquisition belongs to the engine.

extern crate alloc;

use alloc::string::String;

use vizir_spec::{DataKind, Node, Value, VALUE_KEY};

/// Wire format of a fetched data source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DataFormat {
    /// Comma-separated values.
    Csv,
    /// A JSON array of records.
    Json,
}

impl DataFormat {
    /// Returns the format string understood by the engine.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
        }
    }
}

/// A fetch data source descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct FetchData {
    /// Source locator.
    pub url: String,
    /// Wire format. If `None`, the engine's default applies.
    pub format: Option<DataFormat>,
}

impl FetchData {
    /// Sets the wire format.
    pub fn format(mut self, format: DataFormat) -> Self {
        self.format = Some(format);
        self
    }

    /// Converts into a node.
    pub fn into_node(self) -> Node {
        let node = Node::new(DataKind::Fetch).with_prop(VALUE_KEY, self.url);
        match self.format {
            Some(format) => node.with_prop("format", format.name()),
            None => node,
        }
    }
}

impl From<FetchData> for Node {
    fn from(data: FetchData) -> Self {
        data.into_node()
    }
}

/// Creates an inline data source holding `values`.
pub fn inline(values: impl Into<Value>) -> Node {
    Node::new(DataKind::Inline).with_prop(VALUE_KEY, values)
}

/// Creates a fetch data source descriptor for `url`.
pub fn fetch(url: impl Into<String>) -> FetchData {
    FetchData {
        url: url.into(),
        format: None,
    }
}
