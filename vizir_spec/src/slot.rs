// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot keys and their classification.
//!
//! A child's compiled output is placed under a slot key in its parent's specification. The key
//! decides how siblings sharing it are merged:
//! - **Collection** slots (`children`, `transform`, `legends`, `labels`) accumulate an ordered
//!   array.
//! - **Named-pair** slots (`encode`, `axis`) accumulate a `name -> value` object read from each
//!   child's own properties.
//! - Every other key is an **attribute** slot holding a single nested specification.

extern crate alloc;

use alloc::borrow::Cow;
use alloc::string::String;
use core::fmt;

/// The key under which a child is placed in its parent's specification.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotKey(Cow<'static, str>);

impl SlotKey {
    /// Child views and marks of a composition.
    pub const CHILDREN: Self = Self::from_static("children");
    /// Mark transforms.
    pub const TRANSFORM: Self = Self::from_static("transform");
    /// Legends.
    pub const LEGENDS: Self = Self::from_static("legends");
    /// Labels.
    pub const LABELS: Self = Self::from_static("labels");
    /// Encodings.
    pub const ENCODE: Self = Self::from_static("encode");
    /// Axes.
    pub const AXIS: Self = Self::from_static("axis");
    /// Data source.
    pub const DATA: Self = Self::from_static("data");
    /// Coordinate system.
    pub const COORDINATE: Self = Self::from_static("coordinate");
    /// Title.
    pub const TITLE: Self = Self::from_static("title");

    /// Creates a key from a static string.
    pub const fn from_static(key: &'static str) -> Self {
        Self(Cow::Borrowed(key))
    }

    /// Creates a key from any string.
    pub fn new(key: impl Into<Cow<'static, str>>) -> Self {
        Self(key.into())
    }

    /// Returns the key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Classifies this key.
    pub fn class(&self) -> SlotClass {
        classify(self)
    }
}

impl fmt::Display for SlotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&'static str> for SlotKey {
    fn from(key: &'static str) -> Self {
        Self::from_static(key)
    }
}

impl From<String> for SlotKey {
    fn from(key: String) -> Self {
        Self(Cow::Owned(key))
    }
}

/// How children sharing a slot key are merged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotClass {
    /// One nested specification; a later sibling with the same key replaces an earlier one.
    Attribute,
    /// An ordered array of nested specifications, in declaration order.
    Collection,
    /// A `name -> value` object built from each child's `name` and `value` properties.
    NamedPair,
}

/// Classifies a slot key.
///
/// Matching is exact on the key string, regardless of how the key was constructed.
pub fn classify(key: &SlotKey) -> SlotClass {
    match key.as_str() {
        "children" | "transform" | "legends" | "labels" => SlotClass::Collection,
        "encode" | "axis" => SlotClass::NamedPair,
        _ => SlotClass::Attribute,
    }
}
