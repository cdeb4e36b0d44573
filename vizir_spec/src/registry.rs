// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The default-slot registry.
//!
//! When a child does not name its slot explicitly, the registry supplies the default slot for its
//! type tag. The table is a single explicit, versioned configuration: it is built once (usually
//! [`SlotRegistry::standard`]) and is never mutated afterwards. Tags missing from a table fall
//! back to their own variant string.

use hashbrown::HashMap;

use crate::slot::SlotKey;
use crate::tag::{ComponentKind, TypeTag};

/// An immutable table from type tag to default parent slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotRegistry {
    version: u32,
    table: HashMap<TypeTag, SlotKey>,
}

impl SlotRegistry {
    /// Version number of the [`standard`](Self::standard) table.
    pub const STANDARD_VERSION: u32 = 1;

    /// The standard table.
    ///
    /// - views and marks: `children`
    /// - data sources: `data`
    /// - encodings: `encode`
    /// - transforms: `transform`
    /// - coordinates: `coordinate`
    /// - `axisX`/`axisY`/`axisZ`: `axis`
    /// - `title`: `title`, `legends`: `legends`
    /// - `slider`, `scrollbar`, `tooltip`: their own variant string
    pub fn standard() -> Self {
        let mut builder = Self::builder(Self::STANDARD_VERSION);
        for tag in TypeTag::all() {
            builder = builder.slot(tag, standard_slot(tag));
        }
        builder.build()
    }

    /// Starts an empty table with the given version.
    pub fn builder(version: u32) -> SlotRegistryBuilder {
        SlotRegistryBuilder {
            registry: Self {
                version,
                table: HashMap::new(),
            },
        }
    }

    /// Returns the table version.
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the registered default slot for `tag`, if any.
    pub fn get(&self, tag: TypeTag) -> Option<&SlotKey> {
        self.table.get(&tag)
    }

    /// Returns the default slot for `tag`, falling back to the tag's variant string.
    pub fn default_slot(&self, tag: TypeTag) -> SlotKey {
        self.get(tag)
            .cloned()
            .unwrap_or_else(|| SlotKey::from_static(tag.variant()))
    }

    /// Returns the number of registered tags.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if no tag is registered.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

/// Builder for a custom [`SlotRegistry`].
#[derive(Clone, Debug)]
pub struct SlotRegistryBuilder {
    registry: SlotRegistry,
}

impl SlotRegistryBuilder {
    /// Registers (or replaces) the default slot for `tag`.
    pub fn slot(mut self, tag: impl Into<TypeTag>, key: impl Into<SlotKey>) -> Self {
        self.registry.table.insert(tag.into(), key.into());
        self
    }

    /// Starts from every entry of `base`, keeping this builder's version.
    pub fn extend_from(mut self, base: &SlotRegistry) -> Self {
        self.registry
            .table
            .extend(base.table.iter().map(|(t, k)| (*t, k.clone())));
        self
    }

    /// Finishes the table.
    pub fn build(self) -> SlotRegistry {
        self.registry
    }
}

fn standard_slot(tag: TypeTag) -> SlotKey {
    match tag {
        TypeTag::View(_) | TypeTag::Mark(_) => SlotKey::CHILDREN,
        TypeTag::Data(_) => SlotKey::DATA,
        TypeTag::Encode(_) => SlotKey::ENCODE,
        TypeTag::Transform(_) => SlotKey::TRANSFORM,
        TypeTag::Coordinate(_) => SlotKey::COORDINATE,
        TypeTag::Component(ComponentKind::AxisX | ComponentKind::AxisY | ComponentKind::AxisZ) => {
            SlotKey::AXIS
        }
        TypeTag::Component(ComponentKind::Title) => SlotKey::TITLE,
        TypeTag::Component(ComponentKind::Legends) => SlotKey::LEGENDS,
        TypeTag::Component(kind) => SlotKey::from_static(kind.name()),
    }
}
