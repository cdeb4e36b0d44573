// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compiled specifications.

extern crate alloc;

use crate::value::{Map, Value};

/// Key holding a specification's variant string.
pub const TYPE_KEY: &str = "type";

/// Errors from building a [`Spec`] out of raw entries.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpecError {
    /// The entries have no string `type`.
    #[error("specification has no string `type` entry")]
    MissingType,
}

/// The compiled specification of one node.
///
/// Always contains [`TYPE_KEY`] set to the node's variant string, so it is never empty. Other
/// entries are copied properties, or slots holding a nested specification (object), an ordered
/// array of specifications, or a `name -> value` object.
///
/// Deserializing goes through [`TryFrom<Map>`] and rejects objects without a string `type`.
#[derive(Clone, Debug, PartialEq)]
pub struct Spec {
    entries: Map,
}

impl Spec {
    pub(crate) fn from_entries(entries: Map) -> Self {
        debug_assert!(
            entries.get(TYPE_KEY).is_some_and(|v| v.as_str().is_some()),
            "a spec always carries a string `type`"
        );
        Self { entries }
    }

    /// Returns the variant string stored under `type`.
    pub fn kind(&self) -> &str {
        self.entries
            .get(TYPE_KEY)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Returns an entry.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns `true` if the entry exists.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns every entry, including `type`.
    pub fn entries(&self) -> &Map {
        &self.entries
    }

    /// Returns the number of entries, including `type`.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `false`; see the type-level invariant.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the elements of an array-valued slot, or an empty slice.
    pub fn collection(&self, key: &str) -> &[Value] {
        self.get(key).and_then(Value::as_array).unwrap_or_default()
    }

    /// Consumes the spec, returning its entries.
    pub fn into_map(self) -> Map {
        self.entries
    }

    /// Layers this spec over `base`: entries of `base` are kept unless this spec has the key.
    pub fn layered_over(self, mut base: Map) -> Map {
        base.extend(self.entries);
        base
    }
}

impl TryFrom<Map> for Spec {
    type Error = SpecError;

    fn try_from(entries: Map) -> Result<Self, SpecError> {
        if entries.get(TYPE_KEY).and_then(Value::as_str).is_none() {
            return Err(SpecError::MissingType);
        }
        Ok(Self { entries })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Spec {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Spec {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Map::deserialize(deserializer)?;
        Self::try_from(entries).map_err(serde::de::Error::custom)
    }
}

impl From<Spec> for Value {
    fn from(spec: Spec) -> Self {
        Self::Object(spec.entries)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn entries_need_a_string_type() {
        let mut entries = Map::new();
        entries.insert("x".into(), Value::from(1));
        assert_eq!(Spec::try_from(entries.clone()), Err(SpecError::MissingType));

        entries.insert(TYPE_KEY.into(), Value::from(3));
        assert_eq!(Spec::try_from(entries.clone()), Err(SpecError::MissingType));

        entries.insert(TYPE_KEY.into(), Value::from("point"));
        let spec = Spec::try_from(entries).unwrap();
        assert_eq!(spec.kind(), "point");
        assert_eq!(spec.len(), 2);
        assert!(!spec.is_empty());
    }
}
