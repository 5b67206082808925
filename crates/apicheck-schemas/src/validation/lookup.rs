//! Absence-tolerant lookups into a document tree
//!
//! Every accessor here degrades to an empty value when a key is missing or
//! an intermediate node has the wrong shape. Callers never branch on
//! "is this section present" themselves.
//!
//! Copyright (c) 2025 Apicheck Team
//! Licensed under the Apache-2.0 license

use serde_json::{Map, Value};

/// Defensive reads over a [`Value`] tree
pub trait TreeLookup {
    /// Follow `segments` through nested mappings
    ///
    /// Returns `None` as soon as a segment is missing or the current node is
    /// not a mapping. An empty `segments` returns the node itself.
    fn lookup(&self, segments: &[&str]) -> Option<&Value>;

    /// Mapping at `segments`, `None` if absent or not a mapping
    fn mapping_at(&self, segments: &[&str]) -> Option<&Map<String, Value>> {
        self.lookup(segments).and_then(Value::as_object)
    }

    /// Sequence at `segments`, `None` if absent or not a sequence
    fn sequence_at(&self, segments: &[&str]) -> Option<&Vec<Value>> {
        self.lookup(segments).and_then(Value::as_array)
    }

    /// String at `segments`, or `""`
    fn string_at(&self, segments: &[&str]) -> &str {
        self.lookup(segments).and_then(Value::as_str).unwrap_or_default()
    }

    /// Scalar at `segments`
    ///
    /// `None` for absent keys, explicit nulls, mappings and sequences.
    fn scalar_at(&self, segments: &[&str]) -> Option<&Value> {
        self.lookup(segments)
            .filter(|value| !value.is_null() && !value.is_object() && !value.is_array())
    }

    /// Whether the mapping at `segments` contains `key`
    fn has_key_at(&self, segments: &[&str], key: &str) -> bool {
        self.mapping_at(segments)
            .is_some_and(|mapping| mapping.contains_key(key))
    }

    /// Number of keys in the mapping at `segments`, or 0
    fn mapping_len_at(&self, segments: &[&str]) -> usize {
        self.mapping_at(segments).map_or(0, Map::len)
    }

    /// Number of entries in the sequence at `segments`, or 0
    fn sequence_len_at(&self, segments: &[&str]) -> usize {
        self.sequence_at(segments).map_or(0, Vec::len)
    }
}

impl TreeLookup for Value {
    fn lookup(&self, segments: &[&str]) -> Option<&Value> {
        segments
            .iter()
            .try_fold(self, |node, segment| node.as_object()?.get(*segment))
    }
}
