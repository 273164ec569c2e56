//! Ordered field container for struct values.
//!
//! This module provides [`FieldMap`], a thin wrapper around [`IndexMap`] that
//! keeps struct fields in insertion order. Deterministic iteration order is
//! what makes dump output reproducible: two renderings of the same value must
//! be byte-identical.
//!
//! ## Examples
//!
//! ```rust
//! use deepfmt::{FieldMap, Value};
//!
//! let mut fields = FieldMap::new();
//! fields.insert("x".to_string(), Value::from(1i32));
//! fields.insert("y".to_string(), Value::from(2i32));
//!
//! let names: Vec<_> = fields.keys().cloned().collect();
//! assert_eq!(names, vec!["x", "y"]);
//! ```

use indexmap::IndexMap;

use crate::value::Value;

/// One struct field: its value and whether the field is private.
///
/// Private fields are skipped entirely when
/// [`Options::skip_private_fields`](crate::Options::skip_private_fields) is
/// set. Rust exposes no runtime enumeration of private members, so privacy is
/// declared explicitly at construction time.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub value: Value,
    pub private: bool,
}

/// An ordered map of field names to [`Field`]s.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct FieldMap(IndexMap<String, Field>);

impl FieldMap {
    /// Creates an empty `FieldMap`.
    #[must_use]
    pub fn new() -> Self {
        FieldMap(IndexMap::new())
    }

    /// Creates an empty `FieldMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        FieldMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a public field, returning any previous field under that name.
    pub fn insert(&mut self, name: String, value: Value) -> Option<Field> {
        self.0.insert(
            name,
            Field {
                value,
                private: false,
            },
        )
    }

    /// Inserts a private field, returning any previous field under that name.
    pub fn insert_private(&mut self, name: String, value: Value) -> Option<Field> {
        self.0.insert(
            name,
            Field {
                value,
                private: true,
            },
        )
    }

    /// Returns the field with the given name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.0.get(name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over field names, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Field> {
        self.0.keys()
    }

    /// Returns an iterator over `(name, field)` pairs, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Field> {
        self.0.iter()
    }
}

impl IntoIterator for FieldMap {
    type Item = (String, Field);
    type IntoIter = indexmap::map::IntoIter<String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a Field);
    type IntoIter = indexmap::map::Iter<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Value)> for FieldMap {
    fn from_iter<T: IntoIterator<Item = (String, Value)>>(iter: T) -> Self {
        FieldMap(
            iter.into_iter()
                .map(|(name, value)| {
                    (
                        name,
                        Field {
                            value,
                            private: false,
                        },
                    )
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut fields = FieldMap::new();
        fields.insert("z".to_string(), Value::from(1i32));
        fields.insert("a".to_string(), Value::from(2i32));
        fields.insert("m".to_string(), Value::from(3i32));
        let names: Vec<_> = fields.keys().cloned().collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_private_flag() {
        let mut fields = FieldMap::new();
        fields.insert("shown".to_string(), Value::from(1i32));
        fields.insert_private("hidden".to_string(), Value::from(2i32));
        assert!(!fields.get("shown").unwrap().private);
        assert!(fields.get("hidden").unwrap().private);
    }
}
