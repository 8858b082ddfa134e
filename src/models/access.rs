//
//  nounproject
//  models/access.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Dynamic Field Access
//!
//! The API returns heterogeneous, endpoint-shaped JSON. [`Field`] is a
//! borrowed cursor over that data: every navigation step (`get` for mapping
//! keys, `at` for sequence indices, `path` for dotted chains) returns
//! another cursor, so nested values are reachable to any depth without
//! manual `serde_json` plumbing.
//!
//! Lookups are strict. A missing key or out-of-range index is an error
//! naming what was asked for, never a silent default.
//!
//! ```rust
//! use nounproject::Field;
//! use serde_json::json;
//!
//! let data = json!({
//!     "collection": { "name": "Arrows-1", "icons": [{ "id": 12 }] }
//! });
//!
//! let root = Field::new(&data);
//! let name = root.get("collection").and_then(|c| c.get("name")).unwrap();
//! assert_eq!(name.as_str(), Some("Arrows-1"));
//!
//! // Equivalent dotted form; numeric segments index into sequences.
//! let id = root.path("collection.icons.0.id").unwrap();
//! assert_eq!(id.as_i64(), Some(12));
//!
//! assert!(root.get("nope").is_err());
//! ```

use serde_json::Value;

use crate::error::{Error, Result};

/// A borrowed cursor over a parsed JSON value.
///
/// Cursors are cheap to copy and never own data; they stay valid for as
/// long as the model (or raw value) they were created from.
#[derive(Debug, Clone, Copy)]
pub struct Field<'a> {
    value: &'a Value,
}

impl<'a> Field<'a> {
    /// Wraps a raw JSON value in a cursor.
    pub fn new(value: &'a Value) -> Self {
        Field { value }
    }

    /// Looks up a key in a mapping value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent, or if this
    /// value is not a mapping at all.
    pub fn get(&self, key: &str) -> Result<Field<'a>> {
        match self.value.get(key) {
            Some(value) => Ok(Field { value }),
            None => Err(Error::KeyNotFound { key: key.to_string() }),
        }
    }

    /// Looks up an index in a sequence value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfRange`] if the index is past the end of
    /// the sequence; non-sequence values have length zero.
    pub fn at(&self, index: usize) -> Result<Field<'a>> {
        let len = self.len();
        match self.value.get(index) {
            Some(value) => Ok(Field { value }),
            None => Err(Error::IndexOutOfRange { index, len }),
        }
    }

    /// Walks a dotted path of keys and indices.
    ///
    /// Each `.`-separated segment is applied in turn: segments that parse
    /// as an integer index into sequences, everything else is a mapping
    /// key. `path("usage.hourly")` is equivalent to
    /// `get("usage")?.get("hourly")`.
    ///
    /// # Errors
    ///
    /// Fails with the error of the first segment that does not resolve.
    pub fn path(&self, path: &str) -> Result<Field<'a>> {
        let mut cursor = *self;
        for segment in path.split('.') {
            cursor = if cursor.value.is_array() {
                match segment.parse::<usize>() {
                    Ok(index) => cursor.at(index)?,
                    Err(_) => cursor.get(segment)?,
                }
            } else {
                cursor.get(segment)?
            };
        }
        Ok(cursor)
    }

    /// Whether a mapping value contains the given key.
    ///
    /// Returns `false` for non-mapping values.
    pub fn contains(&self, key: &str) -> bool {
        self.value.get(key).is_some()
    }

    /// Number of elements in a sequence, entries in a mapping, or zero
    /// for scalar values.
    pub fn len(&self) -> usize {
        match self.value {
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            _ => 0,
        }
    }

    /// Whether [`len`](Self::len) is zero.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the elements of a sequence value.
    ///
    /// Non-sequence values yield nothing.
    pub fn iter(&self) -> impl Iterator<Item = Field<'a>> {
        self.value
            .as_array()
            .map(|items| items.as_slice())
            .unwrap_or(&[])
            .iter()
            .map(Field::new)
    }

    /// Iterates over the keys of a mapping value.
    ///
    /// Non-mapping values yield nothing.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> {
        self.value
            .as_object()
            .into_iter()
            .flat_map(|entries| entries.keys().map(String::as_str))
    }

    /// The underlying raw JSON value.
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// The value as a string slice, if it is a string.
    pub fn as_str(&self) -> Option<&'a str> {
        self.value.as_str()
    }

    /// The value as a signed integer, if it is one.
    pub fn as_i64(&self) -> Option<i64> {
        self.value.as_i64()
    }

    /// The value as an unsigned integer, if it is one.
    pub fn as_u64(&self) -> Option<u64> {
        self.value.as_u64()
    }

    /// The value as a float, if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        self.value.as_f64()
    }

    /// The value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        self.value.as_bool()
    }

    /// Whether the value is JSON `null`.
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }
}

/// Strings render unquoted; every other value renders as compact JSON.
impl std::fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.value {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}
