//
//  nounproject
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Response Models
//!
//! Typed containers for the dynamically-shaped JSON the API returns.
//! [`Model`] wraps a single result object, [`ModelList`] wraps an array of
//! them; both are parameterized by a zero-sized *kind* marker that declares
//! how the raw payload is shaped for that resource.
//!
//! ## Kinds
//!
//! | Kind | Unwrap key | Shown fields | Item keys (lists) |
//! |------|------------|--------------|-------------------|
//! | [`CollectionKind`] | `collection` | Name, Slug, Id | `collections` |
//! | [`IconKind`] | `icon` | Term, Slug, Id | `icons`, `recent_uploads`, `uploads` |
//! | [`UsageKind`] | none | Hourly, Daily, Monthly | not listed |
//! | [`PublishKind`] | none | Licenses Consumed, Result | not listed |
//!
//! An *unwrap key* is a top-level wrapper the API puts around some single
//! results (`{"collection": {...}}`); when present, the model stores the
//! inner object. The *shown fields* are the declared output keys used for
//! the textual representation; everything else stays reachable through
//! [`Field`] access.
//!
//! ## Example
//!
//! ```rust
//! use nounproject::Collection;
//! use serde_json::json;
//!
//! let collection = Collection::parse(json!({
//!     "collection": { "name": "Arrows-1", "slug": "arrows-1", "id": 220 }
//! }));
//!
//! assert_eq!(collection.get("name").unwrap().as_str(), Some("Arrows-1"));
//! assert_eq!(
//!     collection.to_string(),
//!     "<Collection: Name: Arrows-1, Slug: arrows-1, Id: 220>"
//! );
//! ```

mod access;
mod collection;
mod icon;
mod usage;

pub use access::Field;
pub use collection::*;
pub use icon::*;
pub use usage::*;

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::{Error, ResponseContext, Result};

/// One entry of a kind's textual representation: where to find the value
/// and what to call it.
#[derive(Debug, Clone, Copy)]
pub struct OutputKey {
    /// Path segments resolved against the model's JSON, outermost first.
    pub path: &'static [&'static str],
    /// Display title shown before the value.
    pub title: &'static str,
}

/// Declares how a resource kind's payload is shaped.
///
/// Implemented by zero-sized markers; the constants drive parsing and the
/// `Display` representation of [`Model`].
pub trait Kind {
    /// Type name shown in the textual representation.
    const NAME: &'static str;

    /// Top-level wrapper key unwrapped before the payload is stored, if
    /// the API wraps single results for this kind.
    const UNWRAP_KEY: Option<&'static str>;

    /// Ordered fields shown in the textual representation. Fields that
    /// are absent (or null) in a given payload are skipped.
    const OUTPUT_KEYS: &'static [OutputKey];
}

/// Marks a kind that the API also returns in list form.
pub trait ListedKind: Kind {
    /// Candidate top-level keys naming the item array. Different endpoints
    /// name their array field differently; the first key present in the
    /// response wins.
    const ITEM_KEYS: &'static [&'static str];
}

/// Glue used by the endpoint pipeline to turn a response body into the
/// designated result type.
pub(crate) trait FromResponse: Sized {
    fn from_response(data: Value, context: ResponseContext) -> Result<Self>;
}

/// A single parsed API result.
///
/// The payload stays dynamic: fields are reached through [`get`](Self::get)
/// / [`path`](Self::path) cursors or decoded into a caller-defined type
/// with [`decode`](Self::decode). Equality compares payloads only, and the
/// `Display` form shows the kind's declared output keys:
/// `<Collection: Name: Arrows-1, Slug: arrows-1, Id: 220>`.
#[derive(Debug, Clone)]
pub struct Model<K: Kind> {
    json: Value,
    response: Option<ResponseContext>,
    kind: PhantomData<K>,
}

impl<K: Kind> Model<K> {
    /// Parses a model from a raw JSON payload, unwrapping the kind's
    /// wrapper key when present.
    pub fn parse(data: Value) -> Self {
        Self::attach(data, None)
    }

    /// Parses a model and records the response it came from.
    pub(crate) fn attach(mut data: Value, response: Option<ResponseContext>) -> Self {
        if let Some(key) = K::UNWRAP_KEY {
            if let Some(inner) = data.get_mut(key) {
                data = inner.take();
            }
        }
        Model {
            json: data,
            response,
            kind: PhantomData,
        }
    }

    /// The raw JSON payload.
    pub fn json(&self) -> &Value {
        &self.json
    }

    /// A cursor over the payload root.
    pub fn fields(&self) -> Field<'_> {
        Field::new(&self.json)
    }

    /// Looks up a top-level field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KeyNotFound`] if the key is absent.
    pub fn get(&self, key: &str) -> Result<Field<'_>> {
        self.fields().get(key)
    }

    /// Walks a dotted path into the payload, e.g. `"author.username"`.
    pub fn path(&self, path: &str) -> Result<Field<'_>> {
        self.fields().path(path)
    }

    /// Context of the HTTP response this model was parsed from, when it
    /// came off the wire rather than from [`parse`](Self::parse).
    pub fn response(&self) -> Option<&ResponseContext> {
        self.response.as_ref()
    }

    /// Decodes the payload into a caller-defined type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the payload does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_value(self.json.clone())?)
    }
}

impl<K: Kind> Default for Model<K> {
    /// An empty, not-yet-parsed model.
    fn default() -> Self {
        Model {
            json: Value::Object(Default::default()),
            response: None,
            kind: PhantomData,
        }
    }
}

impl<K: Kind> PartialEq for Model<K> {
    fn eq(&self, other: &Self) -> bool {
        self.json == other.json
    }
}

impl<K: Kind> Serialize for Model<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.json.serialize(serializer)
    }
}

impl<K: Kind> std::fmt::Display for Model<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}: ", K::NAME)?;
        let mut first = true;
        for key in K::OUTPUT_KEYS {
            let mut value = Some(&self.json);
            for segment in key.path {
                value = value.and_then(|v| v.get(segment));
            }
            if let Some(value) = value.filter(|v| !v.is_null()) {
                if !first {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key.title, Field::new(value))?;
                first = false;
            }
        }
        write!(f, ">")
    }
}

impl<K: Kind> FromResponse for Model<K> {
    fn from_response(data: Value, context: ResponseContext) -> Result<Self> {
        Ok(Model::attach(data, Some(context)))
    }
}

/// An ordered list of parsed API results.
///
/// Built from the one top-level array field of a list response; iteration
/// order equals the order on the wire. The remaining top-level keys
/// (pagination counters and the like) stay reachable through
/// [`meta`](Self::meta).
#[derive(Debug, Clone)]
pub struct ModelList<K: ListedKind> {
    items: Vec<Model<K>>,
    json: Value,
    response: Option<ResponseContext>,
}

impl<K: ListedKind> ModelList<K> {
    /// Parses a list from a raw JSON payload.
    ///
    /// The kind's candidate item keys are tried in order; the first one
    /// present names the item array.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingListKey`] if no candidate key holds an
    /// array.
    pub fn parse(data: Value) -> Result<Self> {
        Self::attach(data, None)
    }

    pub(crate) fn attach(data: Value, response: Option<ResponseContext>) -> Result<Self> {
        let candidates = K::ITEM_KEYS;
        let key = candidates
            .iter()
            .copied()
            .find(|key| data.get(key).is_some())
            .ok_or(Error::MissingListKey { candidates })?;
        let entries = data
            .get(key)
            .and_then(Value::as_array)
            .ok_or(Error::MissingListKey { candidates })?;
        let items = entries.iter().cloned().map(Model::parse).collect();
        Ok(ModelList {
            items,
            json: data,
            response,
        })
    }

    /// Number of items in the list.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The item at `index`, if within range.
    pub fn get(&self, index: usize) -> Option<&Model<K>> {
        self.items.get(index)
    }

    /// The items as a slice.
    pub fn items(&self) -> &[Model<K>] {
        &self.items
    }

    /// Iterates over the items in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, Model<K>> {
        self.items.iter()
    }

    /// A cursor over the whole top-level response mapping.
    ///
    /// This is where the extra keys of a list response live, e.g.
    /// `list.meta().get("generated_at")`.
    pub fn meta(&self) -> Field<'_> {
        Field::new(&self.json)
    }

    /// The raw top-level JSON payload.
    pub fn json(&self) -> &Value {
        &self.json
    }

    /// Context of the HTTP response this list was parsed from.
    pub fn response(&self) -> Option<&ResponseContext> {
        self.response.as_ref()
    }
}

impl<K: ListedKind> PartialEq for ModelList<K> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<K: ListedKind> Serialize for ModelList<K> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.json.serialize(serializer)
    }
}

impl<K: ListedKind> std::ops::Index<usize> for ModelList<K> {
    type Output = Model<K>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<K: ListedKind> IntoIterator for ModelList<K> {
    type Item = Model<K>;
    type IntoIter = std::vec::IntoIter<Model<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, K: ListedKind> IntoIterator for &'a ModelList<K> {
    type Item = &'a Model<K>;
    type IntoIter = std::slice::Iter<'a, Model<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<K: ListedKind> std::fmt::Display for ModelList<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[")?;
        for (position, item) in self.items.iter().enumerate() {
            if position > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}

impl<K: ListedKind> FromResponse for ModelList<K> {
    fn from_response(data: Value, context: ResponseContext) -> Result<Self> {
        ModelList::attach(data, Some(context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn collection_payload() -> Value {
        json!({
            "collection": {
                "name": "Arrows-1",
                "slug": "arrows-1",
                "id": 220,
                "author": { "username": "smashicons" }
            }
        })
    }

    #[test]
    fn test_wrapper_key_is_unwrapped() {
        let model = Collection::parse(collection_payload());
        assert_eq!(model.get("name").unwrap().as_str(), Some("Arrows-1"));
        assert!(model.get("collection").is_err());
    }

    #[test]
    fn test_unwrapped_payloads_parse_as_is() {
        let model = Collection::parse(json!({ "name": "Arrows-1", "id": 220 }));
        assert_eq!(model.get("id").unwrap().as_i64(), Some(220));
    }

    #[test]
    fn test_access_agrees_with_raw_json() {
        let model = Collection::parse(collection_payload());
        for key in ["name", "slug", "id"] {
            assert_eq!(model.get(key).unwrap().value(), &model.json()[key]);
        }
        assert_eq!(
            model.path("author.username").unwrap().value(),
            &model.json()["author"]["username"]
        );
    }

    #[test]
    fn test_display_skips_absent_output_keys() {
        let model = Collection::parse(json!({ "collection": { "name": "Arrows-1" } }));
        assert_eq!(model.to_string(), "<Collection: Name: Arrows-1>");

        let empty = Collection::parse(json!({}));
        assert_eq!(empty.to_string(), "<Collection: >");
    }

    #[test]
    fn test_equality_is_defined_by_payload() {
        let context = ResponseContext {
            status: 200,
            url: "http://api.thenounproject.com/collection/220".to_string(),
            body: String::new(),
        };
        let from_wire = Collection::attach(collection_payload(), Some(context));
        let from_json = Collection::parse(collection_payload());
        assert_eq!(from_wire, from_json);
        assert!(from_wire.response().is_some());
        assert!(from_json.response().is_none());
    }

    #[test]
    fn test_decode_into_a_typed_struct() {
        #[derive(serde::Deserialize)]
        struct Summary {
            name: String,
            id: i64,
        }

        let model = Collection::parse(collection_payload());
        let summary: Summary = model.decode().unwrap();
        assert_eq!(summary.name, "Arrows-1");
        assert_eq!(summary.id, 220);
    }

    #[test]
    fn test_list_preserves_wire_order() {
        let list = CollectionList::parse(json!({
            "collections": [
                { "name": "first", "id": 1 },
                { "name": "second", "id": 2 },
                { "name": "third", "id": 3 }
            ]
        }))
        .unwrap();

        assert_eq!(list.len(), 3);
        let names: Vec<String> = list
            .iter()
            .map(|m| m.get("name").unwrap().to_string())
            .collect();
        assert_eq!(names, ["first", "second", "third"]);
        assert_eq!(list[1].get("id").unwrap().as_i64(), Some(2));
    }

    #[test]
    fn test_list_candidate_keys_are_tried_in_order() {
        let recent = IconList::parse(json!({ "recent_uploads": [{ "id": 1 }] })).unwrap();
        assert_eq!(recent.len(), 1);

        let uploads = IconList::parse(json!({ "uploads": [{ "id": 1 }, { "id": 2 }] })).unwrap();
        assert_eq!(uploads.len(), 2);

        let plain = IconList::parse(json!({ "icons": [] })).unwrap();
        assert!(plain.is_empty());
    }

    #[test]
    fn test_list_without_item_key_fails() {
        let result = CollectionList::parse(json!({ "total": 3 }));
        assert!(matches!(result, Err(Error::MissingListKey { .. })));

        // A present key that is not an array is still not an item list.
        let result = CollectionList::parse(json!({ "collections": 3 }));
        assert!(matches!(result, Err(Error::MissingListKey { .. })));
    }

    #[test]
    fn test_extra_top_level_keys_stay_reachable() {
        let list = IconList::parse(json!({
            "generated_at": "Fri, 26 Jul 2019 09:15:11 GMT",
            "icons": [{ "id": 1 }],
            "total": 1
        }))
        .unwrap();

        assert_eq!(
            list.meta().get("generated_at").unwrap().as_str(),
            Some("Fri, 26 Jul 2019 09:15:11 GMT")
        );
        assert_eq!(list.meta().get("total").unwrap().as_i64(), Some(1));
        // The item key itself is part of the top-level mapping too.
        assert_eq!(list.meta().get("icons").unwrap().len(), 1);
    }

    #[test]
    fn test_list_display_joins_item_representations() {
        let list = CollectionList::parse(json!({
            "collections": [
                { "name": "Arrows-1", "slug": "arrows-1", "id": 220 },
                { "name": "Arrows-2", "slug": "arrows-2", "id": 221 }
            ]
        }))
        .unwrap();

        assert_eq!(
            list.to_string(),
            "[<Collection: Name: Arrows-1, Slug: arrows-1, Id: 220>, \
             <Collection: Name: Arrows-2, Slug: arrows-2, Id: 221>]"
        );
    }

    #[test]
    fn test_serialization_round_trips_the_payload() {
        let model = Collection::parse(collection_payload());
        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(&value, model.json());
    }
}
