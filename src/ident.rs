//
//  nounproject
//  ident.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Polymorphic Resource Identifiers
//!
//! Several endpoints address a resource either by numeric id or by a
//! string slug/term. [`Identifier`] is the closed, two-case union used for
//! those call sites: an integer routes to the id-keyed endpoint variant, a
//! string routes to the slug- or term-keyed variant, and nothing else is
//! accepted.
//!
//! Endpoint methods take `impl Into<Identifier>`, so plain Rust values work
//! directly:
//!
//! ```rust
//! use nounproject::Identifier;
//!
//! let by_id: Identifier = 12.into();
//! let by_slug: Identifier = "goat".into();
//!
//! assert_eq!(by_id, Identifier::Id(12));
//! assert_eq!(by_slug, Identifier::Slug("goat".to_string()));
//! ```
//!
//! Dynamic values (configuration files, user input decoded as JSON) go
//! through the fallible conversion, which rejects every shape outside the
//! two accepted cases instead of coercing:
//!
//! ```rust
//! use nounproject::Identifier;
//! use serde_json::json;
//!
//! assert_eq!(Identifier::try_from(json!(12)).unwrap(), Identifier::Id(12));
//! assert_eq!(
//!     Identifier::try_from(json!("goat")).unwrap(),
//!     Identifier::Slug("goat".to_string())
//! );
//!
//! assert!(Identifier::try_from(json!(8.5)).is_err());
//! assert!(Identifier::try_from(json!(null)).is_err());
//! assert!(Identifier::try_from(json!([12])).is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Error;

/// A resource identifier: either a numeric id or a string slug/term.
///
/// Which rules the string case is validated under (slug rules or term
/// rules) depends on the endpoint it is passed to; the union itself only
/// fixes the accepted shapes.
///
/// # Notes
///
/// - Ids are signed so that non-positive values reach validation and fail
///   with a "must be positive" error rather than being unrepresentable.
/// - Serializes untagged: `Id(12)` becomes `12`, `Slug("goat")` becomes
///   `"goat"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// A numeric resource id.
    Id(i64),
    /// A string slug or search term.
    Slug(String),
}

impl From<i64> for Identifier {
    fn from(id: i64) -> Self {
        Identifier::Id(id)
    }
}

impl From<i32> for Identifier {
    fn from(id: i32) -> Self {
        Identifier::Id(id.into())
    }
}

impl From<u32> for Identifier {
    fn from(id: u32) -> Self {
        Identifier::Id(id.into())
    }
}

impl From<&str> for Identifier {
    fn from(slug: &str) -> Self {
        Identifier::Slug(slug.to_string())
    }
}

impl From<String> for Identifier {
    fn from(slug: String) -> Self {
        Identifier::Slug(slug)
    }
}

impl TryFrom<Value> for Identifier {
    type Error = Error;

    /// Converts a dynamic JSON value into an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IncorrectType`] for every value that is not an
    /// integer or a string: floats, booleans, null, arrays, and objects
    /// all fail rather than coerce.
    fn try_from(value: Value) -> Result<Self, Error> {
        match value {
            Value::Number(ref n) => match n.as_i64() {
                Some(id) => Ok(Identifier::Id(id)),
                None => Err(Error::IncorrectType {
                    parameter: "identifier",
                    allowed: "int or str",
                }),
            },
            Value::String(slug) => Ok(Identifier::Slug(slug)),
            _ => Err(Error::IncorrectType {
                parameter: "identifier",
                allowed: "int or str",
            }),
        }
    }
}

impl std::fmt::Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Identifier::Id(id) => write!(f, "{}", id),
            Identifier::Slug(slug) => write!(f, "{}", slug),
        }
    }
}
