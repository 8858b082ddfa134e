//
//  nounproject
//  api/usage.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Usage Endpoints
//!
//! Account metering: the hourly/daily/monthly request counters of the
//! authenticated account, and the publish notification that reports
//! licensed icon usage back to the service.
//!
//! # Endpoints
//!
//! | Method | Request |
//! |--------|---------|
//! | [`get_usage`](NounProject::get_usage) | `GET /oauth/usage` |
//! | [`report_usage`](NounProject::report_usage) | `POST /notify/publish` |

use std::collections::HashSet;

use reqwest::Method;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::ident::Identifier;
use crate::models::{PublishReceipt, Usage};

use super::client::{NounProject, Outcome};

/// The icon ids carried by a publish notification.
///
/// The service expects a single comma-joined string; this type performs
/// the joining for every accepted input shape. Strings pass through
/// verbatim, single integers become their decimal form, and containers
/// are joined element by element.
///
/// # Example
///
/// ```rust
/// use nounproject::IconIds;
///
/// assert_eq!(IconIds::from(12).as_str(), "12");
/// assert_eq!(IconIds::from("4,8,12").as_str(), "4,8,12");
/// assert_eq!(IconIds::from(vec![4, 8, 12]).as_str(), "4,8,12");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconIds {
    joined: String,
}

impl IconIds {
    fn from_parts<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = Identifier>,
    {
        let joined = parts
            .into_iter()
            .map(|ident| ident.to_string())
            .collect::<Vec<_>>()
            .join(",");
        IconIds { joined }
    }

    /// The comma-joined form sent to the service.
    pub fn as_str(&self) -> &str {
        &self.joined
    }
}

impl std::fmt::Display for IconIds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.joined)
    }
}

impl From<i64> for IconIds {
    fn from(id: i64) -> Self {
        IconIds {
            joined: id.to_string(),
        }
    }
}

impl From<i32> for IconIds {
    fn from(id: i32) -> Self {
        IconIds::from(i64::from(id))
    }
}

impl From<u32> for IconIds {
    fn from(id: u32) -> Self {
        IconIds::from(i64::from(id))
    }
}

impl From<&str> for IconIds {
    fn from(joined: &str) -> Self {
        IconIds {
            joined: joined.to_string(),
        }
    }
}

impl From<String> for IconIds {
    fn from(joined: String) -> Self {
        IconIds { joined }
    }
}

impl From<Identifier> for IconIds {
    fn from(ident: Identifier) -> Self {
        IconIds {
            joined: ident.to_string(),
        }
    }
}

impl<T: Into<Identifier>> From<Vec<T>> for IconIds {
    fn from(items: Vec<T>) -> Self {
        IconIds::from_parts(items.into_iter().map(Into::into))
    }
}

impl<T: Into<Identifier>, const N: usize> From<[T; N]> for IconIds {
    fn from(items: [T; N]) -> Self {
        IconIds::from_parts(items.into_iter().map(Into::into))
    }
}

impl<T: Into<Identifier>> From<HashSet<T>> for IconIds {
    fn from(items: HashSet<T>) -> Self {
        IconIds::from_parts(items.into_iter().map(Into::into))
    }
}

/// Dynamic construction from decoded JSON, mirroring the accepted static
/// shapes: an integer, a pre-joined string, or an array of either.
impl TryFrom<Value> for IconIds {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        const ALLOWED: &str = "list, set, str or int";
        let incorrect = || Error::IncorrectType {
            parameter: "icons",
            allowed: ALLOWED,
        };

        match value {
            Value::Number(number) => match number.as_i64() {
                Some(id) => Ok(IconIds::from(id)),
                None => Err(incorrect()),
            },
            Value::String(joined) => Ok(IconIds::from(joined)),
            Value::Array(items) => {
                let mut parts = Vec::with_capacity(items.len());
                for item in items {
                    parts.push(Identifier::try_from(item).map_err(|_| incorrect())?);
                }
                Ok(IconIds::from_parts(parts))
            }
            _ => Err(incorrect()),
        }
    }
}

impl NounProject {
    /// Retrieves the request counters of the authenticated account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nounproject::NounProject;
    ///
    /// async fn run() -> nounproject::Result<()> {
    ///     let client = NounProject::new("key", "secret")?;
    ///     let usage = client.get_usage().await?.into_model().unwrap();
    ///     println!("this month: {}", usage.path("usage.monthly")?);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_usage(&self) -> Result<Outcome<Usage>> {
        let description = self.describe(Method::GET, "oauth/usage", &[], None)?;
        self.execute(description).await
    }

    /// Reports published icons to the licensing endpoint.
    ///
    /// # Parameters
    ///
    /// - `icons` - The icon ids being reported; see [`IconIds`] for the
    ///   accepted shapes
    /// - `test` - When `true`, appends `?test=1` so the service treats
    ///   the notification as a dry run on its side
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use nounproject::NounProject;
    ///
    /// async fn run() -> nounproject::Result<()> {
    ///     let client = NounProject::new("key", "secret")?;
    ///     let receipt = client
    ///         .report_usage(vec![4, 8, 12], false)
    ///         .await?
    ///         .into_model()
    ///         .unwrap();
    ///     println!("{}", receipt);
    ///     Ok(())
    /// }
    /// ```
    pub async fn report_usage(
        &self,
        icons: impl Into<IconIds>,
        test: bool,
    ) -> Result<Outcome<PublishReceipt>> {
        let icons = icons.into();
        let query: Vec<(&'static str, String)> = if test {
            vec![("test", "1".to_string())]
        } else {
            Vec::new()
        };
        let body = json!({ "icons": icons.as_str() });
        let description = self.describe(Method::POST, "notify/publish", &query, Some(body))?;
        self.execute(description).await
    }
}
