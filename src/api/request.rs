//
//  nounproject
//  api/request.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Request Descriptions
//!
//! Every endpoint method assembles a [`RequestDescription`] before anything
//! touches the network: the HTTP method, the fully addressed URL (query
//! string included), the optional JSON body, and the computed OAuth
//! authorization header. The description is built fresh per call, immutable
//! once constructed, and consumed exactly once, either by the transport or,
//! in dry-run mode, by the caller.
//!
//! [`PageOptions`] carries the `limit` / `offset` / `page` paging parameters
//! shared by the list endpoints. Fields left unset never appear in the query
//! string, and the emitted order is fixed: endpoint-specific parameters
//! first, then `limit`, `offset`, `page`.
//!
//! # Example
//!
//! ```rust,no_run
//! use nounproject::{NounProject, PageOptions};
//!
//! async fn inspect() -> nounproject::Result<()> {
//!     let client = NounProject::builder()
//!         .key("key")
//!         .secret("secret")
//!         .dry_run(true)
//!         .build()?;
//!
//!     let outcome = client
//!         .get_collection_icons(12, PageOptions::new().limit(12).page(3))
//!         .await?;
//!     let request = outcome.into_request().expect("dry-run returns the request");
//!     assert_eq!(
//!         request.url().as_str(),
//!         "http://api.thenounproject.com/collection/12/icons?limit=12&page=3"
//!     );
//!     Ok(())
//! }
//! ```

use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::auth::Signer;

/// A fully assembled, signed API request.
///
/// GET requests carry their parameters in the URL's query string; POST
/// requests carry them as a JSON body. The `Authorization` header value is
/// computed at build time so that dry-run callers can assert on the exact
/// request the transport would send.
///
/// # Fields
///
/// | Accessor | Description |
/// |----------|-------------|
/// | [`method`](Self::method) | The HTTP method (`GET` or `POST`) |
/// | [`url`](Self::url) | The full request URL, query string included |
/// | [`body`](Self::body) | The JSON body, for POST requests |
/// | [`authorization`](Self::authorization) | The computed `OAuth ...` header value |
#[derive(Debug, Clone)]
pub struct RequestDescription {
    method: Method,
    url: Url,
    body: Option<Value>,
    authorization: String,
}

impl RequestDescription {
    /// Assembles a description and signs it.
    ///
    /// The signature covers the method, the URL, and its query pairs, so
    /// the URL must be complete before this point. JSON bodies are not part
    /// of the signature.
    pub(crate) fn build(method: Method, url: Url, body: Option<Value>, signer: &Signer) -> Self {
        let authorization = signer.authorization(&method, &url);
        RequestDescription {
            method,
            url,
            body,
            authorization,
        }
    }

    /// The HTTP method of the request.
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The full request URL, query string included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// The JSON body, present on POST requests.
    pub fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// The computed `Authorization` header value.
    ///
    /// Always of the form `OAuth oauth_consumer_key="...", ...`; the nonce
    /// and timestamp inside are fresh per description.
    pub fn authorization(&self) -> &str {
        &self.authorization
    }
}

impl std::fmt::Display for RequestDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.url)
    }
}

/// Optional paging parameters accepted by the list endpoints.
///
/// All fields default to unset; an unset field is dropped from the query
/// string rather than emitted as an empty value.
///
/// # Example
///
/// ```rust
/// use nounproject::PageOptions;
///
/// let options = PageOptions::new().limit(12).page(3);
/// assert_eq!(options.limit, Some(12));
/// assert_eq!(options.offset, None);
///
/// // No paging at all:
/// let none = PageOptions::default();
/// assert_eq!(none, PageOptions::new());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    /// Maximum number of results.
    pub limit: Option<u32>,
    /// Number of results to displace or skip over.
    pub offset: Option<u32>,
    /// Number of results of `limit` length to displace or skip over.
    pub page: Option<u32>,
}

impl PageOptions {
    /// Creates an empty set of paging parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of results.
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the number of results to skip over.
    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Sets the number of pages of `limit` length to skip over.
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    /// Appends the set fields to a query in the fixed order
    /// `limit`, `offset`, `page`.
    pub(crate) fn extend_query(&self, query: &mut Vec<(&'static str, String)>) {
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset", offset.to_string()));
        }
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
    }
}
