//
//  nounproject
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Noun Project API Library
//!
//! An asynchronous client library for the Noun Project icon marketplace
//! REST API, covering icon and collection retrieval, term search, account
//! usage metering, and publish notifications.
//!
//! ## Overview
//!
//! The library is built around one client type, [`NounProject`], carrying
//! an OAuth 1.0a signer and an HTTP transport. Every endpoint is an async
//! method on the client; every call sends exactly one signed request and
//! returns either a parsed model or a typed error.
//!
//! ## Features
//!
//! - **Two-Legged OAuth 1.0a**: HMAC-SHA1 request signing with fresh
//!   nonce and timestamp per request
//! - **Typed Errors**: Parameter problems are caught before any I/O;
//!   HTTP failures map to dedicated error variants
//! - **Flexible Identifiers**: Endpoints addressing a resource by id or
//!   slug accept both through one parameter
//! - **Dynamic Models**: Responses stay JSON; strict cursors walk the
//!   payload without a schema chasing the service
//! - **Dry-Run Mode**: Inspect the exact signed request an operation
//!   would send, without touching the network
//!
//! ## Module Structure
//!
//! - [`api`]: The client, the request pipeline, and the endpoint methods
//! - [`auth`]: Credentials and OAuth 1.0a signing
//! - [`models`]: Response models and field cursors
//! - [`ident`]: Id-or-slug resource identifiers
//! - [`validate`]: Parameter validation rules
//! - [`error`]: The unified error type
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use nounproject::{NounProject, PageOptions};
//!
//! async fn run() -> nounproject::Result<()> {
//!     let client = NounProject::new("your-api-key", "your-api-secret")?;
//!
//!     // A single icon, by id or by term.
//!     let icon = client.get_icon("goat").await?.into_model().unwrap();
//!     println!("{}", icon.path("icon_url")?);
//!
//!     // Paged search, restricted to public-domain icons.
//!     let icons = client
//!         .get_icons_by_term("goat", true, PageOptions::new().limit(10))
//!         .await?
//!         .into_model()
//!         .unwrap();
//!     for icon in &icons {
//!         println!("{}", icon.path("term")?);
//!     }
//!     Ok(())
//! }
//! ```

/// API client and endpoint methods.
///
/// This module provides the [`NounProject`] client together with the
/// request pipeline every endpoint runs through: local validation, OAuth
/// signing, optional dry-run short-circuiting, status classification, and
/// JSON parsing.
pub mod api;

/// Authentication and credential management.
///
/// Holds the API key/secret pair and derives the OAuth 1.0a HMAC-SHA1
/// signer used to compute the `Authorization` header of every request.
pub mod auth;

/// The unified error type.
///
/// All fallible operations in the crate return [`Result`] with [`Error`],
/// covering parameter validation, credential handling, transport
/// failures, and HTTP status classification.
pub mod error;

/// Id-or-slug resource identifiers.
///
/// The [`Identifier`] union lets endpoints that address a resource either
/// by numeric id or by slug accept both through a single parameter.
pub mod ident;

/// Response models and field access.
///
/// Responses are kept as dynamic JSON behind typed wrappers:
/// [`Model`] for single resources, [`ModelList`] for item lists, and
/// [`Field`] cursors for strict traversal.
pub mod models;

/// Parameter validation rules.
///
/// Standalone assertions for ids, slugs, and search terms, applied by
/// every endpoint before a request is built.
pub mod validate;

/// Re-export of the main API client and its companions.
///
/// [`NounProject`] is the entry point for every API operation.
///
/// # Example
///
/// ```rust,no_run
/// use nounproject::NounProject;
///
/// # async fn run() -> nounproject::Result<()> {
/// let client = NounProject::new("your-api-key", "your-api-secret")?;
/// let usage = client.get_usage().await?;
/// # Ok(())
/// # }
/// ```
pub use api::{
    IconIds, NounProject, NounProjectBuilder, Outcome, PageOptions, PublicDomainLimit,
    RequestDescription, Timeout, BASE_URL,
};

/// Re-export of the credential pair.
pub use auth::Credentials;

/// Re-export of the error and result types.
pub use error::{Error, ResponseContext, Result};

/// Re-export of the id-or-slug identifier union.
pub use ident::Identifier;

/// Re-export of the response model types.
///
/// The aliases ([`Collection`], [`Icon`], [`Usage`], ...) name the
/// concrete model each endpoint returns; [`Field`] is the cursor type for
/// walking their payloads.
pub use models::{
    Collection, CollectionKind, CollectionList, Field, Icon, IconKind, IconList, Kind, ListedKind,
    Model, ModelList, OutputKey, PublishKind, PublishReceipt, Usage, UsageKind,
};

/// Library version constant.
///
/// Automatically derived from Cargo.toml at compile time using the
/// `CARGO_PKG_VERSION` environment variable, and sent as part of the
/// `User-Agent` header of every request.
///
/// # Example
///
/// ```rust
/// use nounproject::VERSION;
///
/// println!("nounproject {}", VERSION);
/// ```
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
