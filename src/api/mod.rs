//
//  nounproject
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Layer
//!
//! This module provides the client and the endpoint methods for the Noun
//! Project REST API at `api.thenounproject.com`.
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: The [`NounProject`] client, its builder, and the shared
//!   request pipeline (signing, dry-run, status classification)
//! - [`request`]: Request descriptions and paging parameters
//! - [`collections`]: Collection retrieval endpoints
//! - [`icons`]: Icon retrieval and search endpoints
//! - [`usage`]: Account metering and publish notification endpoints
//!
//! Every endpoint is a method on [`NounProject`]; the endpoint modules
//! contribute `impl` blocks rather than separate service types, so one
//! client value carries the whole surface.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nounproject::{NounProject, PageOptions};
//!
//! async fn run() -> nounproject::Result<()> {
//!     let client = NounProject::new("your-api-key", "your-api-secret")?;
//!
//!     let icons = client
//!         .get_icons_by_term("goat", false, PageOptions::new().limit(10))
//!         .await?
//!         .into_model()
//!         .unwrap();
//!     for icon in &icons {
//!         println!("{}", icon.path("term")?);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Endpoint methods return [`crate::Result`]; failed status codes map to
//! the typed variants of [`crate::Error`]:
//!
//! - `BadRequest`: 400 Invalid parameters
//! - `Unauthorized`: 401 Missing or incorrect authentication
//! - `Forbidden`: 403 Access not permitted
//! - `NotFound`: 404 URL cannot be found
//! - `Server`: 5xx and Cloudflare 520/522
//! - `UnknownStatusCode`: anything outside the known tables

/// Core client with authentication and request handling.
///
/// Provides the [`NounProject`] struct which handles:
/// - OAuth 1.0a request signing
/// - Dry-run short-circuiting
/// - Status code classification and JSON parsing
pub mod client;

/// Collection retrieval endpoints.
pub mod collections;

/// Icon retrieval and search endpoints.
pub mod icons;

/// Signed request descriptions and paging parameters.
pub mod request;

/// Account metering and publish notification endpoints.
pub mod usage;

/// Re-export of the main API client and its companions.
///
/// [`NounProject`] is the primary entry point for making API requests.
pub use client::{NounProject, NounProjectBuilder, Outcome, Timeout, BASE_URL};

/// Re-export of the request types endpoint methods accept and produce.
pub use request::{PageOptions, RequestDescription};

/// Re-export of the `limit_to_public_domain` flag wrapper.
pub use icons::PublicDomainLimit;

/// Re-export of the publish notification id set.
pub use usage::IconIds;
