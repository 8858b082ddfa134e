//
//  nounproject
//  error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! Error Types for the Noun Project Client
//!
//! This module provides the unified error type for all client operations,
//! covering local parameter validation, credential handling, response field
//! access, and HTTP status classification.
//!
//! # Overview
//!
//! Errors fall into two families:
//!
//! - **Parameter errors** are raised before any request is built or sent.
//!   They carry the offending parameter name so the caller can correct the
//!   input without consulting a stack trace.
//! - **Response errors** are raised after a response has been received and
//!   carry a [`ResponseContext`] (status code, URL, and raw body) sufficient
//!   to diagnose the failure without re-issuing the request.
//!
//! Exactly one request is sent per call; nothing is retried or swallowed.
//!
//! # Example
//!
//! ```rust
//! use nounproject::{Error, Result};
//!
//! fn handle<T>(result: Result<T>) {
//!     match result {
//!         Ok(_) => println!("Success!"),
//!         Err(Error::NotFound(context)) => println!("No such resource: {}", context.url),
//!         Err(Error::NonPositive { parameter }) => println!("Fix the '{}' argument", parameter),
//!         Err(e) => println!("Error: {}", e),
//!     }
//! }
//! ```

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Status codes treated as success by the endpoint pipeline.
pub(crate) const SUCCESS_STATUSES: [u16; 2] = [200, 201];

/// Unified error type for all Noun Project API operations.
///
/// # Variants
///
/// | Variant | Raised when | HTTP Status |
/// |---------|-------------|-------------|
/// | `IncorrectType` | A parameter has an unsupported runtime shape | pre-flight |
/// | `NonPositive` | A numeric identifier is zero or negative | pre-flight |
/// | `IllegalSlug` | A slug is empty, non-ASCII, or multi-word | pre-flight |
/// | `IllegalTerm` | A search term is empty | pre-flight |
/// | `CredentialsNotSet` | Signing was attempted without a key or secret | pre-flight |
/// | `KeyNotFound` | A response field lookup missed | post-parse |
/// | `IndexOutOfRange` | A response sequence index missed | post-parse |
/// | `MissingListKey` | No candidate item-list key was present | post-parse |
/// | `BadRequest` | Invalid parameters for the request | 400 |
/// | `Redirect` | The request was redirected | 302 |
/// | `Unauthorized` | Missing or incorrect authentication | 401 |
/// | `Forbidden` | Access not permitted | 403 |
/// | `NotFound` | URL cannot be found | 404 |
/// | `LegalReasons` | Resource unavailable for legal reasons | 451 |
/// | `Server` | Issues on the server side | 500/502/503/504/520/522 |
/// | `UnknownStatusCode` | Any status outside the known tables | other |
/// | `Network` | Transport-level failure | N/A |
/// | `Json` | Response body was not valid JSON | N/A |
/// | `Url` | A base or request URL failed to parse | N/A |
///
/// # Notes
///
/// - Parameter errors are checked before any I/O, so an invalid call never
///   produces partial network side effects.
/// - The `Network` variant automatically converts from `reqwest::Error`.
/// - The `Json` variant automatically converts from `serde_json::Error`.
#[derive(Error, Debug)]
pub enum Error {
    /// A parameter has a runtime shape outside its allowed set.
    ///
    /// # Parameters
    ///
    /// - `parameter` - Name of the offending argument
    /// - `allowed` - Human-readable list of accepted types
    #[error("parameter '{parameter}' must be of type {allowed}")]
    IncorrectType {
        parameter: &'static str,
        allowed: &'static str,
    },

    /// A numeric identifier was zero or negative.
    #[error("parameter '{parameter}' must be a positive integer")]
    NonPositive { parameter: &'static str },

    /// A slug failed the slug rules.
    ///
    /// Slugs must be nonempty, ASCII-only, and contain no whitespace.
    #[error("parameter '{parameter}' must be a nonempty string, consisting only of ascii characters, with no multiple words")]
    IllegalSlug { parameter: &'static str },

    /// A search term was empty.
    #[error("parameter '{parameter}' must be a nonempty string")]
    IllegalTerm { parameter: &'static str },

    /// The API key or secret was missing when a request had to be signed.
    ///
    /// # Parameters
    ///
    /// - `field` - Which credential is missing (`"key"` or `"secret"`)
    #[error("credential '{field}' must be set before making a request")]
    CredentialsNotSet { field: &'static str },

    /// A response field lookup named a key that is not present.
    #[error("key '{key}' not found in response data")]
    KeyNotFound { key: String },

    /// A response sequence was indexed past its end.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// None of the candidate item-list keys were present in a list response.
    #[error("no item list found in response, expected one of {candidates:?}")]
    MissingListKey { candidates: &'static [&'static str] },

    /// Invalid parameters for the request (HTTP 400).
    #[error("bad request ({0}): invalid parameters for request")]
    BadRequest(ResponseContext),

    /// The request resulted in a redirect (HTTP 302).
    #[error("redirect encountered ({0})")]
    Redirect(ResponseContext),

    /// Missing or incorrect authentication (HTTP 401).
    #[error("unauthorized ({0}): missing or incorrect authentication")]
    Unauthorized(ResponseContext),

    /// The request is not permitted (HTTP 403).
    #[error("forbidden ({0}): access not permitted")]
    Forbidden(ResponseContext),

    /// The requested URL cannot be found (HTTP 404).
    #[error("not found ({0}): URL cannot be found")]
    NotFound(ResponseContext),

    /// The resource is unavailable for legal reasons (HTTP 451).
    #[error("unavailable for legal reasons ({0})")]
    LegalReasons(ResponseContext),

    /// Issues on the server side (HTTP 5xx and Cloudflare 520/522).
    #[error("server error ({0}): issues on server side")]
    Server(ResponseContext),

    /// A status code outside both the success set and the known error table.
    #[error("unknown status code ({0})")]
    UnknownStatusCode(ResponseContext),

    /// A network-level error occurred during the request.
    ///
    /// Covers connection failures, timeouts, DNS resolution errors, and
    /// other transport-layer issues.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be parsed as JSON.
    #[error("malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    /// A base URL or assembled request URL failed to parse.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl Error {
    /// Maps a non-success status code to its typed error.
    ///
    /// The caller is expected to have already handled the success set
    /// (200, 201); every status passed here produces an error.
    pub(crate) fn from_status(context: ResponseContext) -> Error {
        match context.status {
            400 => Error::BadRequest(context),
            302 => Error::Redirect(context),
            401 => Error::Unauthorized(context),
            403 => Error::Forbidden(context),
            404 => Error::NotFound(context),
            451 => Error::LegalReasons(context),
            500 | 502 | 503 | 504 | 520 | 522 => Error::Server(context),
            _ => Error::UnknownStatusCode(context),
        }
    }
}

/// Snapshot of a received HTTP response, attached to response errors.
///
/// Carries everything needed to diagnose a failed call without re-issuing
/// the request.
///
/// # Fields
///
/// | Field | Description |
/// |-------|-------------|
/// | `status` | The HTTP status code of the response |
/// | `url` | The final URL the response was served from |
/// | `body` | The raw response body text |
#[derive(Debug, Clone)]
pub struct ResponseContext {
    /// The HTTP status code of the response.
    pub status: u16,

    /// The final URL the response was served from.
    pub url: String,

    /// The raw response body text.
    ///
    /// Kept verbatim; may be empty or non-JSON for error responses.
    pub body: String,
}

impl std::fmt::Display for ResponseContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.status, self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(status: u16) -> ResponseContext {
        ResponseContext {
            status,
            url: "http://api.thenounproject.com/collection/1".to_string(),
            body: String::new(),
        }
    }

    #[test]
    fn test_maps_known_status_codes() {
        assert!(matches!(Error::from_status(context(400)), Error::BadRequest(_)));
        assert!(matches!(Error::from_status(context(302)), Error::Redirect(_)));
        assert!(matches!(Error::from_status(context(401)), Error::Unauthorized(_)));
        assert!(matches!(Error::from_status(context(403)), Error::Forbidden(_)));
        assert!(matches!(Error::from_status(context(404)), Error::NotFound(_)));
        assert!(matches!(Error::from_status(context(451)), Error::LegalReasons(_)));
    }

    #[test]
    fn test_maps_all_server_side_codes_to_server() {
        for status in [500, 502, 503, 504, 520, 522] {
            assert!(
                matches!(Error::from_status(context(status)), Error::Server(_)),
                "status {} should classify as a server error",
                status
            );
        }
    }

    #[test]
    fn test_unmapped_codes_become_unknown_status() {
        for status in [301, 418, 429, 999] {
            assert!(
                matches!(Error::from_status(context(status)), Error::UnknownStatusCode(_)),
                "status {} should classify as unknown",
                status
            );
        }
    }

    #[test]
    fn test_parameter_errors_name_the_parameter() {
        let err = Error::NonPositive { parameter: "id" };
        assert_eq!(err.to_string(), "parameter 'id' must be a positive integer");

        let err = Error::IncorrectType {
            parameter: "icons",
            allowed: "int or str",
        };
        assert!(err.to_string().contains("'icons'"));
        assert!(err.to_string().contains("int or str"));
    }

    #[test]
    fn test_response_errors_carry_the_context() {
        let err = Error::from_status(context(404));
        let text = err.to_string();
        assert!(text.contains("404"));
        assert!(text.contains("http://api.thenounproject.com/collection/1"));
    }
}
