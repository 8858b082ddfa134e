//
//  nounproject
//  auth/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Authentication Module
//!
//! The Noun Project API authenticates every request with an OAuth 1.0a
//! signature derived from an API key and secret (two-legged flow, no user
//! token). This module holds the credential pair and builds the signer the
//! client caches for the session.
//!
//! ## Module Structure
//!
//! - [`Credentials`]: the mutable key/secret store
//! - `signer`: OAuth 1.0a HMAC-SHA1 header computation (crate-internal)
//!
//! ## Example
//!
//! ```rust
//! use nounproject::Credentials;
//!
//! let mut credentials = Credentials::default();
//! credentials.set_key("my-api-key");
//! credentials.set_secret("my-api-secret");
//!
//! assert_eq!(credentials.key(), Some("my-api-key"));
//! ```

mod signer;

pub(crate) use signer::Signer;

use crate::error::{Error, Result};

/// The API key/secret pair used to sign requests.
///
/// Both fields start unset and may be filled at construction or through
/// the setters at any point in the client's lifetime. A request can only
/// be signed once both are non-empty; until then signing fails with
/// [`Error::CredentialsNotSet`] naming the missing field.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    key: Option<String>,
    secret: Option<String>,
}

impl Credentials {
    /// Creates a credential pair with both fields set.
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
        Credentials {
            key: Some(key.into()),
            secret: Some(secret.into()),
        }
    }

    /// Sets the API key.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.key = Some(key.into());
    }

    /// Sets the API secret.
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.secret = Some(secret.into());
    }

    /// The API key, if set.
    pub fn key(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The API secret, if set.
    pub fn secret(&self) -> Option<&str> {
        self.secret.as_deref()
    }

    /// Builds a request signer from the stored pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CredentialsNotSet`] if either field is unset or
    /// empty; the key is checked before the secret.
    pub(crate) fn signer(&self) -> Result<Signer> {
        let key = self
            .key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(Error::CredentialsNotSet { field: "key" })?;
        let secret = self
            .secret
            .as_deref()
            .filter(|secret| !secret.is_empty())
            .ok_or(Error::CredentialsNotSet { field: "secret" })?;
        Ok(Signer::new(key, secret))
    }
}
