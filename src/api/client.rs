//
//  nounproject
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # API Client
//!
//! This module provides the [`NounProject`] client, the single entry point
//! for every Noun Project API operation. The endpoint methods themselves
//! live in sibling modules ([`collections`](crate::api::collections),
//! [`icons`](crate::api::icons), [`usage`](crate::api::usage)); this module
//! owns the pieces they all share: the builder, the request pipeline, and
//! the dry-run switch.
//!
//! # Overview
//!
//! Every endpoint method runs the same pipeline:
//!
//! 1. Validate parameters locally (no I/O on invalid input).
//! 2. Assemble and sign a [`RequestDescription`].
//! 3. In dry-run mode, stop and hand the description back.
//! 4. Otherwise send exactly one HTTP request, classify the status code,
//!    and parse the JSON body into the endpoint's model type.
//!
//! Nothing is retried, cached, or paginated automatically.
//!
//! # Example
//!
//! ```rust,no_run
//! use nounproject::NounProject;
//!
//! async fn run() -> nounproject::Result<()> {
//!     let client = NounProject::new("your-api-key", "your-api-secret")?;
//!
//!     let collection = client.get_collection(12).await?.into_model().unwrap();
//!     println!("{}", collection.path("name")?);
//!     Ok(())
//! }
//! ```
//!
//! # Notes
//!
//! - Credentials are checked when the first request is signed, not at
//!   construction, so a client can be built first and keyed later with
//!   [`NounProject::set_key`] / [`NounProject::set_secret`].
//! - The base URL can be pointed at a local server for testing; paths and
//!   query strings are unchanged by the override.

use std::time::Duration;

use once_cell::race::OnceBox;
use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use serde_json::Value;
use url::Url;

use crate::auth::{Credentials, Signer};
use crate::error::{Error, ResponseContext, Result, SUCCESS_STATUSES};
use crate::models::FromResponse;

use super::request::RequestDescription;

/// Production endpoint all requests are addressed to unless overridden.
pub const BASE_URL: &str = "http://api.thenounproject.com";

/// Timeout policy applied to every request sent by a client.
///
/// # Variants
///
/// | Variant | Behaviour |
/// |---------|-----------|
/// | `Total` | One deadline covering the whole request, connect included |
/// | `ConnectRead` | Separate connect deadline and per-read deadline |
/// | `Off` | No deadline at all |
///
/// The default is `Total` with five seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timeout {
    /// A single deadline for the entire request.
    Total(Duration),
    /// A connect deadline and a separate deadline between reads.
    ConnectRead(Duration, Duration),
    /// Wait indefinitely.
    Off,
}

impl Default for Timeout {
    fn default() -> Self {
        Timeout::Total(Duration::from_secs(5))
    }
}

/// What an endpoint call produced.
///
/// In dry-run mode every call short-circuits before the network and yields
/// the [`RequestDescription`] it would have sent. Otherwise the call yields
/// the parsed model.
///
/// # Example
///
/// ```rust,no_run
/// use nounproject::NounProject;
///
/// async fn run() -> nounproject::Result<()> {
///     let client = NounProject::builder()
///         .key("key")
///         .secret("secret")
///         .dry_run(true)
///         .build()?;
///
///     let outcome = client.get_icon("goat").await?;
///     let request = outcome.into_request().unwrap();
///     assert_eq!(request.url().path(), "/icon/goat");
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub enum Outcome<M> {
    /// The signed request a live call would have sent (dry-run mode).
    Request(RequestDescription),
    /// The parsed response model (live mode).
    Parsed(M),
}

impl<M> Outcome<M> {
    /// The request description, if this outcome came from a dry run.
    pub fn request(&self) -> Option<&RequestDescription> {
        match self {
            Outcome::Request(description) => Some(description),
            Outcome::Parsed(_) => None,
        }
    }

    /// The parsed model, if this outcome came from a live call.
    pub fn model(&self) -> Option<&M> {
        match self {
            Outcome::Request(_) => None,
            Outcome::Parsed(model) => Some(model),
        }
    }

    /// Consumes the outcome, yielding the dry-run request description.
    pub fn into_request(self) -> Option<RequestDescription> {
        match self {
            Outcome::Request(description) => Some(description),
            Outcome::Parsed(_) => None,
        }
    }

    /// Consumes the outcome, yielding the parsed model.
    pub fn into_model(self) -> Option<M> {
        match self {
            Outcome::Request(_) => None,
            Outcome::Parsed(model) => Some(model),
        }
    }
}

/// Client for the Noun Project API.
///
/// Holds the HTTP transport, the OAuth credentials, and the base URL, and
/// exposes one method per API operation. Construct it with
/// [`new`](Self::new) for the common case or [`builder`](Self::builder)
/// when the base URL, timeout policy, or dry-run switch need setting.
///
/// # Endpoints
///
/// | Group | Methods |
/// |-------|---------|
/// | Collections | [`get_collection`](Self::get_collection), [`get_collections`](Self::get_collections), [`get_user_collections`](Self::get_user_collections), [`get_user_collection`](Self::get_user_collection) |
/// | Icons | [`get_icon`](Self::get_icon), [`get_collection_icons`](Self::get_collection_icons), [`get_icons_by_term`](Self::get_icons_by_term), [`get_recent_icons`](Self::get_recent_icons), [`get_user_uploads`](Self::get_user_uploads) |
/// | Usage | [`get_usage`](Self::get_usage), [`report_usage`](Self::report_usage) |
///
/// # Notes
///
/// - One API call sends at most one HTTP request.
/// - The computed OAuth signature carries a fresh nonce and timestamp per
///   request; the underlying signer is derived from the credentials once
///   and reused until [`set_key`](Self::set_key) or
///   [`set_secret`](Self::set_secret) replaces it.
pub struct NounProject {
    http: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    signer: OnceBox<Signer>,
    dry_run: bool,
}

/// Builder for [`NounProject`].
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use nounproject::{NounProject, Timeout};
///
/// fn build() -> nounproject::Result<NounProject> {
///     NounProject::builder()
///         .key("your-api-key")
///         .secret("your-api-secret")
///         .timeout(Timeout::ConnectRead(
///             Duration::from_secs(2),
///             Duration::from_secs(8),
///         ))
///         .build()
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct NounProjectBuilder {
    key: Option<String>,
    secret: Option<String>,
    base_url: Option<String>,
    timeout: Timeout,
    dry_run: bool,
}

impl NounProjectBuilder {
    /// Sets the API key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the API secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Overrides the base URL, e.g. to address a local test server.
    ///
    /// Trailing slashes are trimmed so that path joining behaves the same
    /// for `http://host` and `http://host/`.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the timeout policy. Defaults to [`Timeout::Total`] of five
    /// seconds.
    pub fn timeout(mut self, timeout: Timeout) -> Self {
        self.timeout = timeout;
        self
    }

    /// Switches the client into dry-run mode: every endpoint method
    /// validates, signs, and returns its [`RequestDescription`] without
    /// touching the network.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Url`] when the configured base URL does not parse,
    /// and [`Error::Network`] when the HTTP transport cannot be
    /// constructed.
    pub fn build(self) -> Result<NounProject> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();
        Url::parse(&base_url)?;

        let mut builder =
            reqwest::Client::builder().user_agent(format!("nounproject/{}", crate::VERSION));
        builder = match self.timeout {
            Timeout::Total(total) => builder.timeout(total),
            Timeout::ConnectRead(connect, read) => {
                builder.connect_timeout(connect).read_timeout(read)
            }
            Timeout::Off => builder,
        };

        let mut credentials = Credentials::default();
        if let Some(key) = self.key {
            credentials.set_key(key);
        }
        if let Some(secret) = self.secret {
            credentials.set_secret(secret);
        }

        Ok(NounProject {
            http: builder.build()?,
            base_url,
            credentials,
            signer: OnceBox::new(),
            dry_run: self.dry_run,
        })
    }
}

impl NounProject {
    /// Creates a client for the production API with the default timeout.
    ///
    /// # Parameters
    ///
    /// - `key` - The API key of your Noun Project account
    /// - `secret` - The API secret of your Noun Project account
    pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Result<Self> {
        Self::builder().key(key).secret(secret).build()
    }

    /// Starts a [`NounProjectBuilder`] with nothing set.
    pub fn builder() -> NounProjectBuilder {
        NounProjectBuilder::default()
    }

    /// The base URL requests are addressed to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether this client is in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// The credentials the client signs with.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Replaces the API key and discards the cached signer.
    pub fn set_key(&mut self, key: impl Into<String>) {
        self.credentials.set_key(key);
        self.signer = OnceBox::new();
    }

    /// Replaces the API secret and discards the cached signer.
    pub fn set_secret(&mut self, secret: impl Into<String>) {
        self.credentials.set_secret(secret);
        self.signer = OnceBox::new();
    }

    /// The signer for the current credentials, built on first use.
    ///
    /// Concurrent first calls may both compute a signer; one wins the
    /// publication race and the other result is dropped, which is harmless
    /// since the computation is pure.
    fn signer(&self) -> Result<&Signer> {
        self.signer
            .get_or_try_init(|| self.credentials.signer().map(Box::new))
    }

    /// Assembles and signs a request against the configured base URL.
    ///
    /// Query pairs are appended in the order given; an empty set leaves the
    /// URL without a `?` at all.
    pub(crate) fn describe(
        &self,
        method: Method,
        path: &str,
        query: &[(&'static str, String)],
        body: Option<Value>,
    ) -> Result<RequestDescription> {
        let signer = self.signer()?;
        let mut url = Url::parse(&format!("{}/{}", self.base_url, path))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(RequestDescription::build(method, url, body, signer))
    }

    /// Runs a described request through the transport and parses the
    /// result, or hands the description back untouched in dry-run mode.
    pub(crate) async fn execute<M: FromResponse>(
        &self,
        description: RequestDescription,
    ) -> Result<Outcome<M>> {
        if self.dry_run {
            return Ok(Outcome::Request(description));
        }

        tracing::debug!("{} {}", description.method(), description.url());

        let mut request = self
            .http
            .request(description.method().clone(), description.url().clone())
            .header(AUTHORIZATION, description.authorization());
        if let Some(body) = description.body() {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let url = response.url().to_string();
        let body = response.text().await?;

        if !SUCCESS_STATUSES.contains(&status) {
            tracing::warn!("Request to {} returned {}", url, status);
            return Err(Error::from_status(ResponseContext { status, url, body }));
        }

        let context = ResponseContext { status, url, body };
        let data: Value = serde_json::from_str(&context.body)?;
        Ok(Outcome::Parsed(M::from_response(data, context)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tokio_test::block_on;

    fn dry_client() -> NounProject {
        NounProject::builder()
            .key("key")
            .secret("secret")
            .dry_run(true)
            .build()
            .unwrap()
    }

    fn wire_client(base: &str) -> NounProject {
        NounProject::builder()
            .key("key")
            .secret("secret")
            .base_url(base)
            .build()
            .unwrap()
    }

    #[test]
    fn test_builder_defaults() {
        let client = NounProject::new("key", "secret").unwrap();
        assert_eq!(client.base_url(), BASE_URL);
        assert!(!client.is_dry_run());
        assert_eq!(client.credentials().key(), Some("key"));
        assert_eq!(client.credentials().secret(), Some("secret"));
    }

    #[test]
    fn test_builder_accepts_every_timeout_policy() {
        for timeout in [
            Timeout::default(),
            Timeout::Total(Duration::from_secs(30)),
            Timeout::ConnectRead(Duration::from_secs(2), Duration::from_secs(8)),
            Timeout::Off,
        ] {
            let built = NounProject::builder()
                .key("key")
                .secret("secret")
                .timeout(timeout)
                .build();
            assert!(built.is_ok());
        }
        assert_eq!(Timeout::default(), Timeout::Total(Duration::from_secs(5)));
    }

    #[test]
    fn test_builder_trims_trailing_slashes() {
        let client = NounProject::builder()
            .key("key")
            .secret("secret")
            .base_url("http://localhost:1234///")
            .dry_run(true)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "http://localhost:1234");

        let outcome = block_on(client.get_usage()).unwrap();
        assert_eq!(
            outcome.request().unwrap().url().as_str(),
            "http://localhost:1234/oauth/usage"
        );
    }

    #[test]
    fn test_builder_rejects_unparseable_base_url() {
        let built = NounProject::builder()
            .key("key")
            .secret("secret")
            .base_url("not a url")
            .build();
        assert!(matches!(built, Err(Error::Url(_))));
    }

    #[test]
    fn test_missing_credentials_fail_before_any_io() {
        // Unroutable base: an attempted request would error differently.
        let client = NounProject::builder()
            .base_url("http://localhost:9")
            .build()
            .unwrap();
        let err = block_on(client.get_usage()).unwrap_err();
        assert!(matches!(err, Error::CredentialsNotSet { field: "key" }));

        let client = NounProject::builder()
            .key("key")
            .base_url("http://localhost:9")
            .build()
            .unwrap();
        let err = block_on(client.get_usage()).unwrap_err();
        assert!(matches!(err, Error::CredentialsNotSet { field: "secret" }));
    }

    #[test]
    fn test_setters_replace_credentials() {
        let mut client = NounProject::builder()
            .key("key")
            .dry_run(true)
            .build()
            .unwrap();
        assert!(matches!(
            block_on(client.get_usage()),
            Err(Error::CredentialsNotSet { field: "secret" })
        ));

        client.set_secret("secret");
        assert!(block_on(client.get_usage()).is_ok());

        client.set_key("other-key");
        let outcome = block_on(client.get_usage()).unwrap();
        let authorization = outcome.into_request().unwrap().authorization().to_string();
        assert!(authorization.contains(r#"oauth_consumer_key="other-key""#));
    }

    #[test]
    fn test_dry_run_returns_the_request_without_io() {
        let outcome = block_on(dry_client().get_collection(12)).unwrap();
        let description = outcome.into_request().unwrap();
        assert_eq!(description.method(), &Method::GET);
        assert_eq!(
            description.url().as_str(),
            "http://api.thenounproject.com/collection/12"
        );
        assert!(description.authorization().starts_with("OAuth "));
    }

    #[tokio::test]
    async fn test_success_parses_the_model() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/oauth/usage")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"usage": {"hourly": 16, "daily": 80, "monthly": 81}}"#)
            .create_async()
            .await;

        let client = wire_client(&server.url());
        let outcome = client.get_usage().await.unwrap();
        let model = outcome.into_model().unwrap();
        assert_eq!(model.path("usage.hourly").unwrap().as_i64(), Some(16));
        assert_eq!(model.response().unwrap().status, 200);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_created_counts_as_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/notify/publish")
            .match_body(mockito::Matcher::Json(json!({"icons": "12"})))
            .with_status(201)
            .with_body(r#"{"licenses_consumed": 1, "result": "ok"}"#)
            .create_async()
            .await;

        let client = wire_client(&server.url());
        let receipt = client
            .report_usage(12, false)
            .await
            .unwrap()
            .into_model()
            .unwrap();
        assert_eq!(receipt.get("result").unwrap().as_str(), Some("ok"));
        assert_eq!(receipt.response().unwrap().status, 201);
        mock.assert_async().await;
    }

    async fn usage_error(server: &mut mockito::Server, status: usize) -> Error {
        let mock = server
            .mock("GET", "/oauth/usage")
            .with_status(status)
            .with_body("{}")
            .create_async()
            .await;
        let client = wire_client(&server.url());
        let err = client.get_usage().await.unwrap_err();
        mock.assert_async().await;
        err
    }

    #[tokio::test]
    async fn test_known_error_statuses_become_typed_errors() {
        let mut server = mockito::Server::new_async().await;
        assert!(matches!(
            usage_error(&mut server, 400).await,
            Error::BadRequest(_)
        ));
        assert!(matches!(
            usage_error(&mut server, 401).await,
            Error::Unauthorized(_)
        ));
        assert!(matches!(
            usage_error(&mut server, 403).await,
            Error::Forbidden(_)
        ));
        assert!(matches!(
            usage_error(&mut server, 404).await,
            Error::NotFound(_)
        ));
        assert!(matches!(
            usage_error(&mut server, 451).await,
            Error::LegalReasons(_)
        ));
        assert!(matches!(
            usage_error(&mut server, 500).await,
            Error::Server(_)
        ));
        assert!(matches!(
            usage_error(&mut server, 503).await,
            Error::Server(_)
        ));
    }

    #[tokio::test]
    async fn test_unmapped_status_is_reported_as_unknown() {
        let mut server = mockito::Server::new_async().await;
        match usage_error(&mut server, 429).await {
            Error::UnknownStatusCode(context) => {
                assert_eq!(context.status, 429);
                assert!(context.url.ends_with("/oauth/usage"));
            }
            other => panic!("expected UnknownStatusCode, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_a_json_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/oauth/usage")
            .with_status(200)
            .with_body("definitely not json")
            .create_async()
            .await;

        let client = wire_client(&server.url());
        let err = client.get_usage().await.unwrap_err();
        assert!(matches!(err, Error::Json(_)));
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_requests_carry_an_oauth_authorization_header() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/oauth/usage")
            .match_header(
                "authorization",
                mockito::Matcher::Regex(r#"^OAuth oauth_consumer_key="key", .*"#.to_string()),
            )
            .with_status(200)
            .with_body("{}")
            .create_async()
            .await;

        let client = wire_client(&server.url());
        assert!(client.get_usage().await.is_ok());
        mock.assert_async().await;
    }
}
