//
//  nounproject
//  auth/signer.rs
//
//  Created by Ngonidzashe Mangudya on 2026/08/21.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! OAuth 1.0a request signing (two-legged, HMAC-SHA1).
//!
//! Every API request carries an `Authorization: OAuth ...` header computed
//! from the consumer key/secret pair. The signature base string covers the
//! HTTP method, the resource URL without its query, and the normalized
//! request parameters (query pairs plus the `oauth_*` protocol fields),
//! percent-encoded and sorted. JSON bodies are not part of the signature.
//!
//! One signer is built per credential pair and cached by the client; the
//! nonce and timestamp are fresh for every request.

use base64::{
    engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD},
    Engine,
};
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::RngCore;
use reqwest::Method;
use sha1::Sha1;
use url::Url;

type HmacSha1 = Hmac<Sha1>;

/// Everything except ALPHA, DIGIT, `-`, `.`, `_` and `~` gets escaped.
const UNRESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Signs requests with a fixed consumer key/secret pair.
#[derive(Debug, Clone)]
pub(crate) struct Signer {
    key: String,
    secret: String,
}

impl Signer {
    pub(crate) fn new(key: &str, secret: &str) -> Self {
        Signer {
            key: key.to_string(),
            secret: secret.to_string(),
        }
    }

    /// Computes the `Authorization` header value for one request.
    ///
    /// The nonce and timestamp are generated here, so two calls for the
    /// same request produce different (but equally valid) headers.
    pub(crate) fn authorization(&self, method: &Method, url: &Url) -> String {
        // 16 random bytes, base64url encoded, keeps the nonce header-safe
        let mut nonce_bytes = [0u8; 16];
        rand::rng().fill_bytes(&mut nonce_bytes);
        let nonce = URL_SAFE_NO_PAD.encode(nonce_bytes);

        let timestamp = Utc::now().timestamp().to_string();
        self.authorization_at(method.as_str(), url, &nonce, &timestamp)
    }

    /// Header computation with caller-supplied nonce and timestamp.
    fn authorization_at(&self, method: &str, url: &Url, nonce: &str, timestamp: &str) -> String {
        let oauth_params = [
            ("oauth_consumer_key", self.key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_version", "1.0"),
        ];

        let base = signature_base_string(method, url, &oauth_params);
        let signature = self.sign(&base);

        let mut fields: Vec<(&str, String)> = oauth_params
            .iter()
            .map(|(name, value)| (*name, encode(value)))
            .collect();
        fields.push(("oauth_signature", encode(&signature)));
        fields.sort();

        let joined = fields
            .iter()
            .map(|(name, value)| format!("{}=\"{}\"", name, value))
            .collect::<Vec<_>>()
            .join(", ");
        format!("OAuth {}", joined)
    }

    /// HMAC-SHA1 over the base string, base64 encoded.
    ///
    /// Two-legged flow: the signing key is the encoded consumer secret
    /// followed by `&` and an empty token secret.
    fn sign(&self, base: &str) -> String {
        let signing_key = format!("{}&", encode(&self.secret));
        let mut mac = HmacSha1::new_from_slice(signing_key.as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(base.as_bytes());
        STANDARD.encode(mac.finalize().into_bytes())
    }
}

/// Builds the RFC 5849 signature base string.
///
/// Query pairs and protocol parameters are individually percent-encoded,
/// sorted, joined as `k=v` with `&`, and the whole parameter string is
/// encoded once more next to the method and the query-less resource URL.
fn signature_base_string(method: &str, url: &Url, oauth_params: &[(&str, &str)]) -> String {
    let mut pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(name, value)| (encode(&name), encode(&value)))
        .collect();
    pairs.extend(
        oauth_params
            .iter()
            .map(|(name, value)| (encode(name), encode(value))),
    );
    pairs.sort();

    let normalized = pairs
        .iter()
        .map(|(name, value)| format!("{}={}", name, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut resource = url.clone();
    resource.set_query(None);
    resource.set_fragment(None);

    format!("{}&{}&{}", method, encode(resource.as_str()), encode(&normalized))
}

fn encode(input: &str) -> String {
    utf8_percent_encode(input, UNRESERVED).to_string()
}
