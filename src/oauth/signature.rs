//! Canonical base-string construction and HMAC-SHA1 signing.

use std::collections::BTreeMap;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hmac::{Hmac, Mac};
use sha1::Sha1;
use thiserror::Error;

use crate::http::request::RequestParams;
use crate::oauth::encode::percent_encode;

type HmacSha1 = Hmac<Sha1>;

/// Errors raised while producing a request signature.
///
/// Fatal: a request that cannot be signed cannot be authenticated.
#[derive(Debug, Error)]
pub enum SignatureError {
    /// HMAC key setup was rejected.
    #[error("HMAC key setup failed")]
    InvalidKey,

    /// The system clock reads before the Unix epoch.
    #[error("system clock is before the Unix epoch")]
    Clock,
}

/// Build the OAuth 1.0a signature base string for a request.
///
/// Collects every `(key, value)` pair from the query, body, and oauth maps
/// (values are already percent-encoded by this point), sorts keys ascending
/// by byte value, joins `key=value` pairs with `&`, and returns
/// `METHOD&percent_encode(endpoint)&percent_encode(parameter_string)`.
///
/// The endpoint must carry no query string. If two sources collide on an
/// encoded key the result is undefined; with the merge below the
/// last-inserted source wins silently.
pub fn signature_base_string(params: &RequestParams) -> String {
    let mut merged: BTreeMap<&str, &str> = BTreeMap::new();
    for (k, v) in params
        .query
        .iter()
        .chain(params.body.iter())
        .chain(params.oauth.iter())
    {
        merged.insert(k, v);
    }

    let parameter_string = merged
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        params.method,
        percent_encode(&params.endpoint),
        percent_encode(&parameter_string)
    )
}

/// Sign a base string with HMAC-SHA1 and return the base64 digest.
///
/// The signing key is `percent_encode(consumer_secret) & percent_encode(token_secret)`.
/// Deterministic given its three inputs; randomness enters a signature only
/// through the nonce already embedded in the base string.
pub fn sign(
    consumer_secret: &str,
    token_secret: &str,
    base_string: &str,
) -> Result<String, SignatureError> {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(token_secret)
    );

    let mut mac = HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| SignatureError::InvalidKey)?;
    mac.update(base_string.as_bytes());

    Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
