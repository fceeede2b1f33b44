//! Authorization header assembly.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::config::Credentials;
use crate::http::request::RequestParams;
use crate::oauth::encode::percent_encode;
use crate::oauth::nonce::nonce;
use crate::oauth::signature::{sign, signature_base_string, SignatureError};

/// Signature method label carried in every signed request.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

/// OAuth protocol version label.
pub const OAUTH_VERSION: &str = "1.0";

/// Nonce length used for outgoing requests.
pub const NONCE_LENGTH: usize = 42;

/// Build the `Authorization` header value for a request.
///
/// Generates a fresh nonce and the current Unix timestamp, attaches the
/// oauth parameter set to `params`, signs the merged parameter set, and
/// renders `OAuth ` followed by comma-space-joined `key="value"` pairs in
/// ascending key order. Only the oauth_* parameters appear in the header;
/// query and body parameters participate in the signature alone.
///
/// Secrets feed the signing key only and are never logged or rendered.
pub fn authorization_header(
    credentials: &Credentials,
    params: &mut RequestParams,
) -> Result<String, SignatureError> {
    authorization_header_with(credentials, params, &nonce(NONCE_LENGTH), &unix_timestamp()?)
}

/// Header assembly with caller-supplied nonce and timestamp.
///
/// Split out so signatures and headers are reproducible in tests.
pub fn authorization_header_with(
    credentials: &Credentials,
    params: &mut RequestParams,
    nonce: &str,
    timestamp: &str,
) -> Result<String, SignatureError> {
    let raw = [
        ("oauth_consumer_key", credentials.consumer_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.oauth_token.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ];

    params.oauth.clear();
    for (k, v) in raw {
        params.oauth.insert(percent_encode(k), percent_encode(v));
    }

    let base_string = signature_base_string(params);
    let signature = sign(
        &credentials.consumer_secret,
        &credentials.oauth_token_secret,
        &base_string,
    )?;
    params
        .oauth
        .insert("oauth_signature".to_string(), percent_encode(&signature));

    let rendered = params
        .oauth
        .iter()
        .map(|(k, v)| format!("{k}=\"{v}\""))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {rendered}"))
}

fn unix_timestamp() -> Result<String, SignatureError> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| SignatureError::Clock)?;
    Ok(now.as_secs().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;
    use std::collections::BTreeMap;

    fn credentials() -> Credentials {
        Credentials {
            consumer_key: "ohBNaRJK7MQrRuBw0SbwQ".into(),
            consumer_secret: "68M17oEE70Yg6ActFJgtulLu2NJi6ZjYDPVLKBAVwYc".into(),
            oauth_token: "1106913162-fRKyqX9LcLINTMZ59w8fq0vmoA7Reh6eyuMcQzD".into(),
            oauth_token_secret: "nKiH5o7ZTy0nGn0DaiNOEzF1pV5VitiWTbrsjK0nExM".into(),
        }
    }

    fn sample_params() -> RequestParams {
        RequestParams {
            method: Method::GET,
            endpoint: "https://stream.twitter.com/1.1/statuses/sample.json".into(),
            query: [("stall_warnings".to_string(), "true".to_string())]
                .into_iter()
                .collect(),
            body: BTreeMap::new(),
            oauth: BTreeMap::new(),
        }
    }

    #[test]
    fn test_header_is_deterministic_for_fixed_inputs() {
        let creds = credentials();
        let mut params = sample_params();
        let header = authorization_header_with(
            &creds,
            &mut params,
            "BpLnfgDsc2WD8F2qNfHK5a84jjJkwzDkh9h2fhfUVu",
            "1374766315",
        )
        .unwrap();

        // The signature for this fixture is the known-good sample vector.
        assert_eq!(
            header,
            "OAuth oauth_consumer_key=\"ohBNaRJK7MQrRuBw0SbwQ\", \
             oauth_nonce=\"BpLnfgDsc2WD8F2qNfHK5a84jjJkwzDkh9h2fhfUVu\", \
             oauth_signature=\"VdJmI7wEdXfPWuhfsClhkUBiZGA%3D\", \
             oauth_signature_method=\"HMAC-SHA1\", \
             oauth_timestamp=\"1374766315\", \
             oauth_token=\"1106913162-fRKyqX9LcLINTMZ59w8fq0vmoA7Reh6eyuMcQzD\", \
             oauth_version=\"1.0\""
        );
    }

    #[test]
    fn test_header_excludes_query_and_body_parameters() {
        let creds = credentials();
        let mut params = sample_params();
        let header =
            authorization_header_with(&creds, &mut params, "fixednonce", "1374766315").unwrap();

        assert!(header.starts_with("OAuth "));
        assert!(!header.contains("stall_warnings"));
        for pair in header.trim_start_matches("OAuth ").split(", ") {
            assert!(pair.starts_with("oauth_"), "unexpected header pair: {pair}");
        }
    }

    #[test]
    fn test_header_keys_sorted_ascending() {
        let creds = credentials();
        let mut params = sample_params();
        let header = authorization_header_with(&creds, &mut params, "n", "1").unwrap();

        let keys: Vec<&str> = header
            .trim_start_matches("OAuth ")
            .split(", ")
            .map(|pair| pair.split('=').next().unwrap())
            .collect();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
    }

    #[test]
    fn test_header_never_contains_secrets() {
        let creds = credentials();
        let mut params = sample_params();
        let header = authorization_header(&creds, &mut params).unwrap();

        assert!(!header.contains(&creds.consumer_secret));
        assert!(!header.contains(&creds.oauth_token_secret));
    }

    #[test]
    fn test_signature_attached_to_oauth_map() {
        let creds = credentials();
        let mut params = sample_params();
        authorization_header_with(&creds, &mut params, "n", "1").unwrap();
        assert!(params.oauth.contains_key("oauth_signature"));
    }
}
