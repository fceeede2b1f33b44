//! Per-request parameter set and request construction.

use std::collections::BTreeMap;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::Method;
use url::Url;

use crate::config::Credentials;
use crate::error::Result;
use crate::oauth::{authorization_header, percent_encode};

/// Everything that participates in signing one outgoing request.
///
/// Ephemeral: built per request, consumed by the header builder. All map
/// values are individually percent-encoded before they land here, and the
/// maps are `BTreeMap`s so ascending byte-wise key order is structural
/// rather than a sorting step.
#[derive(Debug, Clone)]
pub struct RequestParams {
    /// HTTP method, uppercase in the base string by construction.
    pub method: Method,

    /// `scheme://host/path` with no query string.
    pub endpoint: String,

    /// Query parameters, keys and values percent-encoded.
    pub query: BTreeMap<String, String>,

    /// Body parameters, keys and values percent-encoded.
    pub body: BTreeMap<String, String>,

    /// OAuth parameters, filled in by the header builder.
    pub oauth: BTreeMap<String, String>,
}

impl RequestParams {
    /// Capture the signable parts of a resolved URL plus body parameters.
    ///
    /// Query pairs are read from the URL (decoded by the parser) and
    /// re-encoded individually; the endpoint keeps scheme, authority, and
    /// path only.
    pub fn from_url(method: Method, url: &Url, body: &BTreeMap<String, String>) -> Self {
        let endpoint = format!("{}://{}{}", url.scheme(), url.authority(), url.path());

        let query = url
            .query_pairs()
            .map(|(k, v)| (percent_encode(&k), percent_encode(&v)))
            .collect();

        let body = body
            .iter()
            .map(|(k, v)| (percent_encode(k), percent_encode(v)))
            .collect();

        Self {
            method,
            endpoint,
            query,
            body,
            oauth: BTreeMap::new(),
        }
    }

    /// Render the percent-encoded form body: `key=value` pairs joined by `&`.
    pub fn form_body(&self) -> String {
        self.body
            .iter()
            .map(|(k, v)| format!("{k}={v}"))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Build a signed streaming request.
///
/// `endpoint` is resolved against `base_url`; the Authorization header is
/// computed over the merged query/body/oauth parameter set. POST requests
/// carry the form body with `Content-Type: application/x-www-form-urlencoded`.
pub fn build_request(
    http: &reqwest::Client,
    credentials: &Credentials,
    user_agent: &str,
    base_url: &Url,
    method: Method,
    endpoint: &str,
    body: &BTreeMap<String, String>,
) -> Result<reqwest::Request> {
    let url = base_url.join(endpoint)?;
    let mut params = RequestParams::from_url(method.clone(), &url, body);

    let auth = authorization_header(credentials, &mut params)?;

    let mut builder = http
        .request(method.clone(), url)
        .header(USER_AGENT, user_agent)
        .header(AUTHORIZATION, auth.as_str());

    if method == Method::POST {
        builder = builder
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(params.form_body());
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_drops_query_string() {
        let url = Url::parse("https://stream.example.com/1.1/statuses/sample.json?stall_warnings=true").unwrap();
        let params = RequestParams::from_url(Method::GET, &url, &BTreeMap::new());
        assert_eq!(
            params.endpoint,
            "https://stream.example.com/1.1/statuses/sample.json"
        );
        assert_eq!(params.query.get("stall_warnings").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_query_values_are_encoded() {
        let url = Url::parse("https://stream.example.com/1.1/statuses/filter.json?track=a,b%20c").unwrap();
        let params = RequestParams::from_url(Method::GET, &url, &BTreeMap::new());
        assert_eq!(params.query.get("track").map(String::as_str), Some("a%2Cb%20c"));
    }

    #[test]
    fn test_form_body_sorted_and_encoded() {
        let body: BTreeMap<String, String> = [
            ("track".to_string(), "jakarta, macet".to_string()),
            ("stall_warnings".to_string(), "true".to_string()),
        ]
        .into_iter()
        .collect();
        let url = Url::parse("https://stream.example.com/1.1/statuses/filter.json").unwrap();
        let params = RequestParams::from_url(Method::POST, &url, &body);
        assert_eq!(
            params.form_body(),
            "stall_warnings=true&track=jakarta%2C%20macet"
        );
    }

    #[test]
    fn test_build_request_headers() {
        let http = reqwest::Client::new();
        let credentials = Credentials {
            consumer_key: "ck".into(),
            consumer_secret: "cs".into(),
            oauth_token: "ot".into(),
            oauth_token_secret: "ots".into(),
        };
        let base = Url::parse("https://stream.example.com/1.1/").unwrap();
        let req = build_request(
            &http,
            &credentials,
            "chirpstream-test/0",
            &base,
            Method::POST,
            "statuses/filter.json",
            &[("track".to_string(), "rust".to_string())].into_iter().collect(),
        )
        .unwrap();

        assert_eq!(req.method(), Method::POST);
        assert_eq!(req.url().as_str(), "https://stream.example.com/1.1/statuses/filter.json");
        assert_eq!(
            req.headers().get(CONTENT_TYPE).unwrap(),
            "application/x-www-form-urlencoded"
        );
        assert_eq!(req.headers().get(USER_AGENT).unwrap(), "chirpstream-test/0");
        let auth = req.headers().get(AUTHORIZATION).unwrap().to_str().unwrap();
        assert!(auth.starts_with("OAuth "));
        assert!(auth.contains("oauth_signature="));
    }
}
