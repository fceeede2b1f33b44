//! Public stream endpoints.

use std::collections::BTreeMap;

use reqwest::Method;

use crate::client::{Client, DEFAULT_BASE_URL};
use crate::error::Result;

/// Filter predicates for the public filter stream.
#[derive(Debug, Clone, Default)]
pub struct FilterParams {
    /// Comma-separated user IDs to follow.
    pub follow: Option<String>,

    /// Comma-separated phrases to track.
    pub track: Option<String>,

    /// Comma-separated bounding boxes.
    pub locations: Option<String>,
}

/// Access to the public sample, filter, and firehose streams.
pub struct PublicStreams<'a> {
    client: &'a Client,
}

impl<'a> PublicStreams<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// A small random sample of public statuses.
    pub async fn sample(&self) -> Result<()> {
        self.client
            .run_stream(
                DEFAULT_BASE_URL,
                Method::GET,
                "statuses/sample.json?stall_warnings=true",
                &BTreeMap::new(),
            )
            .await
    }

    /// Public statuses matching one or more filter predicates.
    pub async fn filter(&self, params: &FilterParams) -> Result<()> {
        self.client
            .run_stream(
                DEFAULT_BASE_URL,
                Method::POST,
                "statuses/filter.json",
                &filter_body(params),
            )
            .await
    }

    /// All public statuses. Requires elevated access.
    pub async fn firehose(&self) -> Result<()> {
        self.client
            .run_stream(
                DEFAULT_BASE_URL,
                Method::GET,
                "statuses/firehose.json?stall_warnings=true",
                &BTreeMap::new(),
            )
            .await
    }
}

/// Form body for the filter endpoint: set, non-empty predicates plus the
/// always-on stall warnings flag.
fn filter_body(params: &FilterParams) -> BTreeMap<String, String> {
    let mut body = BTreeMap::new();
    for (key, value) in [
        ("follow", &params.follow),
        ("track", &params.track),
        ("locations", &params.locations),
    ] {
        if let Some(value) = value {
            if !value.is_empty() {
                body.insert(key.to_string(), value.clone());
            }
        }
    }
    body.insert("stall_warnings".to_string(), "true".to_string());
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_body_skips_unset_and_empty_values() {
        let params = FilterParams {
            track: Some("rust".into()),
            follow: Some(String::new()),
            locations: None,
        };
        let body = filter_body(&params);
        assert_eq!(body.get("track").map(String::as_str), Some("rust"));
        assert!(!body.contains_key("follow"));
        assert!(!body.contains_key("locations"));
        assert_eq!(body.get("stall_warnings").map(String::as_str), Some("true"));
    }

    #[test]
    fn test_filter_body_always_requests_stall_warnings() {
        let body = filter_body(&FilterParams::default());
        assert_eq!(body.len(), 1);
        assert_eq!(body.get("stall_warnings").map(String::as_str), Some("true"));
    }
}
