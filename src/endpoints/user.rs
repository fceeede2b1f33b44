//! User stream endpoint.

use std::collections::BTreeMap;

use reqwest::Method;

use crate::client::Client;
use crate::error::Result;
use crate::oauth::percent_encode;

/// Default host for the user stream flavor.
pub const DEFAULT_USER_STREAM_URL: &str = "https://userstream.twitter.com/1.1/";

/// Parameters for the single-user stream.
#[derive(Debug, Clone, Default)]
pub struct UserParams {
    /// `user` or `followings`: whose messages to include.
    pub with: Option<String>,

    /// `all` to include replies to non-followed users.
    pub replies: Option<String>,

    /// Comma-separated phrases to track.
    pub track: Option<String>,

    /// Comma-separated bounding boxes.
    pub locations: Option<String>,
}

/// Access to the authenticated user's stream.
pub struct UserStreams<'a> {
    client: &'a Client,
}

impl<'a> UserStreams<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Messages and events for the authenticated user.
    pub async fn stream(&self, params: &UserParams) -> Result<()> {
        let mut query = vec![("stall_warnings".to_string(), "true".to_string())];
        for (key, value) in [
            ("with", &params.with),
            ("replies", &params.replies),
            ("track", &params.track),
            ("locations", &params.locations),
        ] {
            if let Some(value) = value {
                if !value.is_empty() {
                    query.push((key.to_string(), value.clone()));
                }
            }
        }

        let endpoint = format!("user.json?{}", encode_query(&query));
        self.client
            .run_stream(DEFAULT_USER_STREAM_URL, Method::GET, &endpoint, &BTreeMap::new())
            .await
    }
}

fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}
