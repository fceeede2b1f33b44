//! Site stream endpoint.

use std::collections::BTreeMap;

use reqwest::Method;

use crate::client::Client;
use crate::error::Result;

/// Default host for the site stream flavor.
pub const DEFAULT_SITE_STREAM_URL: &str = "https://sitestream.twitter.com/1.1/";

/// Parameters for the multi-user site stream.
#[derive(Debug, Clone, Default)]
pub struct SiteParams {
    /// Comma-separated user IDs whose streams to deliver.
    pub follow: Option<String>,

    /// `user` or `followings`: whose messages to include.
    pub with: Option<String>,

    /// `all` to include replies to non-followed users.
    pub replies: Option<String>,
}

/// Access to the multi-user site stream.
pub struct SiteStreams<'a> {
    client: &'a Client,
}

impl<'a> SiteStreams<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Messages for the followed users, wrapped in `for_user` envelopes.
    pub async fn stream(&self, params: &SiteParams) -> Result<()> {
        let mut body = BTreeMap::new();
        for (key, value) in [
            ("follow", &params.follow),
            ("with", &params.with),
            ("replies", &params.replies),
        ] {
            if let Some(value) = value {
                if !value.is_empty() {
                    body.insert(key.to_string(), value.clone());
                }
            }
        }
        body.insert("stall_warnings".to_string(), "true".to_string());

        self.client
            .run_stream(DEFAULT_SITE_STREAM_URL, Method::POST, "site.json", &body)
            .await
    }
}
