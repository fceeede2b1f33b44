//! Configuration schema definitions.

use serde::Deserialize;

/// Default User-Agent sent with every stream request.
pub const DEFAULT_USER_AGENT: &str = concat!("chirpstream/", env!("CARGO_PKG_VERSION"));

/// Root configuration for a streaming client.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StreamConfig {
    /// Long-lived OAuth credentials.
    pub credentials: Credentials,

    /// User-Agent header value.
    pub user_agent: String,

    /// Base URL override. When absent, each stream flavor uses its own
    /// default host.
    pub base_url: Option<String>,

    /// Dispatch tuning.
    pub dispatch: DispatchConfig,
}

/// OAuth 1.0a credential set.
#[derive(Clone, Deserialize, Default)]
#[serde(default)]
pub struct Credentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub oauth_token: String,
    pub oauth_token_secret: String,
}

// Secrets are redacted; only key identifiers are printable.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &self.consumer_key)
            .field("consumer_secret", &"<redacted>")
            .field("oauth_token", &self.oauth_token)
            .field("oauth_token_secret", &"<redacted>")
            .finish()
    }
}

/// Tuning for the frame dispatch loop.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Maximum concurrently running handler tasks.
    pub max_in_flight: usize,

    /// Seconds without a complete frame before the stream is declared
    /// stalled and the loop returns to the caller.
    pub stall_timeout_secs: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 64,
            stall_timeout_secs: 90,
        }
    }
}

impl StreamConfig {
    /// Build a config from credentials, with every other field defaulted.
    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            credentials,
            ..Self::default()
        }
    }

    /// The effective User-Agent, falling back to the crate default.
    pub fn user_agent(&self) -> &str {
        if self.user_agent.is_empty() {
            DEFAULT_USER_AGENT
        } else {
            &self.user_agent
        }
    }
}
