//! The streaming client.

use std::collections::BTreeMap;
use std::future::Future;
use std::sync::Arc;

use futures_util::TryStreamExt;
use reqwest::Method;
use url::Url;

use crate::config::{validate_config, ConfigError, StreamConfig};
use crate::endpoints::{PublicStreams, SiteStreams, UserStreams};
use crate::error::{Error, Result};
use crate::handler::{handler_fn, Handler, HandlerRegistry};
use crate::http::request::build_request;
use crate::http::response::check_response;
use crate::lifecycle::Shutdown;
use crate::stream::dispatcher::dispatch_stream;
use crate::stream::types::Envelope;
use crate::stream::Kind;

/// Default host for the public stream flavor.
pub const DEFAULT_BASE_URL: &str = "https://stream.twitter.com/1.1/";

/// A client for one credential set.
///
/// Owns its handler registry and disconnect signal; nothing is shared
/// across client instances. Register handlers first, then open a stream
/// through one of the flavor accessors; the call runs until the connection
/// ends or [`Client::disconnect`] is invoked.
pub struct Client {
    http: reqwest::Client,
    config: StreamConfig,
    registry: Arc<HandlerRegistry>,
    shutdown: Shutdown,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Build a client from a validated configuration.
    pub fn new(config: StreamConfig) -> Result<Self> {
        validate_config(&config).map_err(ConfigError::Validation)?;

        Ok(Self {
            http: reqwest::Client::new(),
            config,
            registry: Arc::new(HandlerRegistry::new()),
            shutdown: Shutdown::new(),
        })
    }

    /// Register a handler for a message kind.
    ///
    /// One handler per kind for the life of the client; duplicate or
    /// undispatchable kinds fail explicitly.
    pub fn register(&self, kind: Kind, handler: Arc<dyn Handler>) -> Result<()> {
        self.registry.register(kind, handler)?;
        Ok(())
    }

    /// Register an async closure for a message kind.
    pub fn register_fn<F, Fut>(&self, kind: Kind, f: F) -> Result<()>
    where
        F: Fn(Arc<Envelope>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.register(kind, handler_fn(f))
    }

    /// Request disconnect. The signal latches: a running stream observes
    /// it at its next loop iteration, stops reading, joins in-flight
    /// handlers, and returns `Ok(())`; a request made while the connection
    /// is still being established stops the stream at its first iteration.
    pub fn disconnect(&self) {
        self.shutdown.trigger();
    }

    /// Public sample/filter/firehose streams.
    pub fn public(&self) -> PublicStreams<'_> {
        PublicStreams::new(self)
    }

    /// The authenticated user's stream.
    pub fn user(&self) -> UserStreams<'_> {
        UserStreams::new(self)
    }

    /// The multi-user site stream.
    pub fn site(&self) -> SiteStreams<'_> {
        SiteStreams::new(self)
    }

    /// The effective base URL for a flavor: the configured override if
    /// present, else the flavor default.
    fn resolve_base(&self, flavor_default: &str) -> Result<Url> {
        let base = self.config.base_url.as_deref().unwrap_or(flavor_default);
        Ok(Url::parse(base)?)
    }

    /// Open a stream and dispatch it to completion.
    pub(crate) async fn run_stream(
        &self,
        flavor_default: &str,
        method: Method,
        endpoint: &str,
        body: &BTreeMap<String, String>,
    ) -> Result<()> {
        // Subscribe before connecting so a disconnect issued while the
        // connection is being established is not lost.
        let shutdown = self.shutdown.subscribe();

        let base_url = self.resolve_base(flavor_default)?;
        let request = build_request(
            &self.http,
            &self.config.credentials,
            self.config.user_agent(),
            &base_url,
            method,
            endpoint,
            body,
        )?;

        tracing::info!(url = %request.url(), "opening stream");
        let response = self.http.execute(request).await?;
        let response = check_response(response).await?;

        let chunks = Box::pin(response.bytes_stream().map_err(Error::Transport));
        dispatch_stream(chunks, self.registry.clone(), &self.config.dispatch, shutdown).await
    }
}
