//! Stream handlers and their registry.
//!
//! # Design Decisions
//! - Handlers are object-safe and async (boxed futures), so callers can
//!   register plain async closures via [`handler_fn`]
//! - The registry is owned by a client instance, never process-wide
//! - Built-in default handlers keep a fresh client observable before any
//!   registration happens

pub mod registry;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::stream::types::{Envelope, Payload};

pub use registry::{HandlerRegistry, RegistrationError};

/// Boxed future returned by handler invocations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A consumer of classified stream envelopes.
///
/// One handler serves one [`Kind`](crate::stream::Kind) for the life of a
/// client. Invocations for different frames may run concurrently and in any
/// order.
pub trait Handler: Send + Sync + 'static {
    fn handle(&self, envelope: Arc<Envelope>) -> BoxFuture<'static, ()>;
}

struct FnHandler<F>(F);

impl<F, Fut> Handler for FnHandler<F>
where
    F: Fn(Arc<Envelope>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn handle(&self, envelope: Arc<Envelope>) -> BoxFuture<'static, ()> {
        Box::pin((self.0)(envelope))
    }
}

/// Adapt an async closure into a [`Handler`].
pub fn handler_fn<F, Fut>(f: F) -> Arc<dyn Handler>
where
    F: Fn(Arc<Envelope>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    Arc::new(FnHandler(f))
}

/// Default tweet handler: logs author and text.
pub(crate) fn default_tweet_handler() -> Arc<dyn Handler> {
    handler_fn(|envelope| async move {
        if let Payload::Tweet(tweet) = &envelope.payload {
            let screen_name = tweet
                .user
                .as_ref()
                .map(|u| u.screen_name.as_str())
                .unwrap_or_default();
            tracing::info!(screen_name, text = %tweet.text, "tweet");
        }
    })
}

/// Default friends handler: logs the size of the preamble.
pub(crate) fn default_friends_handler() -> Arc<dyn Handler> {
    handler_fn(|envelope| async move {
        if let Payload::Friends(friends) = &envelope.payload {
            tracing::info!(count = friends.friends.len(), "friends preamble");
        }
    })
}

/// Default limit handler: logs how many matched statuses went undelivered.
pub(crate) fn default_limit_handler() -> Arc<dyn Handler> {
    handler_fn(|envelope| async move {
        if let Payload::Limit(notice) = &envelope.payload {
            let track = notice.limit.as_ref().map(|l| l.track).unwrap_or_default();
            tracing::info!(track, "limit notice");
        }
    })
}
