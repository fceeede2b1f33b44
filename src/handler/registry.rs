//! Kind-to-handler registry.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::handler::{
    default_friends_handler, default_limit_handler, default_tweet_handler, Handler,
};
use crate::stream::classifier::Kind;

/// Errors raised at registration time.
///
/// These fail the setup call explicitly; nothing here panics.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// The kind is never dispatched, so a handler for it could never run.
    #[error("handlers cannot be registered for the `{0}` kind")]
    InvalidKind(Kind),

    /// The kind already has a handler. One handler per kind, no override.
    #[error("a handler is already registered for the `{0}` kind")]
    DuplicateHandler(Kind),
}

/// Maps each [`Kind`] to at most one handler for the life of a client.
///
/// Multiple-reader/single-writer: lookups proceed concurrently, while
/// registrations are exclusive. Registration normally completes before
/// streaming begins, making the map read-mostly afterwards.
pub struct HandlerRegistry {
    entries: RwLock<HashMap<Kind, Arc<dyn Handler>>>,
    defaults: HashMap<Kind, Arc<dyn Handler>>,
}

impl HandlerRegistry {
    /// An empty registry with the built-in default handlers installed.
    pub fn new() -> Self {
        let defaults = HashMap::from([
            (Kind::Tweet, default_tweet_handler()),
            (Kind::Friends, default_friends_handler()),
            (Kind::Limit, default_limit_handler()),
        ]);
        Self {
            entries: RwLock::new(HashMap::new()),
            defaults,
        }
    }

    /// Register `handler` for `kind`.
    ///
    /// Fails with [`RegistrationError::InvalidKind`] for kinds that are
    /// dropped before dispatch (`Control`, `Unknown`) and with
    /// [`RegistrationError::DuplicateHandler`] if the kind is already
    /// served. There is no unregister or replace.
    pub fn register(
        &self,
        kind: Kind,
        handler: Arc<dyn Handler>,
    ) -> Result<(), RegistrationError> {
        if matches!(kind, Kind::Control | Kind::Unknown) {
            return Err(RegistrationError::InvalidKind(kind));
        }

        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        if entries.contains_key(&kind) {
            return Err(RegistrationError::DuplicateHandler(kind));
        }
        entries.insert(kind, handler);
        Ok(())
    }

    /// The handler serving `kind`: the registered one, else a built-in
    /// default, else `None` (the frame is logged and dropped upstream).
    pub fn lookup(&self, kind: Kind) -> Option<Arc<dyn Handler>> {
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());
        entries
            .get(&kind)
            .cloned()
            .or_else(|| self.defaults.get(&kind).cloned())
    }
}

impl Default for HandlerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
