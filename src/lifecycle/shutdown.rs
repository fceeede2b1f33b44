//! Disconnect coordination for a streaming client.

use tokio::sync::watch;

/// Cooperative disconnect signal.
///
/// Cloneable; every running dispatch loop subscribes and races the signal
/// against its next read. The signal latches rather than pulses: a trigger
/// that lands before any loop subscribes, including while a connection is
/// still being established, is observed by the first subscriber to look.
/// Triggering is idempotent and never blocks.
#[derive(Clone)]
pub struct Shutdown {
    tx: watch::Sender<bool>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Subscribe to the disconnect signal. A receiver obtained after a
    /// trigger still sees it.
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Request disconnect. Latches even when nothing is listening yet.
    pub fn trigger(&self) {
        self.tx.send_replace(true);
    }

    /// Whether disconnect has been requested.
    pub fn triggered(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_trigger_reaches_subscriber() {
        let shutdown = Shutdown::new();
        let mut rx = shutdown.subscribe();
        shutdown.trigger();
        rx.wait_for(|stopped| *stopped).await.unwrap();
    }

    #[tokio::test]
    async fn test_trigger_before_subscribe_is_latched() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        // The subscription happens after the trigger and must still see it.
        let mut rx = shutdown.subscribe();
        rx.wait_for(|stopped| *stopped).await.unwrap();
    }

    #[test]
    fn test_triggered_flag() {
        let shutdown = Shutdown::new();
        assert!(!shutdown.triggered());
        shutdown.trigger();
        assert!(shutdown.triggered());
        // idempotent
        shutdown.trigger();
        assert!(shutdown.triggered());
    }

    #[test]
    fn test_trigger_without_subscribers_is_not_lost() {
        let shutdown = Shutdown::new();
        shutdown.trigger();
        assert!(shutdown.triggered());
    }
}
