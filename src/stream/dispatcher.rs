//! The per-connection dispatch loop.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use futures_util::Stream;
use serde_json::Value;
use tokio::sync::watch;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time::timeout;

use crate::config::DispatchConfig;
use crate::error::{Error, Result};
use crate::handler::HandlerRegistry;
use crate::stream::classifier::{classify, decode_payload, Kind};
use crate::stream::reader::LineReader;
use crate::stream::types::Envelope;
use crate::stream::FrameError;

/// Run one response body to completion: read frames, classify, and dispatch
/// each to its handler on its own task.
///
/// Dispatch across frames is unordered once launched. Fan-out is bounded by
/// `config.max_in_flight` permits; when handlers are slower than the feed,
/// the read loop blocks on a permit rather than growing unbounded work.
/// Every launched task is tracked and joined before this function returns,
/// for stream end, failure, and disconnect alike.
///
/// Returns `Err(Error::StreamEnded)` on orderly EOF, `Err(Error::Stalled)`
/// when no frame arrives within the stall window, the read error on
/// transport failure, and `Ok(())` only for a requested disconnect. The
/// disconnect signal is a latched flag, not an edge: a trigger that landed
/// before this function was called is observed on the first iteration. The
/// caller owns any reconnect policy.
pub async fn dispatch_stream<S>(
    body: S,
    registry: Arc<HandlerRegistry>,
    config: &DispatchConfig,
    mut shutdown: watch::Receiver<bool>,
) -> Result<()>
where
    S: Stream<Item = Result<Bytes>> + Unpin,
{
    let mut reader = LineReader::new(body);
    let permits = Arc::new(Semaphore::new(config.max_in_flight));
    let mut in_flight: JoinSet<()> = JoinSet::new();
    let stall_window = Duration::from_secs(config.stall_timeout_secs);
    // Set when the shutdown sender is gone; no signal can arrive after
    // that, so the arms below must not poll it again.
    let mut shutdown_closed = false;

    let outcome = 'read: loop {
        // Reap whatever already finished so the set stays small.
        while in_flight.try_join_next().is_some() {}

        let frame = tokio::select! {
            latched = shutdown.wait_for(|stopped| *stopped), if !shutdown_closed => {
                if latched.is_err() {
                    shutdown_closed = true;
                    continue;
                }
                tracing::info!("disconnect requested, releasing connection");
                break 'read Ok(());
            }
            read = timeout(stall_window, reader.next_frame()) => match read {
                Err(_) => break 'read Err(Error::Stalled(stall_window)),
                Ok(Ok(Some(frame))) => frame,
                Ok(Ok(None)) => break 'read Err(Error::StreamEnded),
                Ok(Err(e)) => break 'read Err(e),
            }
        };

        let value: Value = match serde_json::from_slice(&frame) {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %FrameError::Decode(e), "dropping frame");
                continue;
            }
        };

        let kind = classify(&value);
        match kind {
            Kind::Control => {
                tracing::debug!("control frame acknowledged");
                continue;
            }
            Kind::Unknown => {
                tracing::debug!("dropping unclassified frame");
                continue;
            }
            _ => {}
        }

        let Some(handler) = registry.lookup(kind) else {
            tracing::debug!(kind = kind.as_str(), "no handler, dropping frame");
            continue;
        };

        // Permit acquisition races the disconnect signal too; a semaphore
        // exhausted by slow handlers cannot delay a requested disconnect.
        let permit = loop {
            tokio::select! {
                biased;
                latched = shutdown.wait_for(|stopped| *stopped), if !shutdown_closed => {
                    if latched.is_err() {
                        shutdown_closed = true;
                        continue;
                    }
                    tracing::info!("disconnect requested, releasing connection");
                    break 'read Ok(());
                }
                acquired = permits.clone().acquire_owned() => match acquired {
                    Ok(permit) => break permit,
                    // The semaphore is never closed; treat it as disconnect
                    // anyway.
                    Err(_) => break 'read Ok(()),
                }
            }
        };
        in_flight.spawn(async move {
            let _permit = permit;
            match decode_payload(kind, &frame) {
                Ok(payload) => {
                    let envelope = Arc::new(Envelope::new(frame, kind, payload));
                    handler.handle(envelope).await;
                }
                Err(e) => tracing::warn!(error = %e, "dropping frame"),
            }
        });
    };

    // Join barrier: disconnect and stream end both wait for launched
    // handlers before surfacing.
    while in_flight.join_next().await.is_some() {}

    outcome
}
