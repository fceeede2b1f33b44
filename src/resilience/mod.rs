//! Reconnect policy helpers for callers.
//!
//! The client itself never reconnects: every connection-level failure
//! surfaces to the caller. These helpers define the policy a reconnecting
//! caller should follow — classify the failure, back off with a cap and
//! jitter for the retryable classes, abort for authentication failures.

pub mod backoff;

pub use backoff::{calculate_backoff, classify_failure, FailureClass};
