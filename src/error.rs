//! Connection-level error types.
//!
//! Per-frame failures (malformed JSON, schema mismatches) are deliberately
//! not here: they are logged and dropped inside the dispatch loop without
//! ending the stream. Everything in [`Error`] is fatal to the current
//! connection and propagates to the caller, which owns reconnect policy.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::ConfigError;
use crate::handler::RegistrationError;
use crate::oauth::SignatureError;

/// Errors that end a connection attempt or a running stream.
#[derive(Debug, Error)]
pub enum Error {
    /// Network or client failure opening or reading the connection.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered the connect with a non-2xx status.
    /// The body is captured verbatim.
    #[error("response error: {label}, response body: {body}")]
    ResponseStatus {
        status: StatusCode,
        label: &'static str,
        body: String,
    },

    /// The response body ended. Distinct from transport failure so a
    /// reconnecting caller can tell orderly end from network error.
    #[error("stream ended")]
    StreamEnded,

    /// No complete frame arrived within the stall window.
    #[error("stream stalled: no data for {0:?}")]
    Stalled(Duration),

    /// The request could not be signed.
    #[error(transparent)]
    Signature(#[from] SignatureError),

    /// Handler registration was rejected.
    #[error(transparent)]
    Registration(#[from] RegistrationError),

    /// Configuration could not be loaded or validated.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An endpoint URL did not parse or resolve.
    #[error("invalid endpoint URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result alias for connection-level operations.
pub type Result<T> = std::result::Result<T, Error>;
