//! Streaming API client: OAuth 1.0a request signing plus line-delimited
//! JSON classification and dispatch.
//!
//! # Architecture Overview
//!
//! ```text
//!            ┌──────────────────────────────────────────────────────┐
//!            │                      CLIENT                          │
//!            │                                                      │
//!  open ─────┼─▶ endpoints ──▶ http/request ──▶ oauth (sign) ───────┼──▶ server
//!            │                                                      │
//!            │  ┌────────┐   ┌──────────┐   ┌──────────┐   ┌──────┐ │
//!  body ◀────┼─▶│ stream │──▶│classifier│──▶│ registry │──▶│handler│ │
//!            │  │ reader │   │  (Kind)  │   │  lookup  │   │ task │ │
//!            │  └────────┘   └──────────┘   └──────────┘   └──────┘ │
//!            │                                                      │
//!            │  config · lifecycle (disconnect) · resilience        │
//!            └──────────────────────────────────────────────────────┘
//! ```
//!
//! One frame = one line of the response body. Blank lines are keep-alives
//! and never surface. Each classified frame is dispatched to its handler on
//! its own task, bounded and joined; per-frame failures are logged and
//! dropped while the stream keeps running. Only connection-level failures
//! return to the caller, which owns all reconnect policy (see
//! [`resilience`]).

// Core subsystems
pub mod client;
pub mod endpoints;
pub mod http;
pub mod oauth;
pub mod stream;

// Handlers
pub mod handler;

// Cross-cutting concerns
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod resilience;

pub use client::{Client, DEFAULT_BASE_URL};
pub use config::{load_config, Credentials, StreamConfig};
pub use error::{Error, Result};
pub use handler::{handler_fn, Handler, HandlerRegistry, RegistrationError};
pub use stream::{dispatch_stream, Envelope, Kind, Payload};
