//! The stream engine: frame splitting, classification, typed decode, and
//! concurrent dispatch.
//!
//! # Data Flow
//! ```text
//! chunked response body
//!     → reader.rs (split on '\n', trim CR/whitespace, drop keep-alives)
//!     → dispatcher.rs (generic JSON decode)
//!     → classifier.rs (ordered first-match predicates → Kind)
//!     → registry lookup → typed decode (types.rs) → handler task
//! ```
//!
//! # Design Decisions
//! - Per-frame failures never end the stream; only read failures do
//! - Fan-out is bounded by a semaphore and tracked in a JoinSet, so the
//!   dispatch call only returns once every launched handler has finished

pub mod classifier;
pub mod dispatcher;
pub mod reader;
pub mod types;

use thiserror::Error;

pub use classifier::{classify, decode_payload, Kind};
pub use dispatcher::dispatch_stream;
pub use reader::LineReader;
pub use types::{Envelope, Payload};

/// Non-fatal per-frame failures. Logged and dropped by the dispatch loop;
/// the stream keeps processing subsequent frames.
#[derive(Debug, Error)]
pub enum FrameError {
    /// The frame is not well-formed JSON.
    #[error("malformed frame: {0}")]
    Decode(#[source] serde_json::Error),

    /// The frame classified as `kind` but its schema decode failed.
    #[error("schema decode failed for {kind} frame: {source}")]
    SchemaDecode {
        kind: Kind,
        #[source]
        source: serde_json::Error,
    },
}
