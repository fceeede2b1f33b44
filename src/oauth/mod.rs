//! OAuth 1.0a request signing.
//!
//! # Data Flow
//! ```text
//! RequestParams (query + body, values pre-encoded)
//!     → header.rs (generate nonce/timestamp, attach oauth parameter set)
//!     → signature.rs (canonical base string, HMAC-SHA1, base64)
//!     → `Authorization: OAuth k1="v1", k2="v2", ...`
//! ```
//!
//! # Design Decisions
//! - Everything below the header builder is pure: no I/O, no clock, no RNG
//! - Randomness enters only through the nonce; a fixed-nonce entry point
//!   exists so signatures can be reproduced in tests

pub mod encode;
pub mod header;
pub mod nonce;
pub mod signature;

pub use encode::percent_encode;
pub use header::{authorization_header, OAUTH_VERSION, SIGNATURE_METHOD};
pub use nonce::nonce;
pub use signature::{sign, signature_base_string, SignatureError};
