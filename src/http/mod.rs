//! Outbound request assembly and connect-status handling.
//!
//! # Data Flow
//! ```text
//! endpoint + params
//!     → request.rs (resolve URL, percent-encode params, sign, headers)
//!     → reqwest execute
//!     → response.rs (status → diagnostic label, body capture on failure)
//!     → streaming body handed to the stream engine
//! ```

pub mod request;
pub mod response;

pub use request::RequestParams;
pub use response::{check_response, diagnostic_label};
