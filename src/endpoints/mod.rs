//! Endpoint builders for the three stream flavors.
//!
//! Each builder assembles the query/body parameters for its endpoint, then
//! hands off to the client's connect-and-dispatch pipeline. Builders never
//! mutate shared client state; the per-flavor default host is resolved per
//! request and only overridden by an explicit `base_url` in the config.
//!
//! Every stream requests `stall_warnings=true` so the server announces
//! falling-behind conditions in-band.

pub mod public;
pub mod site;
pub mod user;

pub use public::{FilterParams, PublicStreams};
pub use site::{SiteParams, SiteStreams};
pub use user::{UserParams, UserStreams};
