//! Client configuration.
//!
//! # Data Flow
//! ```text
//! TOML file → loader.rs (read, parse) → validation.rs (collect errors)
//!     → schema.rs types consumed by Client::new
//! ```
//!
//! # Design Decisions
//! - Everything has a default except the four credentials
//! - Credentials have a redacting Debug and no Serialize, so secrets cannot
//!   leak through logs or accidental re-serialization

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{Credentials, DispatchConfig, StreamConfig};
pub use validation::{validate_config, ValidationError};
