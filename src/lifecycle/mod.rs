//! Client lifecycle coordination.
//!
//! # Design Decisions
//! - Shutdown is a latched watch flag raced against reads, so a blocked
//!   read never delays disconnect and a trigger before any subscriber is
//!   still observed
//! - In-flight handler tasks are joined by the dispatcher before its loop
//!   returns; shutdown only stops new work

pub mod shutdown;

pub use shutdown::Shutdown;
