//! Configuration types
//!
//! Board constants for the slave: bus, pins, address table, boot
//! profiles and heartbeat timing.

pub mod types;

pub use types::*;
