//! Board-agnostic protocol engine for the InterconnectIO I2C slave
//!
//! This crate contains all slave logic that does not depend on specific
//! hardware implementations:
//!
//! - Register file and transaction state machine
//! - Table-driven command dispatcher
//! - Sticky status flags
//! - Diagnostic message queue shared with the main loop
//! - Device identity and boot profiles
//! - Heartbeat scheduling
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod diagnostics;
pub mod dispatch;
pub mod engine;
pub mod heartbeat;
pub mod identity;
pub mod registers;
pub mod status;
pub mod transaction;
pub mod version;

#[cfg(test)]
mod testing;

pub use config::SlaveConfig;
pub use diagnostics::{DiagnosticChannel, DiagnosticMessage};
pub use engine::ProtocolEngine;
pub use heartbeat::{Heartbeat, HeartbeatTick};
pub use identity::{DeviceIdentity, DeviceRole};
pub use status::{StatusFlag, StatusFlags};
