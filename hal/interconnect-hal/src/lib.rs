//! InterconnectIO Hardware Abstraction Layer
//!
//! This crate defines the hardware capabilities the slave protocol engine
//! needs, so that the engine can run against a chip-specific HAL on target
//! and against mocks on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  interconnect-firmware (binary)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  interconnect-core (protocol engine)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  interconnect-hal (this crate - traits) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!           ┌───────────────────┐
//!           │ interconnect-hal- │
//!           │      rp2040       │
//!           └───────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::GpioBank`] - Line-addressed GPIO bank (level, direction, pads)
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Single digital pins
//! - [`i2c::SlaveEvent`] - Events raised by an I2C slave peripheral
//! - [`system::ResetCause`] - Why the chip last came out of reset

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod system;

// Re-export key traits at crate root for convenience
pub use gpio::{Direction, DriveStrength, GpioBank, InputPin, OutputPin, Pulls};
pub use i2c::SlaveEvent;
pub use system::ResetCause;
