//! RP2040-specific HAL for the InterconnectIO slave firmware
//!
//! This crate provides RP2040-specific implementations of the shared
//! `interconnect-hal` traits:
//!
//! - Line-addressed GPIO bank over the SIO and pad registers
//! - Address strap inputs and the status LED
//! - Watchdog with reset-cause reporting

#![no_std]

pub mod gpio;
pub mod pad;
pub mod pins;
pub mod watchdog;

pub use gpio::Rp2040Gpio;
pub use pins::{StatusLed, StrapPin};
pub use watchdog::SlaveWatchdog;
