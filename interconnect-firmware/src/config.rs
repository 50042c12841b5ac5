//! Build-time slave configuration
//!
//! `build.rs` validates `slave.toml` and writes the constant below, so a
//! bad configuration fails the build instead of the boot.

// Generated code only names the types it overrides
#[allow(unused_imports)]
use interconnect_core::config::{HeartbeatConfig, RoleProfile, SlaveConfig};

include!(concat!(env!("OUT_DIR"), "/slave_config.rs"));

// The Pico wiring is fixed; slave.toml must describe the same board
const _: () = {
    assert!(SLAVE_CONFIG.sda_pin == 20);
    assert!(SLAVE_CONFIG.scl_pin == 21);
    assert!(SLAVE_CONFIG.address_pins[0] == 26);
    assert!(SLAVE_CONFIG.address_pins[1] == 27);
};

// The main loop must feed an armed watchdog before it fires
const _: () = assert!(SLAVE_CONFIG.watchdog_fits_heartbeat());
