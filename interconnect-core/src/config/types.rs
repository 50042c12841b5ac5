//! Slave configuration types
//!
//! All values are plain integers so a complete configuration can be built
//! in a `const` context (the firmware build script generates one from
//! `slave.toml`).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Register used to report the status flags
pub const REG_STATUS: u8 = 100;

/// Lines placed under software control at boot
pub const GPIO_BOOT_MASK: u32 = 0b0001_1100_0100_1111_1111_1111_1111_1111;

/// Lines whose direction and output are set by the role boot profile
pub const GPIO_ROLE_SELECT_MASK: u32 = 0b0001_1110_0011_1111_1111_1111_1111_1111;

/// Direction/output profile applied to the role-select lines at boot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RoleProfile {
    /// Direction bits (set = output)
    pub direction: u32,
    /// Output latch values
    pub output: u32,
}

/// Heartbeat and console timing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct HeartbeatConfig {
    /// Main loop tick period
    pub tick_ms: u32,
    /// Ticks between LED blinks in normal operation
    pub pulse_ticks: u16,
    /// Ticks between LED blinks after a watchdog reset
    pub watchdog_pulse_ticks: u16,
    /// How long the LED stays off during a heartbeat blink
    pub blink_off_ms: u32,
    /// Ticks between heartbeat reports
    pub report_ticks: u16,
    /// LED-off flash while printing one diagnostic record
    pub message_flash_ms: u32,
}

impl HeartbeatConfig {
    pub const DEFAULT: Self = Self {
        tick_ms: 10,
        pulse_ticks: 200,
        watchdog_pulse_ticks: 50,
        blink_off_ms: 200,
        report_ticks: 1500,
        message_flash_ms: 50,
    };

    /// Longest wait between two watchdog feeds in the main loop
    ///
    /// The loop feeds once per pass and once per printed record, so the
    /// worst gap is a tick plus a blink plus one record flash.
    pub const fn max_feed_interval_ms(&self) -> u32 {
        self.tick_ms + self.blink_off_ms + self.message_flash_ms
    }
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete slave configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SlaveConfig {
    /// SDA pin of the slave peripheral
    pub sda_pin: u8,
    /// SCL pin of the slave peripheral
    pub scl_pin: u8,
    /// Address strap pins (bit 0, bit 1)
    pub address_pins: [u8; 2],
    /// Base address added to the strap value
    pub address_offset: u8,
    /// Address answered by the 8-bit port expander
    pub port_address: u8,
    /// Addresses answered by plain GPIO (relay) expanders
    pub gpio_addresses: [u8; 2],
    /// Lines placed under software control at boot
    pub boot_mask: u32,
    /// Lines configured by the role profile at boot
    pub role_select_mask: u32,
    /// Boot profile of the port expander
    pub port_profile: RoleProfile,
    /// Boot profile of the GPIO expander
    pub gpio_profile: RoleProfile,
    /// Watchdog timeout, `0` leaves the watchdog disabled
    pub watchdog_timeout_ms: u32,
    /// Heartbeat timing
    pub heartbeat: HeartbeatConfig,
}

impl SlaveConfig {
    pub const DEFAULT: Self = Self {
        sda_pin: 20,
        scl_pin: 21,
        address_pins: [26, 27],
        address_offset: 0x20,
        port_address: 0x21,
        gpio_addresses: [0x22, 0x23],
        boot_mask: GPIO_BOOT_MASK,
        role_select_mask: GPIO_ROLE_SELECT_MASK,
        port_profile: RoleProfile {
            direction: 1 << 28,
            output: 0,
        },
        gpio_profile: RoleProfile {
            direction: GPIO_ROLE_SELECT_MASK,
            output: 0,
        },
        watchdog_timeout_ms: 0,
        heartbeat: HeartbeatConfig::DEFAULT,
    };

    /// Check that an armed watchdog outlives the main loop's feed interval
    pub const fn watchdog_fits_heartbeat(&self) -> bool {
        self.watchdog_timeout_ms == 0
            || self.watchdog_timeout_ms > self.heartbeat.max_feed_interval_ms()
    }
}

impl Default for SlaveConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bus_pins_are_not_booted_as_gpio() {
        let config = SlaveConfig::default();
        for pin in [config.sda_pin, config.scl_pin] {
            assert_eq!(config.boot_mask & (1 << pin), 0);
        }
    }

    #[test]
    fn test_watchdog_must_outlive_feed_interval() {
        let mut config = SlaveConfig::default();
        assert_eq!(config.heartbeat.max_feed_interval_ms(), 260);
        assert!(config.watchdog_fits_heartbeat());

        config.watchdog_timeout_ms = 260;
        assert!(!config.watchdog_fits_heartbeat());

        // One feed per drained record keeps a long backlog within 500 ms
        config.watchdog_timeout_ms = 500;
        assert!(config.watchdog_fits_heartbeat());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_types_are_serde() {
        fn assert_serde<T: Serialize + for<'de> Deserialize<'de>>() {}
        assert_serde::<RoleProfile>();
        assert_serde::<HeartbeatConfig>();
        assert_serde::<SlaveConfig>();
    }

    #[test]
    fn test_profiles_stay_within_select_mask() {
        let config = SlaveConfig::default();
        assert_eq!(config.port_profile.direction & !config.role_select_mask, 0);
        assert_eq!(config.gpio_profile.direction & !config.role_select_mask, 0);
    }
}
