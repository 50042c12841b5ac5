//! Device identity
//!
//! Two pulled-up strap pins select the bus address at boot; the address in
//! turn selects what the slave does on the InterconnectIO board.

use interconnect_hal::InputPin;

use crate::config::{RoleProfile, SlaveConfig};

/// Functional role of the slave
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DeviceRole {
    /// Plain GPIO (relay) expander
    GpioExpander,
    /// 8-bit port expander; the only role allowed to use port commands
    PortExpander,
    /// Address not assigned to any role
    Unsupported,
}

impl DeviceRole {
    /// Resolve the role served at `address`
    pub fn for_address(address: u8, config: &SlaveConfig) -> Self {
        if address == config.port_address {
            DeviceRole::PortExpander
        } else if config.gpio_addresses.contains(&address) {
            DeviceRole::GpioExpander
        } else {
            DeviceRole::Unsupported
        }
    }

    /// Check whether 8-bit port commands are legal
    pub fn allows_ports(self) -> bool {
        matches!(self, DeviceRole::PortExpander)
    }
}

/// Resolved address and role, fixed for the life of the device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceIdentity {
    address: u8,
    role: DeviceRole,
}

impl DeviceIdentity {
    /// Identity for a known address
    pub fn new(address: u8, config: &SlaveConfig) -> Self {
        Self {
            address,
            role: DeviceRole::for_address(address, config),
        }
    }

    /// Read the strap pins and resolve the identity
    ///
    /// Address = offset + (strap1 << 1) + strap0
    pub fn from_straps<P: InputPin>(straps: &[P; 2], config: &SlaveConfig) -> Self {
        let value = (u8::from(straps[1].is_high()) << 1) | u8::from(straps[0].is_high());
        Self::new(config.address_offset.wrapping_add(value), config)
    }

    /// 7-bit bus address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Resolved role
    pub fn role(&self) -> DeviceRole {
        self.role
    }

    /// Boot-time direction/output profile for this role
    pub fn boot_profile(&self, config: &SlaveConfig) -> Option<RoleProfile> {
        match self.role {
            DeviceRole::PortExpander => Some(config.port_profile),
            DeviceRole::GpioExpander => Some(config.gpio_profile),
            DeviceRole::Unsupported => None,
        }
    }
}
