//! Sticky status flags
//!
//! Flags are only ever raised. The whole byte is mirrored into the status
//! register when the master reads it; reading never clears anything.

/// Individual status flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StatusFlag {
    /// Device role unresolved or unsupported
    Config = 1 << 0,
    /// Command illegal for this device, or malformed transaction
    Command = 1 << 1,
    /// General error (reserved)
    General = 1 << 2,
    /// Last reboot was caused by the watchdog
    Watchdog = 1 << 3,
}

impl StatusFlag {
    /// Bit mask of this flag in the status byte
    pub const fn mask(self) -> u8 {
        self as u8
    }
}

/// Status bitfield; upper four bits are spare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StatusFlags(u8);

impl StatusFlags {
    /// All flags clear
    pub const fn new() -> Self {
        Self(0)
    }

    /// Raise a flag; it stays set until reset
    pub fn raise(&mut self, flag: StatusFlag) {
        self.0 |= flag.mask();
    }

    /// Check whether a flag is set
    pub fn contains(&self, flag: StatusFlag) -> bool {
        self.0 & flag.mask() != 0
    }

    /// Raw status byte as reported in the status register
    pub fn bits(&self) -> u8 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_layout() {
        assert_eq!(StatusFlag::Config.mask(), 0x01);
        assert_eq!(StatusFlag::Command.mask(), 0x02);
        assert_eq!(StatusFlag::General.mask(), 0x04);
        assert_eq!(StatusFlag::Watchdog.mask(), 0x08);
    }

    #[test]
    fn test_flags_accumulate() {
        let mut flags = StatusFlags::new();
        assert_eq!(flags.bits(), 0);

        flags.raise(StatusFlag::Config);
        flags.raise(StatusFlag::Command);
        assert_eq!(flags.bits(), 0x03);

        // Raising again changes nothing
        flags.raise(StatusFlag::Config);
        assert_eq!(flags.bits(), 0x03);
        assert!(flags.contains(StatusFlag::Command));
        assert!(!flags.contains(StatusFlag::Watchdog));
    }
}
