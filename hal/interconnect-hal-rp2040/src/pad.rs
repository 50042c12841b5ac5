//! PADS_BANK0 control register encoding
//!
//! Only the low byte is exposed to the bus master:
//!
//! ```text
//! bit 7    OD      output disable
//! bit 6    IE      input enable
//! bit 5:4  DRIVE   0 = 2 mA, 1 = 4 mA, 2 = 8 mA, 3 = 12 mA
//! bit 3    PUE     pull-up enable
//! bit 2    PDE     pull-down enable
//! bit 1    SCHMITT
//! bit 0    SLEWFAST
//! ```

use interconnect_hal::{DriveStrength, Pulls};

pub const OD: u32 = 1 << 7;
pub const IE: u32 = 1 << 6;
pub const DRIVE_SHIFT: u32 = 4;
pub const DRIVE_MASK: u32 = 0b11 << DRIVE_SHIFT;
pub const PUE: u32 = 1 << 3;
pub const PDE: u32 = 1 << 2;

/// Bits of the register visible as pad state
pub const STATE_MASK: u32 = 0xff;

/// Decode the drive strength field
pub fn drive(pad: u32) -> DriveStrength {
    DriveStrength::from_bits(((pad & DRIVE_MASK) >> DRIVE_SHIFT) as u8)
}

/// Replace the drive strength field
pub fn with_drive(pad: u32, strength: DriveStrength) -> u32 {
    (pad & !DRIVE_MASK) | ((strength.bits() as u32) << DRIVE_SHIFT)
}

/// Decode the pull enables
pub fn pulls(pad: u32) -> Pulls {
    Pulls {
        up: pad & PUE != 0,
        down: pad & PDE != 0,
    }
}

/// Replace the pull enables
pub fn with_pulls(pad: u32, pulls: Pulls) -> u32 {
    let mut pad = pad & !(PUE | PDE);
    if pulls.up {
        pad |= PUE;
    }
    if pulls.down {
        pad |= PDE;
    }
    pad
}

/// Replace the low byte, keeping any upper bits
pub fn with_state(pad: u32, state: u8) -> u32 {
    (pad & !STATE_MASK) | state as u32
}

/// Pad set up for SIO use: input enabled, output not disabled
pub fn for_sio(pad: u32) -> u32 {
    (pad | IE) & !OD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_field() {
        let pad = with_drive(0x56, DriveStrength::Ma12);
        assert_eq!(pad, 0x76);
        assert_eq!(drive(pad), DriveStrength::Ma12);
        assert_eq!(drive(0x56), DriveStrength::Ma4);
    }

    #[test]
    fn test_pull_fields() {
        assert_eq!(pulls(0x56), Pulls::DOWN);
        let pad = with_pulls(0x56, Pulls::UP);
        assert_eq!(pad, 0x5a);
        assert_eq!(pulls(pad), Pulls::UP);
        assert_eq!(with_pulls(pad, Pulls::NONE), 0x52);
    }

    #[test]
    fn test_state_keeps_upper_bits() {
        assert_eq!(with_state(0x1_00 | 0x56, 0xab), 0x1_ab);
    }

    #[test]
    fn test_sio_pad() {
        assert_eq!(for_sio(0x80), IE);
    }
}
