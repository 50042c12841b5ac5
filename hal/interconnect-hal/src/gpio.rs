//! GPIO abstractions
//!
//! Two levels of abstraction live here:
//!
//! - [`OutputPin`] / [`InputPin`] for single, statically assigned pins
//!   (status LED, address straps)
//! - [`GpioBank`] for the line-addressed bank the bus master controls, where
//!   the line number arrives at runtime as a command operand

/// Digital output pin
///
/// Implementations should handle the actual hardware register manipulation
/// for the specific chip.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Implementations should handle the actual hardware register reading
/// for the specific chip.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// Direction as reported on the wire (1 = output)
    pub fn as_bit(self) -> u8 {
        match self {
            Direction::Input => 0,
            Direction::Output => 1,
        }
    }
}

/// Output drive strength
///
/// The discriminants match the two-bit pad encoding, which is also the
/// value reported to the bus master.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum DriveStrength {
    Ma2 = 0,
    Ma4 = 1,
    Ma8 = 2,
    Ma12 = 3,
}

impl DriveStrength {
    /// Decode from the two-bit pad encoding (upper bits ignored)
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b11 {
            0 => DriveStrength::Ma2,
            1 => DriveStrength::Ma4,
            2 => DriveStrength::Ma8,
            _ => DriveStrength::Ma12,
        }
    }

    /// Two-bit pad encoding
    pub fn bits(self) -> u8 {
        self as u8
    }
}

/// Pull resistor configuration of a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulls {
    pub up: bool,
    pub down: bool,
}

impl Pulls {
    /// Both pulls disabled
    pub const NONE: Self = Self {
        up: false,
        down: false,
    };

    /// Pull-up only
    pub const UP: Self = Self {
        up: true,
        down: false,
    };

    /// Pull-down only
    pub const DOWN: Self = Self {
        up: false,
        down: true,
    };
}

/// Line-addressed GPIO bank
///
/// Lines are numbered `0..LINE_COUNT`. Callers validate line numbers
/// before calling; implementations may ignore out-of-range lines.
///
/// Masked operations take a 32-bit mask where bit `n` is line `n`; only
/// lines with their mask bit set are affected.
pub trait GpioBank {
    /// Number of addressable lines
    const LINE_COUNT: u8;

    /// Check whether `line` addresses a real line
    fn is_valid_line(line: u8) -> bool {
        line < Self::LINE_COUNT
    }

    /// Read the true input level of a line
    fn level(&self, line: u8) -> bool;

    /// Drive a line's output latch
    fn set_level(&mut self, line: u8, high: bool);

    /// Read a line's direction
    fn direction(&self, line: u8) -> Direction;

    /// Set a line's direction
    fn set_direction(&mut self, line: u8, direction: Direction);

    /// Read a line's drive strength
    fn drive_strength(&self, line: u8) -> DriveStrength;

    /// Set a line's drive strength
    fn set_drive_strength(&mut self, line: u8, strength: DriveStrength);

    /// Read a line's pull resistor configuration
    fn pulls(&self, line: u8) -> Pulls;

    /// Configure a line's pull resistors
    fn set_pulls(&mut self, line: u8, pulls: Pulls);

    /// Read the low 8 bits of a line's raw pad control register
    fn pad_state(&self, line: u8) -> u8;

    /// Overwrite the low 8 bits of a line's raw pad control register
    fn set_pad_state(&mut self, line: u8, state: u8);

    /// Read the input level of every line at once
    fn read_all(&self) -> u32;

    /// Drive the output latches of the masked lines to `value`
    fn write_masked(&mut self, mask: u32, value: u32);

    /// Set the directions of the masked lines (bit set = output)
    fn set_direction_masked(&mut self, mask: u32, value: u32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drive_strength_encoding() {
        for bits in 0..4u8 {
            assert_eq!(DriveStrength::from_bits(bits).bits(), bits);
        }
        assert_eq!(DriveStrength::from_bits(0b110), DriveStrength::Ma8);
    }

    #[test]
    fn test_direction_bit() {
        assert_eq!(Direction::Output.as_bit(), 1);
        assert_eq!(Direction::Input.as_bit(), 0);
    }

    struct Pin(bool);

    impl OutputPin for Pin {
        fn set_high(&mut self) {
            self.0 = true;
        }

        fn set_low(&mut self) {
            self.0 = false;
        }

        fn is_set_high(&self) -> bool {
            self.0
        }
    }

    impl InputPin for Pin {
        fn is_high(&self) -> bool {
            self.0
        }
    }

    #[test]
    fn test_pin_defaults() {
        let mut pin = Pin(false);
        pin.set_high();
        assert!(pin.is_set_high());
        assert!(!pin.is_low());
        pin.set_low();
        assert!(pin.is_low());
    }
}
