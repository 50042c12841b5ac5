//! Line-addressed GPIO bank
//!
//! The bus master addresses lines by number at runtime, so the bank talks
//! to the SIO and PADS_BANK0 registers directly instead of going through
//! typed embassy pins. SIO writes go through the set/clear/xor aliases.

use embassy_rp::pac;
use interconnect_hal::{Direction, DriveStrength, GpioBank, Pulls};

use crate::pad;

/// Number of user GPIO lines on RP2040
pub const GPIO_COUNT: u8 = 30;

/// IO_BANK0 function select for software-controlled IO
const FUNCSEL_SIO: u8 = 5;

/// Bank 0 of the RP2040 GPIO
///
/// Only lines in the claimed mask are switched to SIO. Lines outside it
/// (I2C, LED) keep whatever function their embassy driver set.
pub struct Rp2040Gpio {
    claimed: u32,
}

impl Rp2040Gpio {
    /// Claim the lines in `mask` for software control
    ///
    /// Claimed lines are routed to SIO with input enabled. Their
    /// direction and output latch are left for the caller to set.
    pub fn new(mask: u32) -> Self {
        for line in 0..GPIO_COUNT {
            if mask & bit(line) == 0 {
                continue;
            }
            let pad_ctrl = pac::PADS_BANK0.gpio(line as usize);
            pad_ctrl.modify(|w| w.0 = pad::for_sio(w.0));
            pac::IO_BANK0
                .gpio(line as usize)
                .ctrl()
                .write(|w| w.set_funcsel(FUNCSEL_SIO));
        }

        Self { claimed: mask }
    }

    /// Lines routed to SIO by this bank
    pub fn claimed(&self) -> u32 {
        self.claimed
    }

    fn pad(&self, line: u8) -> u32 {
        pac::PADS_BANK0.gpio(line as usize).read().0
    }

    fn update_pad(&mut self, line: u8, f: impl FnOnce(u32) -> u32) {
        pac::PADS_BANK0
            .gpio(line as usize)
            .modify(|w| w.0 = f(w.0));
    }
}

#[inline]
fn bit(line: u8) -> u32 {
    1 << line
}

impl GpioBank for Rp2040Gpio {
    const LINE_COUNT: u8 = GPIO_COUNT;

    fn level(&self, line: u8) -> bool {
        self.read_all() & bit(line) != 0
    }

    fn set_level(&mut self, line: u8, high: bool) {
        let out = pac::SIO.gpio_out(0);
        if high {
            out.value_set().write_value(bit(line));
        } else {
            out.value_clr().write_value(bit(line));
        }
    }

    fn direction(&self, line: u8) -> Direction {
        if pac::SIO.gpio_oe(0).value().read() & bit(line) != 0 {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    fn set_direction(&mut self, line: u8, direction: Direction) {
        let oe = pac::SIO.gpio_oe(0);
        match direction {
            Direction::Output => oe.value_set().write_value(bit(line)),
            Direction::Input => oe.value_clr().write_value(bit(line)),
        }
    }

    fn drive_strength(&self, line: u8) -> DriveStrength {
        pad::drive(self.pad(line))
    }

    fn set_drive_strength(&mut self, line: u8, strength: DriveStrength) {
        self.update_pad(line, |p| pad::with_drive(p, strength));
    }

    fn pulls(&self, line: u8) -> Pulls {
        pad::pulls(self.pad(line))
    }

    fn set_pulls(&mut self, line: u8, pulls: Pulls) {
        self.update_pad(line, |p| pad::with_pulls(p, pulls));
    }

    fn pad_state(&self, line: u8) -> u8 {
        (self.pad(line) & pad::STATE_MASK) as u8
    }

    fn set_pad_state(&mut self, line: u8, state: u8) {
        self.update_pad(line, |p| pad::with_state(p, state));
    }

    fn read_all(&self) -> u32 {
        pac::SIO.gpio_in(0).read()
    }

    fn write_masked(&mut self, mask: u32, value: u32) {
        let out = pac::SIO.gpio_out(0);
        let current = out.value().read();
        out.value_xor().write_value((current ^ value) & mask);
    }

    fn set_direction_masked(&mut self, mask: u32, value: u32) {
        let oe = pac::SIO.gpio_oe(0);
        let current = oe.value().read();
        oe.value_xor().write_value((current ^ value) & mask);
    }
}
