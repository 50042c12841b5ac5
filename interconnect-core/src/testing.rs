//! Host-side doubles for the HAL traits

use interconnect_hal::{Direction, DriveStrength, GpioBank, InputPin, Pulls, ResetCause};

const LINES: usize = 30;

const PAD_PDE: u8 = 1 << 2;
const PAD_PUE: u8 = 1 << 3;
const PAD_DRIVE_SHIFT: u8 = 4;
const PAD_DRIVE_MASK: u8 = 0b11 << PAD_DRIVE_SHIFT;

/// Power-on pad value: input enabled, 4 mA, pull-down, schmitt trigger
const PAD_RESET: u8 = 0x56;

/// In-memory GPIO bank
///
/// A line reads high when its output latch is set or an external level is
/// injected with [`MockGpio::drive_inputs`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockGpio {
    out: u32,
    oe: u32,
    inputs: u32,
    pads: [u8; LINES],
}

impl MockGpio {
    pub fn new() -> Self {
        Self {
            out: 0,
            oe: 0,
            inputs: 0,
            pads: [PAD_RESET; LINES],
        }
    }

    /// Externally driven levels
    pub fn drive_inputs(&mut self, levels: u32) {
        self.inputs = levels;
    }

    pub fn outputs(&self) -> u32 {
        self.out
    }

    pub fn output_enables(&self) -> u32 {
        self.oe
    }
}

impl GpioBank for MockGpio {
    const LINE_COUNT: u8 = LINES as u8;

    fn level(&self, line: u8) -> bool {
        self.read_all() & (1 << line) != 0
    }

    fn set_level(&mut self, line: u8, high: bool) {
        self.write_masked(1 << line, if high { u32::MAX } else { 0 });
    }

    fn direction(&self, line: u8) -> Direction {
        if self.oe & (1 << line) != 0 {
            Direction::Output
        } else {
            Direction::Input
        }
    }

    fn set_direction(&mut self, line: u8, direction: Direction) {
        let value = match direction {
            Direction::Output => u32::MAX,
            Direction::Input => 0,
        };
        self.set_direction_masked(1 << line, value);
    }

    fn drive_strength(&self, line: u8) -> DriveStrength {
        DriveStrength::from_bits(self.pads[line as usize] >> PAD_DRIVE_SHIFT)
    }

    fn set_drive_strength(&mut self, line: u8, strength: DriveStrength) {
        let pad = &mut self.pads[line as usize];
        *pad = (*pad & !PAD_DRIVE_MASK) | (strength.bits() << PAD_DRIVE_SHIFT);
    }

    fn pulls(&self, line: u8) -> Pulls {
        let pad = self.pads[line as usize];
        Pulls {
            up: pad & PAD_PUE != 0,
            down: pad & PAD_PDE != 0,
        }
    }

    fn set_pulls(&mut self, line: u8, pulls: Pulls) {
        let pad = &mut self.pads[line as usize];
        *pad &= !(PAD_PUE | PAD_PDE);
        if pulls.up {
            *pad |= PAD_PUE;
        }
        if pulls.down {
            *pad |= PAD_PDE;
        }
    }

    fn pad_state(&self, line: u8) -> u8 {
        self.pads[line as usize]
    }

    fn set_pad_state(&mut self, line: u8, state: u8) {
        self.pads[line as usize] = state;
    }

    fn read_all(&self) -> u32 {
        self.out | self.inputs
    }

    fn write_masked(&mut self, mask: u32, value: u32) {
        self.out = (self.out & !mask) | (value & mask);
    }

    fn set_direction_masked(&mut self, mask: u32, value: u32) {
        self.oe = (self.oe & !mask) | (value & mask);
    }
}

/// Fixed strap level
pub struct MockStrap(pub bool);

impl InputPin for MockStrap {
    fn is_high(&self) -> bool {
        self.0
    }
}

/// Reset cause reporting a fixed answer
pub struct MockReset(pub bool);

impl ResetCause for MockReset {
    fn watchdog_caused_reboot(&self) -> bool {
        self.0
    }
}
