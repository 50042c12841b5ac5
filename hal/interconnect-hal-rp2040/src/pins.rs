//! Statically assigned pins: address straps and the status LED

use embassy_rp::gpio::{Input, Output};
use interconnect_hal::{InputPin, OutputPin};

/// Address strap, read once at boot
pub struct StrapPin<'d>(Input<'d>);

impl<'d> StrapPin<'d> {
    pub fn new(input: Input<'d>) -> Self {
        Self(input)
    }
}

impl InputPin for StrapPin<'_> {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

/// On-board status LED (lit when high)
pub struct StatusLed<'d>(Output<'d>);

impl<'d> StatusLed<'d> {
    pub fn new(output: Output<'d>) -> Self {
        Self(output)
    }
}

impl OutputPin for StatusLed<'_> {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}
