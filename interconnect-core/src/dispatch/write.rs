//! Write path: a data byte landed in a command register

use interconnect_hal::GpioBank;

use super::table::{write_command, WriteAction, PAD_STATE_REGISTER};
use super::Dispatcher;
use crate::diag;
use crate::registers::RegisterFile;

impl<G: GpioBank> Dispatcher<'_, G> {
    /// Run the command selected by `code` with the operand just stored
    ///
    /// Unknown codes do nothing and stay silent. Known codes always emit
    /// one diagnostic, also when refused.
    pub fn dispatch_write(&mut self, registers: &RegisterFile, code: u8) {
        let Some(command) = write_command(code) else {
            return;
        };
        let operand = registers.current();

        if let Err(rejection) =
            self.check(command.access, command.action.addresses_line(), operand)
        {
            self.reject(code, command.label, rejection);
            return;
        }

        let label = command.label;
        let message = match command.action {
            WriteAction::SetLevel(high) => {
                self.gpio.set_level(operand, high);
                diag!("Cmd {:02}, {}: {:02} ", code, label, operand)
            }
            WriteAction::ClearBank => {
                let bank = super::Port::for_bank_operand(operand);
                self.gpio.write_masked(bank.mask(), 0);
                diag!("Cmd {:02}, {}: {:02} ", code, label, operand)
            }
            WriteAction::SetDirection(direction) => {
                self.gpio.set_direction(operand, direction);
                diag!("Cmd {:02}, {}: {:02} ", code, label, operand)
            }
            WriteAction::SetDriveStrength(strength) => {
                self.gpio.set_drive_strength(operand, strength);
                diag!("Cmd {:02}, {}: {:02} ", code, label, operand)
            }
            WriteAction::SetPulls(pulls) => {
                self.gpio.set_pulls(operand, pulls);
                diag!("Cmd {:02}, {}: {:02} ", code, label, operand)
            }
            WriteAction::StorePadState => {
                // Operand already sits in its register
                diag!("Cmd {:02}, {}: 0x{:02x} ", code, label, operand)
            }
            WriteAction::ApplyPadState => {
                let state = registers.get(PAD_STATE_REGISTER).unwrap_or_default();
                self.gpio.set_pad_state(operand, state);
                diag!(
                    "Cmd {:02}, {}: {:02}, State: 0x{:02x} ",
                    code,
                    label,
                    operand,
                    state
                )
            }
            WriteAction::PortDirection(port) => {
                self.gpio
                    .set_direction_masked(port.mask(), port.spread(operand));
                diag!("Cmd {:02}, Port{}, {}: 0x{:02x} ", code, port.number(), label, operand)
            }
            WriteAction::PortOutput(port) => {
                self.gpio.write_masked(port.mask(), port.spread(operand));
                diag!("Cmd {:02}, Port{}, {}: 0x{:02x} ", code, port.number(), label, operand)
            }
        };
        self.emit(message);
    }
}
