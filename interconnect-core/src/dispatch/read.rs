//! Read path: the master requests a byte from the current register

use interconnect_hal::GpioBank;

use super::table::{read_command, ReadAction, ReadCommand};
use super::{Dispatcher, Port};
use crate::diag;
use crate::diagnostics::DiagnosticMessage;
use crate::registers::RegisterFile;
use crate::version::{VERSION_MAJOR, VERSION_MINOR};

impl<G: GpioBank> Dispatcher<'_, G> {
    /// Produce the byte returned to the master
    ///
    /// Computed-get codes refresh the current register first. Any other
    /// code falls back to set-readback: the register is returned as last
    /// written, with no error. Both cases log a description of the command
    /// followed by a record of the outgoing byte.
    pub fn dispatch_read(&mut self, registers: &mut RegisterFile) -> u8 {
        let code = registers.current_address();

        match read_command(code) {
            Some(command) => self.compute(registers, command),
            None => {
                let message = diag!("Cmd {:02}, Readback: {:02} ", code, registers.current());
                self.emit(message);
            }
        }

        let value = registers.current();
        self.emit(diag!("Read Cmd : {:02} , Value: {:02} ", code, value));
        value
    }

    fn compute(&mut self, registers: &mut RegisterFile, command: &ReadCommand) {
        let code = command.code;
        let label = command.label;
        let operand = registers.current();

        if let Err(rejection) =
            self.check(command.access, command.action.addresses_line(), operand)
        {
            self.reject(code, label, rejection);
            return;
        }

        let (value, message): (u8, DiagnosticMessage) = match command.action {
            ReadAction::VersionMajor => (
                VERSION_MAJOR,
                diag!("Cmd {:02}, {}: {:02} ", code, label, VERSION_MAJOR),
            ),
            ReadAction::VersionMinor => (
                VERSION_MINOR,
                diag!("Cmd {:02}, {}: {:02} ", code, label, VERSION_MINOR),
            ),
            ReadAction::BankInput => {
                let value = Port::for_bank_operand(operand).extract(self.gpio.read_all());
                let message = diag!("Cmd {:02}, {}: {:02}, read: 0x{:02x} ", code, label, operand, value);
                (value, message)
            }
            ReadAction::Level => self.line_value(code, label, operand, u8::from(self.gpio.level(operand))),
            ReadAction::Direction => {
                let value = self.gpio.direction(operand).as_bit();
                self.line_value(code, label, operand, value)
            }
            ReadAction::DriveStrength => {
                let value = self.gpio.drive_strength(operand).bits();
                self.line_value(code, label, operand, value)
            }
            ReadAction::PullUp => {
                let value = u8::from(self.gpio.pulls(operand).up);
                self.line_value(code, label, operand, value)
            }
            ReadAction::PullDown => {
                let value = u8::from(self.gpio.pulls(operand).down);
                self.line_value(code, label, operand, value)
            }
            ReadAction::PadState => {
                let value = self.gpio.pad_state(operand);
                let message = diag!("Cmd {:02}, {}: {:02}, State: 0x{:02x} ", code, label, operand, value);
                (value, message)
            }
            ReadAction::PortInput(port) => {
                let value = port.extract(self.gpio.read_all());
                let message =
                    diag!("Cmd {:02}, Read Port{} {}: 0x{:02x} ", code, port.number(), label, value);
                (value, message)
            }
            ReadAction::Status => {
                let value = self.status.bits();
                (value, diag!("Cmd {:02}, {}: 0x{:02x} ", code, label, value))
            }
        };

        registers.set_current(value);
        self.emit(message);
    }

    fn line_value(&self, code: u8, label: &str, line: u8, value: u8) -> (u8, DiagnosticMessage) {
        (value, diag!("Cmd {:02}, {}: {:02}, State: {} ", code, label, line, value))
    }
}
