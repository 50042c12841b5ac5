//! Command dispatcher
//!
//! Turns a command code plus the register file contents into exactly one
//! hardware effect (write path) or one computed response byte (read path),
//! keeping the status flags and diagnostic stream up to date.

pub mod read;
pub mod table;
pub mod write;

use interconnect_hal::GpioBank;

use crate::diagnostics::{DiagnosticChannel, DiagnosticMessage};
use crate::identity::DeviceIdentity;
use crate::status::{StatusFlag, StatusFlags};

pub use table::{
    read_command, write_command, Access, Port, ReadAction, ReadCommand, WriteAction,
    WriteCommand, PAD_STATE_REGISTER,
};

/// Why a command was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Rejection {
    /// Command not allowed for the device role
    WrongRole,
    /// Operand is not a line of the GPIO bank
    InvalidLine(u8),
}

/// Executes commands against the GPIO bank
pub struct Dispatcher<'d, G> {
    gpio: G,
    identity: DeviceIdentity,
    status: StatusFlags,
    diagnostics: &'d DiagnosticChannel,
}

impl<'d, G: GpioBank> Dispatcher<'d, G> {
    /// Create a dispatcher for a resolved device
    pub fn new(gpio: G, identity: DeviceIdentity, diagnostics: &'d DiagnosticChannel) -> Self {
        Self {
            gpio,
            identity,
            status: StatusFlags::new(),
            diagnostics,
        }
    }

    /// Raise a sticky status flag
    pub fn raise(&mut self, flag: StatusFlag) {
        self.status.raise(flag);
    }

    /// Current status flags
    pub fn status(&self) -> StatusFlags {
        self.status
    }

    /// Device identity
    pub fn identity(&self) -> &DeviceIdentity {
        &self.identity
    }

    /// GPIO bank
    pub fn gpio(&self) -> &G {
        &self.gpio
    }

    /// Mutable GPIO bank, for boot-time configuration
    pub fn gpio_mut(&mut self) -> &mut G {
        &mut self.gpio
    }

    /// Queue a diagnostic; dropped silently when the queue is full
    pub fn emit(&self, message: DiagnosticMessage) {
        let _ = self.diagnostics.send(message);
    }

    /// Check role and operand before running a command
    fn check(&self, access: Access, addresses_line: bool, operand: u8) -> Result<(), Rejection> {
        if access == Access::PortOnly && !self.identity.role().allows_ports() {
            return Err(Rejection::WrongRole);
        }
        if addresses_line && !G::is_valid_line(operand) {
            return Err(Rejection::InvalidLine(operand));
        }
        Ok(())
    }

    /// Flag and report a refused command
    fn reject(&mut self, code: u8, label: &str, rejection: Rejection) {
        self.status.raise(StatusFlag::Command);
        let message = match rejection {
            Rejection::WrongRole => crate::diag!(
                "Cmd {:02}, Not Valid for I2C Pico: 0x{:02x}",
                code,
                self.identity.address()
            ),
            Rejection::InvalidLine(line) => {
                crate::diag!("Cmd {:02}, {}: {:02} invalid line", code, label, line)
            }
        };
        self.emit(message);
    }
}
