//! Command tables
//!
//! One table for the write path (command + operand written by the master)
//! and one for the read path (byte requested by the master). The codes are
//! the wire contract with the InterconnectIO master and must not change.

use interconnect_hal::{Direction, DriveStrength, Pulls};

/// Register holding the pad state stored by command 60
pub const PAD_STATE_REGISTER: u8 = 60;

/// Operand threshold selecting the bank for bank-wide commands
const BANK_SELECT_THRESHOLD: u8 = 10;

/// 8-bit port (also used as a bank for bank commands)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Port {
    /// Lines 0-7
    Zero,
    /// Lines 10-17
    One,
}

impl Port {
    /// Position of the port's lowest line
    pub const fn shift(self) -> u32 {
        match self {
            Port::Zero => 0,
            Port::One => 10,
        }
    }

    /// Mask of the port's lines
    pub const fn mask(self) -> u32 {
        0xff << self.shift()
    }

    /// Port number as shown in diagnostics
    pub const fn number(self) -> u8 {
        match self {
            Port::Zero => 0,
            Port::One => 1,
        }
    }

    /// Bank selected by a bank command operand (<10 → bank A)
    pub fn for_bank_operand(operand: u8) -> Self {
        if operand < BANK_SELECT_THRESHOLD {
            Port::Zero
        } else {
            Port::One
        }
    }

    /// Extract this port's 8 bits from a full line snapshot
    pub fn extract(self, all: u32) -> u8 {
        (all >> self.shift()) as u8
    }

    /// Place an 8-bit value on this port's lines
    pub fn spread(self, value: u8) -> u32 {
        (value as u32) << self.shift()
    }
}

/// Which device roles may run a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Access {
    /// Any role
    Any,
    /// Port expander only
    PortOnly,
}

/// Hardware effect of a write command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WriteAction {
    /// Drive the addressed line
    SetLevel(bool),
    /// Drive every line of the bank selected by the operand low
    ClearBank,
    /// Set the addressed line's direction
    SetDirection(Direction),
    /// Set the addressed line's drive strength
    SetDriveStrength(DriveStrength),
    /// Configure the addressed line's pull resistors
    SetPulls(Pulls),
    /// Keep the operand for a later [`WriteAction::ApplyPadState`]
    StorePadState,
    /// Write the stored pad state to the addressed line
    ApplyPadState,
    /// Set a port's direction mask
    PortDirection(Port),
    /// Set a port's output value
    PortOutput(Port),
}

impl WriteAction {
    /// Check whether the operand is a line number
    pub fn addresses_line(&self) -> bool {
        matches!(
            self,
            WriteAction::SetLevel(_)
                | WriteAction::SetDirection(_)
                | WriteAction::SetDriveStrength(_)
                | WriteAction::SetPulls(_)
                | WriteAction::ApplyPadState
        )
    }
}

/// Write-path table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteCommand {
    pub code: u8,
    pub action: WriteAction,
    pub access: Access,
    /// Diagnostic label
    pub label: &'static str,
}

/// Value computed by a read command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadAction {
    VersionMajor,
    VersionMinor,
    /// Input byte of the bank selected by the operand
    BankInput,
    /// True level of the addressed line
    Level,
    /// Direction of the addressed line (1 = output)
    Direction,
    /// Drive strength encoding of the addressed line
    DriveStrength,
    /// Pull-up enabled on the addressed line
    PullUp,
    /// Pull-down enabled on the addressed line
    PullDown,
    /// Low 8 bits of the addressed line's pad register
    PadState,
    /// Input byte of a port
    PortInput(Port),
    /// Status flags
    Status,
}

impl ReadAction {
    /// Check whether the operand is a line number
    pub fn addresses_line(&self) -> bool {
        matches!(
            self,
            ReadAction::Level
                | ReadAction::Direction
                | ReadAction::DriveStrength
                | ReadAction::PullUp
                | ReadAction::PullDown
                | ReadAction::PadState
        )
    }
}

/// Read-path table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadCommand {
    pub code: u8,
    pub action: ReadAction,
    pub access: Access,
    /// Diagnostic label
    pub label: &'static str,
}

const fn write(code: u8, action: WriteAction, label: &'static str) -> WriteCommand {
    WriteCommand {
        code,
        action,
        access: Access::Any,
        label,
    }
}

const fn write_port(code: u8, action: WriteAction, label: &'static str) -> WriteCommand {
    WriteCommand {
        code,
        action,
        access: Access::PortOnly,
        label,
    }
}

const fn read(code: u8, action: ReadAction, label: &'static str) -> ReadCommand {
    ReadCommand {
        code,
        action,
        access: Access::Any,
        label,
    }
}

const fn read_port(code: u8, action: ReadAction, label: &'static str) -> ReadCommand {
    ReadCommand {
        code,
        action,
        access: Access::PortOnly,
        label,
    }
}

/// Commands triggered by a data byte
pub const WRITE_COMMANDS: &[WriteCommand] = &[
    write(10, WriteAction::SetLevel(false), "Clear Gpio"),
    write(11, WriteAction::SetLevel(true), "Set Gpio"),
    write(12, WriteAction::ClearBank, "Clear Bank Gpio"),
    write(20, WriteAction::SetDirection(Direction::Output), "Set Dir Out Gpio"),
    write(21, WriteAction::SetDirection(Direction::Input), "Set Dir In Gpio"),
    write(30, WriteAction::SetDriveStrength(DriveStrength::Ma2), "2mA Gpio"),
    write(31, WriteAction::SetDriveStrength(DriveStrength::Ma4), "4mA Gpio"),
    write(32, WriteAction::SetDriveStrength(DriveStrength::Ma8), "8mA Gpio"),
    write(33, WriteAction::SetDriveStrength(DriveStrength::Ma12), "12mA Gpio"),
    write(41, WriteAction::SetPulls(Pulls::UP), "Pull-up Gpio"),
    write(50, WriteAction::SetPulls(Pulls::NONE), "Clear pull-up, pull-down Gpio"),
    write(51, WriteAction::SetPulls(Pulls::DOWN), "Pull-down Gpio"),
    write(PAD_STATE_REGISTER, WriteAction::StorePadState, "Pad State"),
    write(61, WriteAction::ApplyPadState, "Set Pad State to Gpio"),
    write_port(80, WriteAction::PortDirection(Port::Zero), "dir"),
    write_port(81, WriteAction::PortOutput(Port::Zero), "8 bit Out"),
    write_port(90, WriteAction::PortDirection(Port::One), "dir"),
    write_port(91, WriteAction::PortOutput(Port::One), "8 bit Out"),
];

/// Commands whose read response is computed fresh
pub const READ_COMMANDS: &[ReadCommand] = &[
    read(1, ReadAction::VersionMajor, "MAJ Version"),
    read(2, ReadAction::VersionMinor, "MIN Version"),
    read(13, ReadAction::BankInput, "Bank"),
    read(15, ReadAction::Level, "Read True Gpio"),
    read(25, ReadAction::Direction, "Read Dir Gpio"),
    read(35, ReadAction::DriveStrength, "Read Strength Gpio"),
    read(45, ReadAction::PullUp, "Read Pull-up Gpio"),
    read(55, ReadAction::PullDown, "Read Pull-down Gpio"),
    read(65, ReadAction::PadState, "Read Pad State Gpio"),
    read_port(85, ReadAction::PortInput(Port::Zero), "8 bit In"),
    read_port(95, ReadAction::PortInput(Port::One), "8 bit In"),
    read(crate::config::REG_STATUS, ReadAction::Status, "Status register"),
];

/// Look up a write-path command
pub fn write_command(code: u8) -> Option<&'static WriteCommand> {
    WRITE_COMMANDS.iter().find(|c| c.code == code)
}

/// Look up a read-path command; `None` means set-readback
pub fn read_command(code: u8) -> Option<&'static ReadCommand> {
    READ_COMMANDS.iter().find(|c| c.code == code)
}
