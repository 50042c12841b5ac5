//! Protocol engine
//!
//! Owns the register file, the transaction state and the dispatcher. The
//! bus handler feeds it one [`SlaveEvent`] at a time; nothing in here
//! blocks or allocates, so it is safe to drive from interrupt priority.

use interconnect_hal::{GpioBank, ResetCause, SlaveEvent};

use crate::config::SlaveConfig;
use crate::diag;
use crate::diagnostics::DiagnosticChannel;
use crate::dispatch::Dispatcher;
use crate::identity::{DeviceIdentity, DeviceRole};
use crate::registers::{RegisterError, RegisterFile};
use crate::status::{StatusFlag, StatusFlags};
use crate::transaction::{TransactionAction, TransactionState};

/// I2C slave protocol engine
pub struct ProtocolEngine<'d, G> {
    registers: RegisterFile,
    state: TransactionState,
    dispatcher: Dispatcher<'d, G>,
}

impl<'d, G: GpioBank> ProtocolEngine<'d, G> {
    /// Create an engine without touching the hardware
    pub fn new(gpio: G, identity: DeviceIdentity, diagnostics: &'d DiagnosticChannel) -> Self {
        Self {
            registers: RegisterFile::new(),
            state: TransactionState::Idle,
            dispatcher: Dispatcher::new(gpio, identity, diagnostics),
        }
    }

    /// Bring up the slave: GPIO boot profile, boot flags and boot messages
    ///
    /// Lines in the boot mask become low inputs, then the role profile
    /// sets directions and outputs. An unsupported address raises the
    /// config flag; a watchdog reboot raises the watchdog flag.
    pub fn boot<R: ResetCause>(
        mut gpio: G,
        identity: DeviceIdentity,
        reset: &R,
        config: &SlaveConfig,
        diagnostics: &'d DiagnosticChannel,
    ) -> Self {
        gpio.set_direction_masked(config.boot_mask, 0);
        gpio.write_masked(config.boot_mask, 0);

        let mut engine = Self::new(gpio, identity, diagnostics);
        let address = identity.address();

        if reset.watchdog_caused_reboot() {
            engine.raise(StatusFlag::Watchdog);
        }

        engine
            .dispatcher
            .emit(diag!("Pico Slave boot for I2C address 0x{:02x}", address));

        match identity.boot_profile(config) {
            Some(profile) => {
                let gpio = engine.dispatcher.gpio_mut();
                gpio.set_direction_masked(config.role_select_mask, profile.direction);
                gpio.write_masked(config.role_select_mask, profile.output);
                engine
                    .dispatcher
                    .emit(diag!("Config for I2C address 0x{:02x} completed", address));
            }
            None => {
                engine.raise(StatusFlag::Config);
                engine
                    .dispatcher
                    .emit(diag!("I2C address not supported for device at address 0x{:02x}", address));
            }
        }

        engine
    }

    /// Handle one bus event
    ///
    /// Returns the byte to transmit for [`SlaveEvent::Request`], `None`
    /// otherwise.
    pub fn handle(&mut self, event: SlaveEvent) -> Option<u8> {
        let (next, action) = self.state.transition(event);
        self.state = next;

        match action {
            TransactionAction::CaptureAddress(byte) => {
                if let Err(e) = self.registers.begin_address(byte) {
                    self.register_fault(e);
                }
                None
            }
            TransactionAction::DispatchWrite(byte) => {
                self.write_data(byte);
                None
            }
            TransactionAction::Respond => Some(self.dispatcher.dispatch_read(&mut self.registers)),
            TransactionAction::Reset => {
                self.registers.end_transaction();
                None
            }
        }
    }

    /// Store a data byte and run its command
    ///
    /// A data byte without an address phase is refused with the command
    /// flag.
    pub fn write_data(&mut self, byte: u8) {
        match self.registers.write_data(byte) {
            Ok(code) => self.dispatcher.dispatch_write(&self.registers, code),
            Err(e) => self.register_fault(e),
        }
    }

    fn register_fault(&mut self, error: RegisterError) {
        self.raise(StatusFlag::Command);
        let message = match error {
            RegisterError::AddressOutOfRange(byte) => diag!(
                "Cmd {:02}, Address out of range, using {:02}",
                byte,
                self.registers.current_address()
            ),
            RegisterError::NoAddress => diag!("Data before command byte"),
        };
        self.dispatcher.emit(message);
    }

    /// Raise a sticky status flag
    pub fn raise(&mut self, flag: StatusFlag) {
        self.dispatcher.raise(flag);
    }

    /// Current status flags
    pub fn status(&self) -> StatusFlags {
        self.dispatcher.status()
    }

    /// Register file
    pub fn registers(&self) -> &RegisterFile {
        &self.registers
    }

    /// Transaction state
    pub fn state(&self) -> TransactionState {
        self.state
    }

    /// Device identity
    pub fn identity(&self) -> &DeviceIdentity {
        self.dispatcher.identity()
    }

    /// Device role
    pub fn role(&self) -> DeviceRole {
        self.dispatcher.identity().role()
    }

    /// GPIO bank
    pub fn gpio(&self) -> &G {
        self.dispatcher.gpio()
    }
}
