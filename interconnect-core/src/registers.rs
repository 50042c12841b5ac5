//! Register file and addressing phase
//!
//! The slave exposes 128 byte registers. The first byte of every write
//! selects a register (the command code); each following byte is stored
//! in that register and triggers the command.

/// Number of registers
pub const REGISTER_COUNT: usize = 128;

/// Highest valid register address
pub const MAX_ADDRESS: u8 = (REGISTER_COUNT - 1) as u8;

/// Errors from register addressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RegisterError {
    /// Address byte beyond the register file; clamped to [`MAX_ADDRESS`]
    AddressOutOfRange(u8),
    /// Data byte received before any address byte
    NoAddress,
}

/// 128-byte register file with the current transaction's address
#[derive(Debug, Clone)]
pub struct RegisterFile {
    cells: [u8; REGISTER_COUNT],
    current_address: u8,
    address_phase_complete: bool,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Create a zeroed register file
    pub const fn new() -> Self {
        Self {
            cells: [0; REGISTER_COUNT],
            current_address: 0,
            address_phase_complete: false,
        }
    }

    /// Capture the address byte of a transaction
    ///
    /// Addresses above [`MAX_ADDRESS`] are clamped; the address phase still
    /// completes so the rest of the transaction stays aligned.
    pub fn begin_address(&mut self, byte: u8) -> Result<(), RegisterError> {
        self.address_phase_complete = true;
        if byte > MAX_ADDRESS {
            self.current_address = MAX_ADDRESS;
            return Err(RegisterError::AddressOutOfRange(byte));
        }
        self.current_address = byte;
        Ok(())
    }

    /// Store a data byte at the current address
    ///
    /// Returns the address written, which is the command to dispatch.
    pub fn write_data(&mut self, byte: u8) -> Result<u8, RegisterError> {
        if !self.address_phase_complete {
            return Err(RegisterError::NoAddress);
        }
        self.cells[self.current_address as usize] = byte;
        Ok(self.current_address)
    }

    /// Close the transaction; the next byte is an address again
    ///
    /// The current address is kept so a master can write the command,
    /// stop, and read it back in a separate transaction.
    pub fn end_transaction(&mut self) {
        self.address_phase_complete = false;
    }

    /// Address selected by the last address byte
    pub fn current_address(&self) -> u8 {
        self.current_address
    }

    /// Check whether the current transaction has passed its address byte
    pub fn address_phase_complete(&self) -> bool {
        self.address_phase_complete
    }

    /// Value at the current address
    pub fn current(&self) -> u8 {
        self.cells[self.current_address as usize]
    }

    /// Overwrite the value at the current address
    pub fn set_current(&mut self, value: u8) {
        self.cells[self.current_address as usize] = value;
    }

    /// Read any register; out-of-range addresses read as `None`
    pub fn get(&self, address: u8) -> Option<u8> {
        self.cells.get(address as usize).copied()
    }

    /// Write any register; out-of-range addresses are rejected
    pub fn set(&mut self, address: u8, value: u8) -> Result<(), RegisterError> {
        let cell = self
            .cells
            .get_mut(address as usize)
            .ok_or(RegisterError::AddressOutOfRange(address))?;
        *cell = value;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_then_data() {
        let mut regs = RegisterFile::new();
        assert!(!regs.address_phase_complete());

        regs.begin_address(11).unwrap();
        assert!(regs.address_phase_complete());
        assert_eq!(regs.current_address(), 11);
        // Address phase never writes a cell
        assert_eq!(regs.get(11), Some(0));

        assert_eq!(regs.write_data(5), Ok(11));
        assert_eq!(regs.get(11), Some(5));
        assert_eq!(regs.current(), 5);
    }

    #[test]
    fn test_data_without_address_rejected() {
        let mut regs = RegisterFile::new();
        assert_eq!(regs.write_data(5), Err(RegisterError::NoAddress));
        assert_eq!(regs.get(0), Some(0));
    }

    #[test]
    fn test_end_transaction_keeps_address() {
        let mut regs = RegisterFile::new();
        regs.begin_address(15).unwrap();
        regs.write_data(3).unwrap();
        regs.end_transaction();

        assert!(!regs.address_phase_complete());
        assert_eq!(regs.current_address(), 15);
        assert_eq!(regs.write_data(4), Err(RegisterError::NoAddress));
    }

    #[test]
    fn test_out_of_range_address_is_clamped() {
        let mut regs = RegisterFile::new();
        assert_eq!(
            regs.begin_address(200),
            Err(RegisterError::AddressOutOfRange(200))
        );
        assert_eq!(regs.current_address(), MAX_ADDRESS);
        assert!(regs.address_phase_complete());
        assert_eq!(regs.write_data(9), Ok(MAX_ADDRESS));
    }

    #[test]
    fn test_bounds_checked_access() {
        let mut regs = RegisterFile::new();
        assert_eq!(regs.get(128), None);
        assert_eq!(regs.set(128, 1), Err(RegisterError::AddressOutOfRange(128)));
        assert!(regs.set(127, 1).is_ok());
        assert_eq!(regs.get(127), Some(1));
    }
}
