//! I2C slave abstractions
//!
//! The slave side of the bus is event driven: the controller hardware
//! raises one event per received byte, one per byte the master wants to
//! read, and one when the master ends the transfer.

/// Event raised by an I2C slave peripheral
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SlaveEvent {
    /// Master wrote a byte
    Receive(u8),
    /// Master is requesting a byte
    Request,
    /// Master signalled Stop or Restart
    Finish,
}
