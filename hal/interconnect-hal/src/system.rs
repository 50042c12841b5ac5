//! System-level queries

/// Reports why the chip last came out of reset
pub trait ResetCause {
    /// True if the watchdog timer forced the last reboot
    fn watchdog_caused_reboot(&self) -> bool;
}
