//! Hardware watchdog
//!
//! The reset reason is latched at construction, before the watchdog is
//! started again, so it still describes the previous boot.

use embassy_rp::watchdog::Watchdog;
use embassy_time::Duration;
use interconnect_hal::ResetCause;

/// Watchdog with the cause of the last reset
pub struct SlaveWatchdog {
    watchdog: Watchdog,
    watchdog_reset: bool,
    running: bool,
}

impl SlaveWatchdog {
    pub fn new(watchdog: Watchdog) -> Self {
        let watchdog_reset = watchdog.reset_reason().is_some();
        Self {
            watchdog,
            watchdog_reset,
            running: false,
        }
    }

    /// Start the watchdog; a zero timeout leaves it disabled
    pub fn start(&mut self, timeout_ms: u32) {
        if timeout_ms == 0 {
            return;
        }
        self.watchdog.start(Duration::from_millis(timeout_ms as u64));
        self.running = true;
    }

    /// Feed the watchdog if it is running
    pub fn feed(&mut self) {
        if self.running {
            self.watchdog.feed();
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl ResetCause for SlaveWatchdog {
    fn watchdog_caused_reboot(&self) -> bool {
        self.watchdog_reset
    }
}
