//! Heartbeat scheduler
//!
//! Pure tick counting for the main loop: when to blink the status LED and
//! when to log a heartbeat report. The firmware owns the timing and the
//! LED; this only decides.

use crate::config::HeartbeatConfig;

/// Work due on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeartbeatTick {
    /// Turn the LED off for the blink period
    pub blink: bool,
    /// Log a heartbeat report
    pub report: bool,
}

/// Heartbeat counters
#[derive(Debug, Clone)]
pub struct Heartbeat {
    pulse_ticks: u16,
    report_ticks: u16,
    pulse_counter: u16,
    report_counter: u16,
}

impl Heartbeat {
    /// Create a scheduler; a watchdog reset selects the fast blink rate
    pub fn new(config: &HeartbeatConfig, watchdog_reset: bool) -> Self {
        let pulse_ticks = if watchdog_reset {
            config.watchdog_pulse_ticks
        } else {
            config.pulse_ticks
        };

        Self {
            pulse_ticks,
            report_ticks: config.report_ticks,
            pulse_counter: 0,
            report_counter: 0,
        }
    }

    /// Advance one tick
    ///
    /// Each event fires once its counter exceeds the configured limit, then
    /// the counter restarts from zero.
    pub fn tick(&mut self) -> HeartbeatTick {
        self.pulse_counter = self.pulse_counter.saturating_add(1);
        self.report_counter = self.report_counter.saturating_add(1);

        let mut due = HeartbeatTick::default();

        if self.pulse_counter > self.pulse_ticks {
            self.pulse_counter = 0;
            due.blink = true;
        }
        if self.report_counter > self.report_ticks {
            self.report_counter = 0;
            due.report = true;
        }

        due
    }

    /// Ticks between blinks
    pub fn pulse_ticks(&self) -> u16 {
        self.pulse_ticks
    }
}
