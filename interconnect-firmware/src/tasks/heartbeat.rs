//! Thread-mode main loop
//!
//! Feeds the watchdog, blinks the status LED, logs the periodic heartbeat
//! and prints every diagnostic record queued by the bus task.

use defmt::*;
use embassy_time::Timer;
use interconnect_core::config::HeartbeatConfig;
use interconnect_core::version::{VERSION_MAJOR, VERSION_MINOR};
use interconnect_core::Heartbeat;
use interconnect_hal::OutputPin;
use interconnect_hal_rp2040::{SlaveWatchdog, StatusLed};

use crate::channels::DIAGNOSTICS;

/// Run the main loop forever
pub async fn heartbeat_loop(
    mut led: StatusLed<'static>,
    mut watchdog: SlaveWatchdog,
    config: HeartbeatConfig,
    watchdog_reset: bool,
    address: u8,
) -> ! {
    let mut heartbeat = Heartbeat::new(&config, watchdog_reset);
    info!(
        "Main loop started, blink every {} ticks of {} ms",
        heartbeat.pulse_ticks(),
        config.tick_ms
    );

    loop {
        watchdog.feed();
        Timer::after_millis(config.tick_ms as u64).await;

        let due = heartbeat.tick();
        if due.blink {
            led.set_low();
            Timer::after_millis(config.blink_off_ms as u64).await;
            led.set_high();
        }
        if due.report {
            info!(
                "Heartbeat I2C Slave add: 0x{=u8:02x}  version: {}.{}",
                address, VERSION_MAJOR, VERSION_MINOR
            );
        }

        drain(&mut led, &mut watchdog, &config, address).await;
    }
}

/// Print every queued record, flashing the LED once per record
///
/// The bus task can refill the queue while this runs, so the watchdog is
/// fed for every record.
async fn drain(
    led: &mut StatusLed<'static>,
    watchdog: &mut SlaveWatchdog,
    config: &HeartbeatConfig,
    address: u8,
) {
    while let Some(message) = DIAGNOSTICS.receive() {
        watchdog.feed();
        led.set_low();
        info!("Pico {=u8:02x}: {=str}", address, message.as_str());
        Timer::after_millis(config.message_flash_ms as u64).await;
        led.set_high();
    }

    let dropped = DIAGNOSTICS.take_dropped();
    if dropped > 0 {
        warn!("Pico {=u8:02x}: {} diagnostic record(s) dropped", address, dropped);
    }
}
