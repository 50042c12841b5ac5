//! InterconnectIO I2C slave firmware
//!
//! Runs on the Raspberry Pi Pico secondary controllers of the
//! InterconnectIO box. Two strap pins select the bus address, which in
//! turn selects the role: relay GPIO expander or 8-bit port expander.
//! The bus master then drives the GPIO bank through two-byte commands.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::{InterruptExecutor, Spawner};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::i2c_slave::{self, I2cSlave};
use embassy_rp::interrupt;
use embassy_rp::interrupt::{InterruptExt, Priority};
use embassy_rp::peripherals::I2C0;
use embassy_rp::watchdog::Watchdog;
use embassy_time::Timer;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use interconnect_core::version::{VERSION_MAJOR, VERSION_MINOR};
use interconnect_core::{DeviceIdentity, ProtocolEngine};
use interconnect_hal::ResetCause;
use interconnect_hal_rp2040::{Rp2040Gpio, SlaveWatchdog, StatusLed, StrapPin};

use crate::channels::DIAGNOSTICS;
use crate::config::SLAVE_CONFIG;

mod channels;
mod config;
mod tasks;

bind_interrupts!(struct Irqs {
    I2C0_IRQ => embassy_rp::i2c::InterruptHandler<I2C0>;
});

/// Executor for the bus task; preempts the thread-mode main loop
static EXECUTOR_BUS: InterruptExecutor = InterruptExecutor::new();

// Receive buffer for the slave peripheral (must live forever)
static RX_BUF: StaticCell<[u8; tasks::RX_BUFFER_SIZE]> = StaticCell::new();

#[interrupt]
unsafe fn SWI_IRQ_1() {
    EXECUTOR_BUS.on_interrupt()
}

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Slave Version: {}.{}", VERSION_MAJOR, VERSION_MINOR);

    let mut watchdog = SlaveWatchdog::new(Watchdog::new(p.WATCHDOG));
    let watchdog_reset = watchdog.watchdog_caused_reboot();
    if watchdog_reset {
        warn!("Previous reset was caused by the watchdog");
    }

    // Resolve the address from the pulled-up straps
    let identity = {
        let straps = [
            StrapPin::new(Input::new(p.PIN_26, Pull::Up)),
            StrapPin::new(Input::new(p.PIN_27, Pull::Up)),
        ];
        // Let the pull-ups settle before sampling
        Timer::after_micros(100).await;
        DeviceIdentity::from_straps(&straps, &SLAVE_CONFIG)
    };
    info!(
        "I2C address 0x{=u8:02x}, role {}",
        identity.address(),
        identity.role()
    );

    let gpio = Rp2040Gpio::new(SLAVE_CONFIG.boot_mask);
    debug!("GPIO lines under software control: 0x{=u32:08x}", gpio.claimed());
    let engine = ProtocolEngine::boot(gpio, identity, &watchdog, &SLAVE_CONFIG, &DIAGNOSTICS);
    if engine.status().bits() != 0 {
        warn!("Boot status flags: 0x{=u8:02x}", engine.status().bits());
    }

    let mut slave_config = i2c_slave::Config::default();
    slave_config.addr = identity.address() as u16;
    let slave = I2cSlave::new(p.I2C0, p.PIN_21, p.PIN_20, Irqs, slave_config);
    info!(
        "I2C slave on SDA={} SCL={}",
        SLAVE_CONFIG.sda_pin, SLAVE_CONFIG.scl_pin
    );

    let rx_buf = RX_BUF.init([0u8; tasks::RX_BUFFER_SIZE]);

    interrupt::SWI_IRQ_1.set_priority(Priority::P2);
    let bus_spawner = EXECUTOR_BUS.start(interrupt::SWI_IRQ_1);
    bus_spawner.spawn(unwrap!(tasks::bus_task(slave, engine, rx_buf)));

    let led = StatusLed::new(Output::new(p.PIN_25, Level::High));

    watchdog.start(SLAVE_CONFIG.watchdog_timeout_ms);
    if watchdog.is_running() {
        info!("Watchdog armed, {} ms", SLAVE_CONFIG.watchdog_timeout_ms);
    }

    tasks::heartbeat_loop(
        led,
        watchdog,
        SLAVE_CONFIG.heartbeat,
        watchdog_reset,
        identity.address(),
    )
    .await
}
