//! I2C slave bus task
//!
//! Turns the peripheral's transfer-level results into per-byte engine
//! events: every written byte is a receive, every byte the master clocks
//! out is a request, and the end of the transfer is a finish.

use defmt::*;
use embassy_rp::i2c_slave::{Command, Error, I2cSlave, ReadStatus};
use embassy_rp::peripherals::I2C0;
use interconnect_core::ProtocolEngine;
use interconnect_hal::SlaveEvent;
use interconnect_hal_rp2040::Rp2040Gpio;

/// Longest write accepted in one transfer
pub const RX_BUFFER_SIZE: usize = 32;

pub type SlaveEngine = ProtocolEngine<'static, Rp2040Gpio>;

/// Bus task - owns the engine for the life of the firmware
#[embassy_executor::task]
pub async fn bus_task(
    mut slave: I2cSlave<'static, I2C0>,
    mut engine: SlaveEngine,
    buf: &'static mut [u8; RX_BUFFER_SIZE],
) {
    info!("Bus task started");

    loop {
        match slave.listen(&mut buf[..]).await {
            Ok(Command::Write(len)) => {
                receive(&mut engine, &buf[..len]);
            }
            Ok(Command::WriteRead(len)) => {
                receive(&mut engine, &buf[..len]);
                respond(&mut slave, &mut engine).await;
            }
            Ok(Command::Read) => {
                respond(&mut slave, &mut engine).await;
            }
            Ok(Command::GeneralCall(len)) => {
                warn!("General call ignored ({} bytes)", len);
            }
            Err(Error::PartialWrite(len)) => {
                warn!("Write longer than {} bytes truncated", RX_BUFFER_SIZE);
                receive(&mut engine, &buf[..len]);
            }
            Err(e) => {
                warn!("I2C slave error: {}", e);
            }
        }

        engine.handle(SlaveEvent::Finish);
    }
}

fn receive(engine: &mut SlaveEngine, bytes: &[u8]) {
    for &byte in bytes {
        engine.handle(SlaveEvent::Receive(byte));
    }
}

/// Answer read requests one byte at a time until the master stops
async fn respond(slave: &mut I2cSlave<'static, I2C0>, engine: &mut SlaveEngine) {
    loop {
        let byte = engine.handle(SlaveEvent::Request).unwrap_or_default();

        match slave.respond_to_read(&[byte]).await {
            Ok(ReadStatus::NeedMoreBytes) => continue,
            Ok(ReadStatus::Done) => break,
            Ok(ReadStatus::LeftoverBytes(n)) => {
                trace!("Read ended with {} byte(s) unsent", n);
                break;
            }
            Err(e) => {
                warn!("I2C read error: {}", e);
                break;
            }
        }
    }
}
