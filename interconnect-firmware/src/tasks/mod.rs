//! Embassy async tasks
//!
//! The bus task owns the protocol engine and runs on the high-priority
//! interrupt executor. The heartbeat loop runs in thread mode.

pub mod bus;
pub mod heartbeat;

pub use bus::{bus_task, RX_BUFFER_SIZE};
pub use heartbeat::heartbeat_loop;
