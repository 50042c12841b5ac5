//! Shared state between the bus task and the main loop

use interconnect_core::DiagnosticChannel;

/// Diagnostic records from the protocol engine, drained by the main loop
pub static DIAGNOSTICS: DiagnosticChannel = DiagnosticChannel::new();
