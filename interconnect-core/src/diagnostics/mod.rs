//! Best-effort diagnostic messages
//!
//! The protocol engine describes every command it handles as a short text
//! record. Records are queued and printed later by the main loop; when the
//! queue is full they are dropped.

pub mod channel;
pub mod message;
pub mod queue;

pub use channel::DiagnosticChannel;
pub use message::{DiagnosticMessage, MESSAGE_SIZE};
pub use queue::{DiagnosticQueue, QUEUE_SIZE};

/// Format a [`DiagnosticMessage`] in place
#[macro_export]
macro_rules! diag {
    ($($arg:tt)*) => {
        $crate::diagnostics::DiagnosticMessage::from_args(format_args!($($arg)*))
    };
}
