//! Interrupt-safe handle to the diagnostic queue
//!
//! The bus handler (interrupt priority) enqueues and the main loop
//! (thread mode) dequeues. Every access runs inside a critical section
//! that covers O(1) work, so the producer never waits on slow output.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::message::DiagnosticMessage;
use super::queue::DiagnosticQueue;

/// Shared diagnostic queue, suitable for a `static`
pub struct DiagnosticChannel {
    queue: Mutex<CriticalSectionRawMutex, RefCell<DiagnosticQueue>>,
}

impl Default for DiagnosticChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticChannel {
    /// Create an empty channel
    pub const fn new() -> Self {
        Self {
            queue: Mutex::new(RefCell::new(DiagnosticQueue::new())),
        }
    }

    /// Queue a record; `false` if it was dropped because the queue is full
    pub fn send(&self, message: DiagnosticMessage) -> bool {
        self.queue.lock(|q| q.borrow_mut().enqueue(message))
    }

    /// Take the oldest record, if any
    pub fn receive(&self) -> Option<DiagnosticMessage> {
        self.queue.lock(|q| q.borrow_mut().dequeue())
    }

    /// Number of queued records
    pub fn len(&self) -> usize {
        self.queue.lock(|q| q.borrow().len())
    }

    /// Check whether no record is queued
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the number of records dropped since the last call
    pub fn take_dropped(&self) -> u32 {
        self.queue.lock(|q| q.borrow_mut().take_dropped())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::QUEUE_SIZE;

    #[test]
    fn test_send_receive() {
        let channel = DiagnosticChannel::new();
        assert!(channel.is_empty());

        assert!(channel.send(DiagnosticMessage::from_args(format_args!("hello"))));
        assert_eq!(channel.len(), 1);

        let msg = channel.receive().unwrap();
        assert_eq!(msg.as_str(), "hello");
        assert!(channel.receive().is_none());
    }

    #[test]
    fn test_overflow_is_counted() {
        let channel = DiagnosticChannel::new();
        for _ in 0..QUEUE_SIZE + 3 {
            channel.send(DiagnosticMessage::from_args(format_args!("x")));
        }
        assert_eq!(channel.len(), QUEUE_SIZE);
        assert_eq!(channel.take_dropped(), 3);
    }

    #[test]
    fn test_static_channel() {
        static CHANNEL: DiagnosticChannel = DiagnosticChannel::new();
        CHANNEL.send(DiagnosticMessage::from_args(format_args!("boot")));
        assert_eq!(CHANNEL.receive().unwrap().as_str(), "boot");
    }
}
