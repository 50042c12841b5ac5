//! Bounded ring buffer of diagnostic records

use super::message::DiagnosticMessage;

/// Number of records the queue holds
pub const QUEUE_SIZE: usize = 64;

const EMPTY_SLOT: DiagnosticMessage = DiagnosticMessage::EMPTY;

/// Fixed-capacity FIFO of diagnostic records
///
/// `head` is the next record to dequeue, `tail` the next free slot. Both
/// wrap at [`QUEUE_SIZE`]; `count` tells full from empty when they meet.
#[derive(Debug, Clone)]
pub struct DiagnosticQueue {
    messages: [DiagnosticMessage; QUEUE_SIZE],
    head: usize,
    tail: usize,
    count: usize,
    dropped: u32,
}

impl Default for DiagnosticQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl DiagnosticQueue {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self {
            messages: [EMPTY_SLOT; QUEUE_SIZE],
            head: 0,
            tail: 0,
            count: 0,
            dropped: 0,
        }
    }

    /// Append a record
    ///
    /// Returns `false` and leaves the queue untouched when it is full.
    pub fn enqueue(&mut self, message: DiagnosticMessage) -> bool {
        if self.count >= QUEUE_SIZE {
            self.dropped = self.dropped.saturating_add(1);
            return false;
        }
        self.messages[self.tail] = message;
        self.tail = (self.tail + 1) % QUEUE_SIZE;
        self.count += 1;
        true
    }

    /// Remove the oldest record, clearing its slot
    pub fn dequeue(&mut self) -> Option<DiagnosticMessage> {
        if self.count == 0 {
            return None;
        }
        let message = core::mem::take(&mut self.messages[self.head]);
        self.head = (self.head + 1) % QUEUE_SIZE;
        self.count -= 1;
        Some(message)
    }

    /// Number of queued records
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check whether no record is queued
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Take the number of records dropped since the last call
    pub fn take_dropped(&mut self) -> u32 {
        core::mem::take(&mut self.dropped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn msg(n: usize) -> DiagnosticMessage {
        DiagnosticMessage::from_args(format_args!("msg {}", n))
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = DiagnosticQueue::new();
        assert!(queue.enqueue(msg(1)));
        assert!(queue.enqueue(msg(2)));
        assert_eq!(queue.len(), 2);

        assert_eq!(queue.dequeue(), Some(msg(1)));
        assert_eq!(queue.dequeue(), Some(msg(2)));
        assert_eq!(queue.dequeue(), None);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_full_queue_rejects_without_mutation() {
        let mut queue = DiagnosticQueue::new();
        for i in 0..QUEUE_SIZE {
            assert!(queue.enqueue(msg(i)));
        }
        assert_eq!(queue.len(), QUEUE_SIZE);

        let head = queue.head;
        let tail = queue.tail;
        let before = queue.messages.clone();

        assert!(!queue.enqueue(msg(999)));
        assert_eq!(queue.head, head);
        assert_eq!(queue.tail, tail);
        assert_eq!(queue.messages, before);
        assert_eq!(queue.len(), QUEUE_SIZE);
        assert_eq!(queue.take_dropped(), 1);
        assert_eq!(queue.take_dropped(), 0);
    }

    #[test]
    fn test_wraparound() {
        let mut queue = DiagnosticQueue::new();
        for round in 0..3 {
            for i in 0..QUEUE_SIZE {
                assert!(queue.enqueue(msg(round * 100 + i)));
            }
            for i in 0..QUEUE_SIZE {
                assert_eq!(queue.dequeue(), Some(msg(round * 100 + i)));
            }
        }
        assert!(queue.is_empty());
    }

    #[test]
    fn test_dequeue_clears_slot() {
        let mut queue = DiagnosticQueue::new();
        queue.enqueue(msg(1));
        queue.dequeue();
        assert!(queue.messages[0].is_empty());
    }

    proptest! {
        #[test]
        fn prop_count_stays_bounded(ops in proptest::collection::vec(any::<bool>(), 0..400)) {
            let mut queue = DiagnosticQueue::new();
            let mut expected: usize = 0;
            for (i, push) in ops.into_iter().enumerate() {
                if push {
                    let accepted = queue.enqueue(msg(i));
                    prop_assert_eq!(accepted, expected < QUEUE_SIZE);
                    if accepted {
                        expected += 1;
                    }
                } else {
                    let got = queue.dequeue();
                    prop_assert_eq!(got.is_some(), expected > 0);
                    expected = expected.saturating_sub(1);
                }
                prop_assert!(queue.len() <= QUEUE_SIZE);
                prop_assert_eq!(queue.len(), expected);
            }
        }
    }
}
