//! Bus transaction state machine
//!
//! Every transfer starts in `Idle`. The first written byte is the address
//! (command code); every later written byte is a data byte that triggers
//! the command. Read requests can arrive at any point but never complete
//! the address phase, so a read from `Idle` stays in `Idle`. A Stop or
//! Restart always returns to `Idle`.

use interconnect_hal::SlaveEvent;

/// Transaction states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransactionState {
    /// Between transactions
    #[default]
    Idle,
    /// Address byte received
    AddressCaptured,
    /// At least one data byte dispatched
    DataDispatched,
    /// Answering a read request after the address byte
    Responding,
}

/// What the engine must do for an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransactionAction {
    /// Latch the byte as the register address
    CaptureAddress(u8),
    /// Store the byte and run the write path
    DispatchWrite(u8),
    /// Run the read path and return one byte
    Respond,
    /// Close the transaction
    Reset,
}

impl TransactionState {
    /// Process an event and return the next state with the action to run
    pub fn transition(self, event: SlaveEvent) -> (Self, TransactionAction) {
        use TransactionState::*;

        match (self, event) {
            (Idle, SlaveEvent::Receive(byte)) => {
                (AddressCaptured, TransactionAction::CaptureAddress(byte))
            }
            (AddressCaptured | DataDispatched | Responding, SlaveEvent::Receive(byte)) => {
                (DataDispatched, TransactionAction::DispatchWrite(byte))
            }
            (Idle, SlaveEvent::Request) => (Idle, TransactionAction::Respond),
            (_, SlaveEvent::Request) => (Responding, TransactionAction::Respond),
            (_, SlaveEvent::Finish) => (Idle, TransactionAction::Reset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_byte_is_address() {
        let (state, action) = TransactionState::Idle.transition(SlaveEvent::Receive(11));
        assert_eq!(state, TransactionState::AddressCaptured);
        assert_eq!(action, TransactionAction::CaptureAddress(11));
    }

    #[test]
    fn test_every_following_byte_dispatches() {
        let (state, _) = TransactionState::Idle.transition(SlaveEvent::Receive(11));
        let (state, action) = state.transition(SlaveEvent::Receive(5));
        assert_eq!(state, TransactionState::DataDispatched);
        assert_eq!(action, TransactionAction::DispatchWrite(5));

        let (state, action) = state.transition(SlaveEvent::Receive(6));
        assert_eq!(state, TransactionState::DataDispatched);
        assert_eq!(action, TransactionAction::DispatchWrite(6));
    }

    #[test]
    fn test_request_from_any_state() {
        let states = [
            TransactionState::AddressCaptured,
            TransactionState::DataDispatched,
            TransactionState::Responding,
        ];

        for state in states {
            let (next, action) = state.transition(SlaveEvent::Request);
            assert_eq!(next, TransactionState::Responding);
            assert_eq!(action, TransactionAction::Respond);
        }
    }

    #[test]
    fn test_finish_returns_to_idle() {
        let states = [
            TransactionState::Idle,
            TransactionState::AddressCaptured,
            TransactionState::DataDispatched,
            TransactionState::Responding,
        ];

        for state in states {
            let (next, action) = state.transition(SlaveEvent::Finish);
            assert_eq!(next, TransactionState::Idle);
            assert_eq!(action, TransactionAction::Reset);
        }
    }

    #[test]
    fn test_read_from_idle_keeps_address_phase_open() {
        let (state, action) = TransactionState::Idle.transition(SlaveEvent::Request);
        assert_eq!(state, TransactionState::Idle);
        assert_eq!(action, TransactionAction::Respond);

        let (state, action) = state.transition(SlaveEvent::Request);
        assert_eq!(state, TransactionState::Idle);
        assert_eq!(action, TransactionAction::Respond);

        let (state, action) = state.transition(SlaveEvent::Receive(11));
        assert_eq!(state, TransactionState::AddressCaptured);
        assert_eq!(action, TransactionAction::CaptureAddress(11));
    }

    #[test]
    fn test_write_then_read_flow() {
        let mut state = TransactionState::default();
        let events = [
            SlaveEvent::Receive(15),
            SlaveEvent::Receive(3),
            SlaveEvent::Request,
            SlaveEvent::Finish,
        ];
        let expected = [
            TransactionState::AddressCaptured,
            TransactionState::DataDispatched,
            TransactionState::Responding,
            TransactionState::Idle,
        ];

        for (event, want) in events.into_iter().zip(expected) {
            state = state.transition(event).0;
            assert_eq!(state, want);
        }
    }
}
