//! Change notifications so dependent views can re-render.

use std::sync::{Mutex, PoisonError};

use crossbeam_channel::{Receiver, Sender};
use payday_core::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    LoggedIn(User),
    LoggedOut,
}

/// Fan-out list of subscriber channels. Disconnected receivers are dropped on the next emit.
#[derive(Default)]
pub(crate) struct Subscribers {
    senders: Mutex<Vec<Sender<SessionEvent>>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&self) -> Receiver<SessionEvent> {
        let (tx, rx) = crossbeam_channel::unbounded();
        self.senders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(tx);
        rx
    }

    pub(crate) fn emit(&self, event: SessionEvent) {
        let mut senders = self.senders.lock().unwrap_or_else(PoisonError::into_inner);
        senders.retain(|tx| tx.send(event.clone()).is_ok());
    }

    pub(crate) fn len(&self) -> usize {
        self.senders
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}
