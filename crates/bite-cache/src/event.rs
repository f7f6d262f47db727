//! Storage change notifications.
//!
//! Mirrors the browser `storage` event: a listener learns that a key may have
//! changed and re-reads it. Nothing is locked and the last write wins.

use std::sync::mpsc::{channel, Receiver, Sender};

/// Notification that the value under `key` was written or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StorageEvent {
    /// The key that changed.
    pub key: String,
}

impl StorageEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// Fan-out list of subscribers.
#[derive(Debug, Default)]
pub(crate) struct Subscribers {
    senders: Vec<Sender<StorageEvent>>,
}

impl Subscribers {
    pub(crate) fn subscribe(&mut self) -> Receiver<StorageEvent> {
        let (tx, rx) = channel();
        self.senders.push(tx);
        rx
    }

    /// Send to every live subscriber, dropping the ones whose receiver is gone.
    pub(crate) fn notify(&mut self, key: &str) {
        self.senders
            .retain(|tx| tx.send(StorageEvent::new(key)).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.senders.len()
    }
}
