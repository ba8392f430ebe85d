//! Reset channel: an external signal that puts sessions back to the start.
//!
//! Any part of the frontend can publish a reset; every live session holds a
//! [`ResetSubscription`]. Dropping the subscription unsubscribes it.

use std::sync::{Arc, Mutex, PoisonError};

use crossbeam_channel::{unbounded, Receiver, Sender};

#[derive(Debug, Default)]
struct Subscribers {
    next_id: u64,
    senders: Vec<(u64, Sender<()>)>,
}

/// Shared publish side. Clones publish to the same subscribers.
#[derive(Debug, Clone, Default)]
pub struct ResetChannel {
    subscribers: Arc<Mutex<Subscribers>>,
}

impl ResetChannel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> ResetSubscription {
        let (tx, rx) = unbounded();
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let id = subscribers.next_id;
        subscribers.next_id += 1;
        subscribers.senders.push((id, tx));
        ResetSubscription {
            id,
            rx,
            subscribers: Arc::clone(&self.subscribers),
        }
    }

    /// Signal every subscriber. Returns how many were signalled.
    pub fn publish(&self) -> usize {
        let subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let delivered = subscribers
            .senders
            .iter()
            .filter(|(_, tx)| tx.send(()).is_ok())
            .count();
        tracing::debug!(target: "falcone::reset", delivered, "reset.published");
        delivered
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .senders
            .len()
    }
}

/// Receiving side held by one session.
#[derive(Debug)]
pub struct ResetSubscription {
    id: u64,
    rx: Receiver<()>,
    subscribers: Arc<Mutex<Subscribers>>,
}

impl ResetSubscription {
    pub fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }

    /// Consume all pending signals; true if there was at least one.
    pub fn drain(&self) -> bool {
        self.rx.try_iter().count() > 0
    }
}

impl Drop for ResetSubscription {
    fn drop(&mut self) {
        let mut subscribers = self
            .subscribers
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        subscribers.senders.retain(|(id, _)| *id != self.id);
    }
}
