/**
 * Real-time Event Broadcasting
 *
 * One-to-many publish primitive mirroring every task mutation to all
 * currently connected sessions.
 *
 * # Broadcasting
 *
 * Events fan out over `tokio::sync::broadcast`: every subscriber gets a
 * copy of each event published while it is subscribed. Publish is
 * fire-and-forget; it neither blocks on nor reports failures from any
 * individual recipient, and there is no durable log or replay. Sessions
 * that are offline at publish time simply miss the event.
 *
 * # Sequence Numbers
 *
 * Each published event is stamped with a process-local, monotonically
 * increasing sequence number (starting at 1). Clients use it to detect
 * gaps (a lagged receiver, a dropped connection) and trigger a full
 * re-fetch instead of trusting an incomplete stream.
 */
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::shared::event::TaskEvent;

/// Default channel capacity; plenty for a task board
const CHANNEL_CAPACITY: usize = 1000;

/// A broadcast event stamped with its sequence number
#[derive(Debug, Clone, PartialEq)]
pub struct SequencedEvent {
    /// Monotonic sequence number, 1-based, process-local
    pub seq: u64,
    /// The task mutation event
    pub event: TaskEvent,
}

/// Publisher side of the broadcast channel
///
/// Cloneable; every handler that completes a mutation publishes through
/// a clone of this.
#[derive(Clone)]
pub struct TaskEventPublisher {
    tx: broadcast::Sender<SequencedEvent>,
    seq: Arc<AtomicU64>,
}

impl TaskEventPublisher {
    /// Create a publisher with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(CHANNEL_CAPACITY)
    }

    /// Create a publisher with an explicit channel capacity
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self {
            tx,
            seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Publish an event to every currently subscribed session
    ///
    /// Returns the number of subscribers that received the event. Zero
    /// subscribers is not an error; the event is simply dropped.
    pub fn publish(&self, event: TaskEvent) -> usize {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        match self.tx.send(SequencedEvent { seq, event }) {
            Ok(subscriber_count) => {
                tracing::info!(
                    "[Realtime] Event {} broadcast to {} subscribers",
                    seq,
                    subscriber_count
                );
                subscriber_count
            }
            Err(_) => {
                tracing::debug!("[Realtime] No subscribers for event {}", seq);
                0
            }
        }
    }

    /// Subscribe to events published from now on
    pub fn subscribe(&self) -> broadcast::Receiver<SequencedEvent> {
        self.tx.subscribe()
    }

    /// Number of live subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Sequence number of the most recently published event
    pub fn last_seq(&self) -> u64 {
        self.seq.load(Ordering::SeqCst)
    }
}

impl Default for TaskEventPublisher {
    fn default() -> Self {
        Self::new()
    }
}
