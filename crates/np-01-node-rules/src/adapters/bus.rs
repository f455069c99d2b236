//! In-memory audit event bus.
//!
//! Backed by `tokio::sync::broadcast` for multi-consumer semantics: the
//! admin UI, monitoring, and tests can all subscribe independently. Suitable
//! for single-process deployments; a distributed setup would implement
//! [`NodeEventPublisher`] over an external broker instead.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::broadcast;
use tracing::debug;

use crate::ports::{NodeEventPublisher, NodeRulesEvent};

/// Default broadcast channel capacity.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

/// Broadcast-backed implementation of the event publishing port.
pub struct InMemoryNodeEventBus {
    sender: broadcast::Sender<NodeRulesEvent>,
    events_published: AtomicU64,
    capacity: usize,
}

impl InMemoryNodeEventBus {
    /// Create a bus with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Create a bus with a specific channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self {
            sender,
            events_published: AtomicU64::new(0),
            capacity,
        }
    }

    /// Subscribe to the audit stream.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<NodeRulesEvent> {
        debug!("new node rules event subscription");
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Total events published since creation.
    pub fn events_published(&self) -> u64 {
        self.events_published.load(Ordering::Relaxed)
    }

    /// The channel capacity.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for InMemoryNodeEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl NodeEventPublisher for InMemoryNodeEventBus {
    fn publish(&self, event: NodeRulesEvent) -> Result<(), String> {
        self.events_published.fetch_add(1, Ordering::Relaxed);
        // A send error only means there are no subscribers right now; the
        // audit stream is best-effort, not a durable log.
        let receivers = self.sender.send(event).unwrap_or(0);
        debug!(receivers, "node rules event published");
        Ok(())
    }
}

/// Publisher that drops every event. For tests and minimal wirings.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoOpEventPublisher;

impl NodeEventPublisher for NoOpEventPublisher {
    fn publish(&self, _event: NodeRulesEvent) -> Result<(), String> {
        Ok(())
    }
}
