//! Event feed for desk mutations
//!
//! Hosts that render several views of the desk subscribe here to learn
//! about changes without polling. Publishing never blocks and never fails
//! the operation that triggered it; with no subscribers events are dropped.

use crate::config::MAX_EVENT_CAPACITY;
use crate::core::{Ticket, TicketId};
use crate::dispatch::QueueKind;
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;

/// Events emitted by the ticket service
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum DeskEvent {
    TicketAdded {
        ticket: Arc<Ticket>,
        /// Registry entry displaced under the replace policy
        replaced: bool,
    },
    TicketDeleted {
        ticket_id: TicketId,
    },
    AddUndone {
        ticket_id: TicketId,
        /// Whether the ticket was still live when the undo ran
        was_live: bool,
    },
    TicketDispatched {
        queue: QueueKind,
        ticket: Arc<Ticket>,
    },
}

/// Broadcast publisher owned by a ticket service
pub struct EventFeed {
    sender: broadcast::Sender<DeskEvent>,
}

impl std::fmt::Debug for EventFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventFeed")
            .field("sender", &"broadcast::Sender<DeskEvent>")
            .field("subscribers", &self.sender.receiver_count())
            .finish()
    }
}

impl EventFeed {
    /// Create a feed buffering up to `capacity` events per subscriber
    ///
    /// The capacity is clamped to `1..=MAX_EVENT_CAPACITY`.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.clamp(1, MAX_EVENT_CAPACITY));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DeskEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: DeskEvent) {
        // No receivers is not an error for the desk
        let _ = self.sender.send(event);
    }
}
