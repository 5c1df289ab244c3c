use super::DispatchQueue;
use crate::core::Ticket;
use std::collections::VecDeque;
use std::sync::Arc;

/// Arrival-order dispatcher
///
/// Hands tickets out in exactly the order they were enqueued, with no
/// regard for priority.
#[derive(Debug, Default)]
pub struct RoundRobinDispatcher {
    queue: VecDeque<Arc<Ticket>>,
}

impl RoundRobinDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, ticket: Arc<Ticket>) {
        self.queue.push_back(ticket);
    }

    pub fn dequeue_next(&mut self) -> Option<Arc<Ticket>> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl DispatchQueue for RoundRobinDispatcher {
    fn enqueue(&mut self, ticket: Arc<Ticket>) {
        Self::enqueue(self, ticket);
    }

    fn dequeue(&mut self) -> Option<Arc<Ticket>> {
        self.dequeue_next()
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}
