use super::DispatchQueue;
use crate::core::{Ticket, Tier};
use std::collections::VecDeque;
use std::sync::Arc;

/// Strict two-tier dispatcher
///
/// Priority 1 tickets go to the urgent lane, everything else to the normal
/// lane. The urgent lane always drains first; within a lane order is FIFO.
#[derive(Debug, Default)]
pub struct PriorityDispatcher {
    urgent: VecDeque<Arc<Ticket>>,
    normal: VecDeque<Arc<Ticket>>,
}

impl PriorityDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&mut self, ticket: Arc<Ticket>) {
        match ticket.tier() {
            Tier::Urgent => self.urgent.push_back(ticket),
            Tier::Normal => self.normal.push_back(ticket),
        }
    }

    pub fn dequeue(&mut self) -> Option<Arc<Ticket>> {
        if let Some(ticket) = self.urgent.pop_front() {
            return Some(ticket);
        }
        self.normal.pop_front()
    }

    #[must_use]
    pub fn urgent_len(&self) -> usize {
        self.urgent.len()
    }

    #[must_use]
    pub fn normal_len(&self) -> usize {
        self.normal.len()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.urgent.len() + self.normal.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.urgent.is_empty() && self.normal.is_empty()
    }
}

impl DispatchQueue for PriorityDispatcher {
    fn enqueue(&mut self, ticket: Arc<Ticket>) {
        Self::enqueue(self, ticket);
    }

    fn dequeue(&mut self) -> Option<Arc<Ticket>> {
        Self::dequeue(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }
}
