use super::TicketRepository;
use crate::core::{Ticket, TicketId};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

#[derive(Debug)]
struct Entry {
    seq: u64,
    ticket: Arc<Ticket>,
}

/// Hash-map registry with an insertion-order index
///
/// Lookups and deletes are O(1). Listing walks `order` backwards so the
/// most recently inserted ticket comes first. Re-inserting an existing id
/// replaces the entry and moves it to the front.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    entries: HashMap<TicketId, Entry>,
    order: BTreeMap<u64, TicketId>,
    next_seq: u64,
}

impl InMemoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TicketRepository for InMemoryRegistry {
    fn insert(&mut self, ticket: Arc<Ticket>) -> Option<Arc<Ticket>> {
        let id = ticket.id();
        let seq = self.next_seq;
        self.next_seq += 1;

        self.order.insert(seq, id);
        let previous = self.entries.insert(id, Entry { seq, ticket })?;
        self.order.remove(&previous.seq);
        Some(previous.ticket)
    }

    fn delete(&mut self, id: TicketId) -> bool {
        match self.entries.remove(&id) {
            Some(entry) => {
                self.order.remove(&entry.seq);
                true
            },
            None => false,
        }
    }

    fn find(&self, id: TicketId) -> Option<Arc<Ticket>> {
        self.entries.get(&id).map(|entry| Arc::clone(&entry.ticket))
    }

    fn list_all(&self) -> Vec<Arc<Ticket>> {
        self.order
            .values()
            .rev()
            .filter_map(|id| self.find(*id))
            .collect()
    }

    fn contains(&self, id: TicketId) -> bool {
        self.entries.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
