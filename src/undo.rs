//! Undo history for ticket additions
//!
//! The history only remembers ids, newest last. It does not own tickets
//! and never checks the registry, so it may hand back an id that has
//! already been deleted.

use crate::core::TicketId;

#[derive(Debug, Default)]
pub struct UndoHistory {
    ids: Vec<TicketId>,
}

impl UndoHistory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Remember a successful add
    pub fn record(&mut self, id: TicketId) {
        self.ids.push(id);
    }

    /// Pop the most recently recorded id, `None` when there is nothing to undo
    pub fn undo_last(&mut self) -> Option<TicketId> {
        self.ids.pop()
    }

    #[must_use]
    pub fn peek(&self) -> Option<TicketId> {
        self.ids.last().copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
