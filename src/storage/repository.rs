use crate::core::{Ticket, TicketId};
use std::sync::Arc;

/// Repository trait for the ticket registry
///
/// This trait defines the interface the ticket service uses to own live
/// tickets, allowing for different registry implementations. All
/// operations are in-memory and infallible.
#[cfg_attr(test, mockall::automock)]
pub trait TicketRepository: Send + Sync {
    /// Stores a ticket, returning the entry it replaced if the id was taken
    fn insert(&mut self, ticket: Arc<Ticket>) -> Option<Arc<Ticket>>;

    /// Removes a ticket by ID, reporting whether anything was removed
    fn delete(&mut self, id: TicketId) -> bool;

    /// Looks up a live ticket by ID
    fn find(&self, id: TicketId) -> Option<Arc<Ticket>>;

    /// All live tickets, most recently inserted first
    fn list_all(&self) -> Vec<Arc<Ticket>>;

    /// Checks if a ticket is live
    fn contains(&self, id: TicketId) -> bool;

    /// Number of live tickets
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Priority;
    use crate::storage::InMemoryRegistry;

    fn create_test_ticket(id: i64) -> Arc<Ticket> {
        Arc::new(Ticket::new(
            TicketId::new(id),
            format!("Customer {id}"),
            format!("Issue {id}"),
            Priority::new(3),
        ))
    }

    fn exercise(repo: &mut dyn TicketRepository) {
        assert!(repo.is_empty());

        repo.insert(create_test_ticket(1));
        repo.insert(create_test_ticket(2));
        assert_eq!(repo.len(), 2);
        assert!(repo.contains(TicketId::new(1)));

        assert!(repo.delete(TicketId::new(1)));
        assert!(!repo.contains(TicketId::new(1)));
        assert!(repo.find(TicketId::new(2)).is_some());
    }

    #[test]
    fn test_repository_through_trait_object() {
        let mut registry = InMemoryRegistry::new();
        exercise(&mut registry);
        assert_eq!(registry.list_all().len(), 1);
    }

    #[test]
    fn test_mock_repository_is_empty_default() {
        let mut mock = MockTicketRepository::new();
        mock.expect_len().times(1).return_const(0usize);
        mock.expect_is_empty().times(1).return_const(true);

        assert!(mock.is_empty());
        assert_eq!(mock.len(), 0);
    }
}
