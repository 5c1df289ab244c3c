//! Test utilities for support-desk
//!
//! Common fixtures shared by the unit tests across the crate.

#![cfg(test)]

use crate::config::DeskConfig;
use crate::core::{Priority, Ticket, TicketId};
use crate::service::TicketService;
use std::sync::Arc;

/// The sample tickets added by [`add_sample_tickets`], in add order
pub const SAMPLE_TICKETS: [(i64, &str, &str, i32); 4] = [
    (1, "Alice", "printer jam", 1),
    (2, "Bob", "wifi down", 3),
    (3, "Carol", "password reset", 1),
    (4, "Dave", "slow laptop", 2),
];

/// Create a service with custom desk settings
pub fn service_with(settings: DeskConfig) -> TicketService {
    TicketService::new(settings)
}

/// Add [`SAMPLE_TICKETS`] to a service
pub fn add_sample_tickets(service: &TicketService) -> Vec<Arc<Ticket>> {
    SAMPLE_TICKETS
        .iter()
        .map(|&(id, name, issue, priority)| {
            service
                .add_ticket(TicketId::new(id), name, issue, Priority::new(priority))
                .expect("Failed to add sample ticket")
        })
        .collect()
}

/// Extract raw ids, keeping order
pub fn ids_of(tickets: &[Arc<Ticket>]) -> Vec<i64> {
    tickets.iter().map(|t| t.id().value()).collect()
}

/// Assert that two tickets carry the same payload (ignoring timestamps)
pub fn assert_tickets_equal(left: &Ticket, right: &Ticket) {
    assert_eq!(left.id(), right.id(), "Ticket IDs don't match");
    assert_eq!(
        left.customer_name(),
        right.customer_name(),
        "Customer names don't match"
    );
    assert_eq!(left.issue(), right.issue(), "Ticket issues don't match");
    assert_eq!(
        left.priority(),
        right.priority(),
        "Ticket priorities don't match"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_tickets() {
        let service = TicketService::default();
        let added = add_sample_tickets(&service);
        assert_eq!(ids_of(&added), vec![1, 2, 3, 4]);

        let listed = service.list_tickets();
        assert_eq!(ids_of(&listed), vec![4, 3, 2, 1]);
        assert_tickets_equal(&listed[3], &added[0]);
    }
}
