//! Ticket registry
//!
//! The registry is the single owner of ticket liveness: a ticket exists if
//! and only if the registry holds it. Other desk structures keep shared
//! references that may outlive a registry entry.

mod memory;
mod repository;

pub use memory::InMemoryRegistry;
pub use repository::TicketRepository;

#[cfg(test)]
pub use repository::MockTicketRepository;
