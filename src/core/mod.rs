//! Core domain types for support-desk
//!
//! A [`Ticket`] is created once by the ticket service and never mutated
//! afterwards. Every structure of the desk shares the same ticket through
//! an `Arc`, so a ticket removed from the registry stays readable from any
//! dispatch queue still holding it.

mod ticket;

pub use ticket::{Priority, Ticket, TicketId, Tier};
