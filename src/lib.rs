//! support-desk - An in-memory customer support ticket tracker
//!
//! This crate keeps several views over one set of support tickets:
//! - A registry of live tickets, keyed by caller-supplied id
//! - An undo history that can reverse the most recent add
//! - A two-tier priority dispatcher (urgent before normal)
//! - A round-robin dispatcher in arrival order
//!
//! All four are owned by [`TicketService`], which fans every add out to
//! each of them under one exclusion scope.

// Allow missing error documentation for internal implementations
#![allow(clippy::missing_errors_doc)]
// Allow some pedantic lints that don't improve code quality
#![allow(clippy::option_if_let_else)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::module_name_repetitions)]

//! # Stale References
//!
//! The registry is the only source of truth for whether a ticket exists.
//! Deleting or undoing a ticket removes it from the registry but not from
//! the dispatch queues, which keep shared references and hand them out
//! unchanged. Hosts that care should check [`TicketService::find_ticket`]
//! before working a dispatched ticket.
//!
//! # Example
//!
//! ```rust
//! use support_desk::{Priority, TicketId, TicketService};
//!
//! let desk = TicketService::default();
//! desk.add_ticket(TicketId::new(1), "Alice", "printer jam", Priority::URGENT)?;
//! desk.add_ticket(TicketId::new(2), "Bob", "wifi down", Priority::new(3))?;
//!
//! assert_eq!(desk.process_priority().map(|t| t.id()), Some(TicketId::new(1)));
//! assert_eq!(desk.process_round_robin().map(|t| t.id()), Some(TicketId::new(1)));
//! # Ok::<(), support_desk::DeskError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod dispatch;
pub mod error;
pub mod events;
pub mod interactive;
pub mod service;
pub mod storage;
pub mod undo;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use crate::core::{Priority, Ticket, TicketId, Tier};
pub use error::{DeskError, Result};
pub use service::{DeskSnapshot, TicketService, UndoOutcome};
