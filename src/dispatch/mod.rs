//! Dispatch queues
//!
//! Queues decide which ticket gets worked on next. They hold shared,
//! non-owning references: deleting a ticket from the registry leaves it in
//! every queue it was enqueued into, and a dequeue hands it back as-is.

mod priority;
mod round_robin;

pub use priority::PriorityDispatcher;
pub use round_robin::RoundRobinDispatcher;

use crate::core::Ticket;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Common interface of the dispatch queues
pub trait DispatchQueue: Send {
    /// Add a ticket according to the queue's policy
    fn enqueue(&mut self, ticket: Arc<Ticket>);

    /// Take the next ticket, `None` when nothing is waiting
    fn dequeue(&mut self) -> Option<Arc<Ticket>>;

    /// Number of waiting tickets
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Identifies which dispatcher a ticket came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueKind {
    Priority,
    RoundRobin,
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Priority => write!(f, "priority"),
            Self::RoundRobin => write!(f, "round robin"),
        }
    }
}
