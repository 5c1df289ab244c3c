//! Desk commands shared by the menu and replay modes
//!
//! A [`DeskCommand`] is one request against the ticket service. Replay
//! scripts spell them as JSON objects, one per line:
//!
//! ```text
//! {"op": "add", "id": 1, "customer_name": "Alice", "issue": "printer jam", "priority": 1}
//! {"op": "process_priority"}
//! ```

use crate::cli::output::OutputFormatter;
use crate::core::{Priority, Ticket, TicketId};
use crate::dispatch::QueueKind;
use crate::error::{DeskError, Result};
use crate::service::{DeskSnapshot, TicketService, UndoOutcome};
use crate::storage::TicketRepository;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A request against the ticket service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DeskCommand {
    Add {
        id: TicketId,
        customer_name: String,
        issue: String,
        priority: Priority,
    },
    Delete {
        id: TicketId,
    },
    Find {
        id: TicketId,
    },
    List,
    Undo,
    ProcessPriority,
    ProcessRoundRobin,
    Status,
}

/// What a command produced
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum CommandOutcome {
    Added {
        ticket: Arc<Ticket>,
    },
    Deleted {
        ticket_id: TicketId,
        removed: bool,
    },
    Found {
        ticket_id: TicketId,
        ticket: Option<Arc<Ticket>>,
    },
    Listed {
        tickets: Vec<Arc<Ticket>>,
    },
    Undone {
        result: UndoOutcome,
    },
    Dispatched {
        queue: QueueKind,
        ticket: Option<Arc<Ticket>>,
    },
    Status {
        snapshot: DeskSnapshot,
    },
}

/// Parse one script line; blank lines and `#` comments yield `None`
pub fn parse_line(line_number: usize, line: &str) -> Result<Option<DeskCommand>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    serde_json::from_str(line)
        .map(Some)
        .map_err(|e| DeskError::ParseError {
            line: line_number,
            message: e.to_string(),
        })
}

/// Run a command against the service
///
/// Only `Add` can fail; every other outcome is a value.
pub fn execute<R: TicketRepository>(
    service: &TicketService<R>,
    command: DeskCommand,
) -> Result<CommandOutcome> {
    let outcome = match command {
        DeskCommand::Add {
            id,
            customer_name,
            issue,
            priority,
        } => CommandOutcome::Added {
            ticket: service.add_ticket(id, customer_name, issue, priority)?,
        },
        DeskCommand::Delete { id } => CommandOutcome::Deleted {
            ticket_id: id,
            removed: service.delete_ticket(id),
        },
        DeskCommand::Find { id } => CommandOutcome::Found {
            ticket_id: id,
            ticket: service.find_ticket(id),
        },
        DeskCommand::List => CommandOutcome::Listed {
            tickets: service.list_tickets(),
        },
        DeskCommand::Undo => CommandOutcome::Undone {
            result: service.undo_last_add(),
        },
        DeskCommand::ProcessPriority => CommandOutcome::Dispatched {
            queue: QueueKind::Priority,
            ticket: service.process_priority(),
        },
        DeskCommand::ProcessRoundRobin => CommandOutcome::Dispatched {
            queue: QueueKind::RoundRobin,
            ticket: service.process_round_robin(),
        },
        DeskCommand::Status => CommandOutcome::Status {
            snapshot: service.snapshot(),
        },
    };
    Ok(outcome)
}

impl CommandOutcome {
    /// Print the outcome as text, or as one JSON line in JSON mode
    pub fn render(&self, output: &OutputFormatter) -> Result<()> {
        if output.is_json() {
            return output.print_json(self);
        }

        match self {
            Self::Added { ticket } => {
                output.success("Ticket added successfully.");
                output.info(&ticket.to_string());
            },
            Self::Deleted { ticket_id, removed } => {
                if *removed {
                    output.success(&format!("Deleted ticket {ticket_id}"));
                } else {
                    output.warning(&format!("Ticket {ticket_id} not found"));
                }
            },
            Self::Found { ticket_id, ticket } => match ticket {
                Some(ticket) => output.info(&ticket.detail_line()),
                None => output.warning(&format!("Ticket {ticket_id} not found")),
            },
            Self::Listed { tickets } => {
                if tickets.is_empty() {
                    output.info("No tickets found.");
                }
                for ticket in tickets {
                    output.info(&ticket.to_string());
                }
            },
            Self::Undone { result } => match result {
                UndoOutcome::Removed(id) => {
                    output.success(&format!("Undo successful. Ticket {id} removed."));
                },
                UndoOutcome::NothingToUndo => output.warning("Nothing to undo"),
            },
            Self::Dispatched { queue, ticket } => match (ticket, queue) {
                (Some(ticket), _) => output.info(&format!("Processing: {ticket}")),
                (None, QueueKind::Priority) => output.warning("No tickets to process"),
                (None, QueueKind::RoundRobin) => {
                    output.warning("No tickets to process (round robin)");
                },
            },
            Self::Status { snapshot } => {
                output.header("Desk status");
                output.info(&format!("  Live tickets:        {}", snapshot.live_tickets));
                output.info(&format!("  Undo depth:          {}", snapshot.undo_depth));
                output.info(&format!("  Urgent pending:      {}", snapshot.urgent_pending));
                output.info(&format!("  Normal pending:      {}", snapshot.normal_pending));
                output.info(&format!(
                    "  Round robin pending: {}",
                    snapshot.round_robin_pending
                ));
            },
        }
        Ok(())
    }
}
