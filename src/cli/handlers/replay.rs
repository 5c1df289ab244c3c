//! Handler for the `replay` command
//!
//! Executes a JSON Lines script against a fresh desk. Rejected adds are
//! reported and skipped; a malformed line stops the replay.

use crate::cli::output::OutputFormatter;
use crate::cli::script::{execute, parse_line};
use crate::error::Result;
use crate::service::TicketService;
use crate::storage::TicketRepository;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Counts reported at the end of a replay
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    pub executed: usize,
    pub rejected: usize,
}

/// Handler for the `replay` command
///
/// # Arguments
///
/// * `script` - Path to the script, or `-` for stdin
/// * `service` - Desk the commands run against
/// * `output` - Output formatter for displaying results
///
/// # Errors
///
/// Returns an error if:
/// - The script cannot be read
/// - A line is not a valid desk command
pub fn handle_replay_command<R: TicketRepository>(
    script: &str,
    service: &TicketService<R>,
    output: &OutputFormatter,
) -> Result<ReplaySummary> {
    let summary = if script == "-" {
        replay(io::stdin().lock(), service, output)?
    } else {
        replay(BufReader::new(File::open(script)?), service, output)?
    };

    if !output.is_json() {
        output.info(&format!(
            "\nReplayed {} command(s), {} rejected",
            summary.executed, summary.rejected
        ));
    }
    Ok(summary)
}

/// Run every command from `reader`
pub fn replay<B: BufRead, R: TicketRepository>(
    reader: B,
    service: &TicketService<R>,
    output: &OutputFormatter,
) -> Result<ReplaySummary> {
    let mut summary = ReplaySummary::default();

    for (index, line) in reader.lines().enumerate() {
        let line_number = index + 1;
        let Some(command) = parse_line(line_number, &line?)? else {
            continue;
        };

        tracing::debug!(line = line_number, ?command, "Replaying command");
        match execute(service, command) {
            Ok(outcome) => {
                summary.executed += 1;
                outcome.render(output)?;
            },
            Err(e) if e.is_recoverable() => {
                summary.rejected += 1;
                if output.is_json() {
                    output.print_json(&serde_json::json!({
                        "outcome": "rejected",
                        "line": line_number,
                        "error": e.to_string(),
                    }))?;
                } else {
                    output.error(&format!("line {line_number}: {}", e.user_message()));
                }
            },
            Err(e) => return Err(e),
        }
    }

    Ok(summary)
}
