//! Error types for support-desk
//!
//! Expected outcomes of desk operations (a missing ticket, an empty undo
//! history, an empty dispatch queue) are plain values and never show up
//! here. `DeskError` covers the failures that stop a request: rejected
//! adds, malformed input, and the I/O and configuration problems of the
//! binary that hosts the desk.

use crate::core::TicketId;
use thiserror::Error;

/// Result type alias for support-desk operations
pub type Result<T> = std::result::Result<T, DeskError>;

/// Main error type for support-desk
#[derive(Error, Debug)]
pub enum DeskError {
    /// A live ticket already uses this id
    #[error("Ticket {id} already exists")]
    DuplicateTicket { id: TicketId },

    /// Priority outside the accepted 1-5 range (strict mode only)
    #[error("Invalid priority {priority}: must be between 1 and 5")]
    InvalidPriority { priority: i32 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A replay script line could not be understood
    #[error("Parse error on line {line}: {message}")]
    ParseError { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Terminal interaction failed
    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),
}

impl DeskError {
    /// Message suitable for showing to a person at the terminal
    pub fn user_message(&self) -> String {
        match self {
            Self::DuplicateTicket { id } => {
                format!("A ticket with ID {id} is already open")
            },
            Self::Config(e) => format!("Failed to read config: {e}"),
            _ => self.to_string(),
        }
    }

    /// Hints for resolving the error
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::DuplicateTicket { id } => vec![
                format!("Delete ticket {id} first, or pick a different ID"),
                "Set desk.duplicate_policy = \"replace\" to overwrite existing tickets".to_string(),
            ],
            Self::InvalidPriority { .. } => vec![
                "Use 1 for urgent tickets and 2-5 for normal ones".to_string(),
                "Set desk.strict_priority = false to accept any priority".to_string(),
            ],
            Self::ParseError { .. } => vec![
                "Each line must be a JSON object with an \"op\" field".to_string(),
                "Lines starting with '#' are treated as comments".to_string(),
            ],
            Self::Config(_) => vec![
                "Check the config file syntax".to_string(),
                "Run 'support-desk config show' to inspect the effective settings".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether the session can carry on after this error
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::DuplicateTicket { .. } | Self::InvalidPriority { .. } | Self::InvalidInput(_)
        )
    }

    /// Whether the error came from loading configuration
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DeskError::DuplicateTicket { id: TicketId::new(7) };
        assert_eq!(err.to_string(), "Ticket 7 already exists");

        let err = DeskError::ParseError {
            line: 3,
            message: "missing field `id`".to_string(),
        };
        assert_eq!(err.to_string(), "Parse error on line 3: missing field `id`");
    }

    #[test]
    fn test_recoverable_errors() {
        assert!(DeskError::InvalidPriority { priority: 9 }.is_recoverable());
        assert!(DeskError::DuplicateTicket { id: TicketId::new(1) }.is_recoverable());
        let io = std::io::Error::other("boom");
        assert!(!DeskError::Io(io).is_recoverable());
        assert!(!DeskError::ParseError { line: 1, message: String::new() }.is_recoverable());
    }

    #[test]
    fn test_suggestions() {
        let err = DeskError::InvalidPriority { priority: 0 };
        assert_eq!(err.suggestions().len(), 2);
        assert!(DeskError::InvalidInput("other".to_string()).suggestions().is_empty());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: DeskError = io.into();
        assert!(matches!(err, DeskError::Io(_)));
        assert!(!err.is_config_error());
    }
}
