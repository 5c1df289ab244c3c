use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Caller-supplied ticket identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw numeric value
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl From<i64> for TicketId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// Dispatch tier a priority falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Urgent,
    Normal,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Urgent => write!(f, "urgent"),
            Self::Normal => write!(f, "normal"),
        }
    }
}

/// Ticket priority
///
/// Exactly `1` is urgent. Every other value, including ones outside the
/// documented 1-5 range, is normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(i32);

impl Priority {
    pub const URGENT: Self = Self(1);
    pub const LOWEST: Self = Self(5);

    #[must_use]
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    #[must_use]
    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn is_urgent(self) -> bool {
        self.0 == Self::URGENT.0
    }

    #[must_use]
    pub const fn tier(self) -> Tier {
        if self.is_urgent() {
            Tier::Urgent
        } else {
            Tier::Normal
        }
    }

    /// Whether the value lies in the documented 1-5 range
    #[must_use]
    pub const fn is_in_range(self) -> bool {
        self.0 >= Self::URGENT.0 && self.0 <= Self::LOWEST.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A customer support request
///
/// Fields are private so a ticket cannot change once it has been handed
/// to the registry and the dispatch queues.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    id: TicketId,
    customer_name: String,
    issue: String,
    priority: Priority,
    created_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a ticket stamped with the current time
    pub fn new(
        id: TicketId,
        customer_name: impl Into<String>,
        issue: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            customer_name: customer_name.into(),
            issue: issue.into(),
            priority,
            created_at: Utc::now(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> TicketId {
        self.id
    }

    #[must_use]
    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    #[must_use]
    pub fn issue(&self) -> &str {
        &self.issue
    }

    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Display line followed by the creation time
    #[must_use]
    pub fn detail_line(&self) -> String {
        format!("{self} | Created: {}", self.created_at.format("%Y-%m-%d %H:%M:%S UTC"))
    }

    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.priority.tier()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ticket ID: {} | Name: {} | Issue: {} | Priority: {}",
            self.id, self.customer_name, self.issue, self.priority
        )
    }
}
