//! Output formatting for the support-desk CLI
//!
//! Human-readable messages go to stdout (errors to stderr) with optional
//! color. In JSON mode handlers emit one compact JSON document per line
//! instead.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats messages for the terminal or as JSON
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter
    ///
    /// `no_color` turns colors off process-wide.
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    pub const fn is_json(&self) -> bool {
        self.json
    }

    pub fn success(&self, message: &str) {
        println!("{}", message.green());
    }

    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    pub fn warning(&self, message: &str) {
        println!("{}", message.yellow());
    }

    pub fn error(&self, message: &str) {
        eprintln!("{} {}", "Error:".red().bold(), message);
    }

    /// Heading for a group of lines
    pub fn header(&self, message: &str) {
        println!("\n{}", message.bold().cyan());
    }

    /// Print a value as a single line of JSON
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string(value)?);
        Ok(())
    }
}
