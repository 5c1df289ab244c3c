//! Command-line interface for support-desk
//!
//! The binary hosts one in-memory desk per process run. `menu` drives it
//! interactively; `replay` feeds it a JSON Lines script, which is how the
//! desk is scripted and tested end to end.

pub mod handlers;
pub mod output;
pub mod script;

pub use output::OutputFormatter;
pub use script::{CommandOutcome, DeskCommand};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// In-memory customer support ticket desk
#[derive(Parser, Debug)]
#[command(name = "support-desk", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON, one object per line
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a config file (TOML or YAML)
    #[arg(short, long, global = true, env = "SUPPORT_DESK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the interactive ticket menu
    #[command(visible_alias = "shell")]
    Menu,

    /// Execute desk commands from a JSON Lines script
    Replay {
        /// Script path, or '-' to read from stdin
        script: String,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
}
