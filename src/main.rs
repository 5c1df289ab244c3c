//! support-desk - In-memory customer support ticket desk
//!
//! This is the main entry point for the support-desk CLI application.
//! It parses arguments, loads configuration, sets up logging and hands a
//! fresh desk to the requested command.

use clap::Parser;
use std::process;
use support_desk::cli::handlers::{handle_config_show, handle_replay_command};
use support_desk::cli::{Cli, Commands, ConfigCommands, OutputFormatter};
use support_desk::config::Config;
use support_desk::error::{DeskError, Result};
use support_desk::interactive::InteractiveMenu;
use support_desk::TicketService;
use tracing_subscriber::EnvFilter;

/// Main entry point for the support-desk CLI
///
/// Expected desk outcomes never fail the process; only fatal errors
/// (I/O, configuration, malformed scripts) exit with status 1.
fn main() {
    let cli = Cli::parse();
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    if let Err(e) = run(cli, formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

fn run(cli: Cli, formatter: OutputFormatter) -> Result<()> {
    let config = Config::load(cli.config.as_deref())?;
    init_logging(cli.verbose, &config.log.level);

    let formatter = if config.ui.color {
        formatter
    } else {
        OutputFormatter::new(cli.json, true)
    };

    tracing::debug!(command = ?cli.command, "Starting support-desk");
    match cli.command {
        Commands::Menu => {
            let service = TicketService::new(config.desk);
            InteractiveMenu::new(&service, &formatter).run()
        },
        Commands::Replay { script } => {
            let service = TicketService::new(config.desk);
            handle_replay_command(&script, &service, &formatter).map(|_| ())
        },
        Commands::Config {
            command: ConfigCommands::Show,
        } => handle_config_show(&config, &formatter),
    }
}

/// Install the tracing subscriber
///
/// `RUST_LOG` wins, then `--verbose`, then `log.level` from config.
fn init_logging(verbose: bool, level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new(level)
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Handle errors and display them to the user
///
/// Prints the main message, any suggestions, and in JSON mode a
/// machine-readable error object on stdout.
fn handle_error(error: &DeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() && !formatter.is_json() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.print_json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
            "is_config_error": error.is_config_error(),
        }));
    }

    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
