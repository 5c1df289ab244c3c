//! Handler for the `config` command

use crate::cli::output::OutputFormatter;
use crate::config::{Config, DuplicatePolicy, default_config_path};
use crate::error::Result;

/// Print the effective configuration
pub fn handle_config_show(config: &Config, output: &OutputFormatter) -> Result<()> {
    if output.is_json() {
        return output.print_json(config);
    }

    let policy = match config.desk.duplicate_policy {
        DuplicatePolicy::Reject => "reject",
        DuplicatePolicy::Replace => "replace",
    };

    output.header("Desk");
    output.info(&format!("  duplicate_policy = {policy}"));
    output.info(&format!("  strict_priority  = {}", config.desk.strict_priority));
    output.info(&format!("  event_capacity   = {}", config.desk.event_capacity));
    output.header("UI");
    output.info(&format!("  color = {}", config.ui.color));
    output.header("Log");
    output.info(&format!("  level = {}", config.log.level));

    if let Some(path) = default_config_path() {
        output.info(&format!("\nDefault config file: {}", path.display()));
    }
    Ok(())
}
