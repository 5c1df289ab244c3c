//! Command handlers for the support-desk CLI

mod config;
mod replay;

pub use config::handle_config_show;
pub use replay::{ReplaySummary, handle_replay_command, replay};
