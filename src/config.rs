//! Configuration for support-desk
//!
//! Settings are layered with the `config` crate: built-in defaults, then a
//! config file, then `SUPPORT_DESK__`-prefixed environment variables using
//! `__` between nested keys, e.g. `SUPPORT_DESK__DESK__STRICT_PRIORITY=true`.

use crate::error::{DeskError, Result};
use config::{Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "SUPPORT_DESK";

/// Separator between the prefix and nested keys
pub const ENV_SEPARATOR: &str = "__";

/// Largest accepted `desk.event_capacity`
pub const MAX_EVENT_CAPACITY: usize = 65_536;

/// What `add_ticket` does when the id is already live
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Refuse the add and leave every structure untouched
    #[default]
    Reject,
    /// Overwrite the registry entry; the old ticket stays in the queues
    Replace,
}

/// Behavior of the ticket service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub duplicate_policy: DuplicatePolicy,
    /// Reject priorities outside 1-5 instead of treating them as normal
    pub strict_priority: bool,
    /// Events buffered per subscriber before the oldest are dropped
    pub event_capacity: usize,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
            strict_priority: false,
            event_capacity: 100,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Root configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub desk: DeskConfig,
    pub ui: UiConfig,
    pub log: LogConfig,
}

impl Config {
    /// Load configuration from an explicit file, or the default location
    ///
    /// An explicit path must exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, env_source())
    }

    fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder =
            config::Config::builder().add_source(config::Config::try_from(&Self::default())?);

        builder = match path {
            Some(path) => builder.add_source(File::from(path).required(true)),
            None => match default_config_path() {
                Some(default_path) => builder.add_source(File::from(default_path).required(false)),
                None => builder,
            },
        };

        let config: Self = builder.add_source(env).build()?.try_deserialize()?;
        config.validate()?;

        tracing::debug!(?config, "Loaded configuration");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_EVENT_CAPACITY).contains(&self.desk.event_capacity) {
            return Err(DeskError::InvalidInput(format!(
                "desk.event_capacity must be between 1 and {MAX_EVENT_CAPACITY}, got {}",
                self.desk.event_capacity
            )));
        }

        tracing_subscriber::EnvFilter::try_new(&self.log.level).map_err(|e| {
            DeskError::InvalidInput(format!("Invalid log.level '{}': {e}", self.log.level))
        })?;

        Ok(())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator(ENV_SEPARATOR)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

/// `<platform config dir>/support-desk/config.toml`, if a home directory exists
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "support-desk")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}
