//! # Application configuration: `papr.toml`
//!
//! Settings for the form UI, read once at launch and shared with every
//! component through the Dioxus context.
//!
//! ## Structure
//!
//! ```toml
//! [health]
//! endpoint = "http://localhost:8000/api/health/"
//!
//! [clock]
//! tick_millis = 1000
//! format = "%-I:%M:%S %p"
//!
//! [form]
//! initial_blocks = 1
//! default_url = "https://"
//!
//! [logging]
//! level = "info"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`PaprConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`HealthConfig`] | URL of the health endpoint polled once on mount. |
//! | [`ClockConfig`] | Refresh period and `strftime` pattern of the header clock. |
//! | [`FormConfig`] | Number of blocks shown at start and the URL prompt's pre-filled text. |
//! | [`LoggingConfig`] | Log level handed to the logger at launch. |
//!
//! Every field has a default, so a missing or empty file is equivalent to
//! [`PaprConfig::default`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid papr.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("could not serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaprConfig {
    #[serde(default)]
    pub health: HealthConfig,
    #[serde(default)]
    pub clock: ClockConfig,
    #[serde(default)]
    pub form: FormConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthConfig {
    #[serde(default = "default_health_endpoint")]
    pub endpoint: String,
}

fn default_health_endpoint() -> String {
    "http://localhost:8000/api/health/".to_string()
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            endpoint: default_health_endpoint(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Refresh period in milliseconds.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
    /// `strftime` pattern, see [`chrono::format::strftime`].
    #[serde(default = "default_clock_format")]
    pub format: String,
}

fn default_tick_millis() -> u64 {
    1000
}

fn default_clock_format() -> String {
    "%-I:%M:%S %p".to_string()
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
            format: default_clock_format(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default = "default_initial_blocks")]
    pub initial_blocks: usize,
    /// Text pre-filled in the URL prompt.
    #[serde(default = "default_url")]
    pub default_url: String,
}

fn default_initial_blocks() -> usize {
    1
}

fn default_url() -> String {
    "https://".to_string()
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            initial_blocks: default_initial_blocks(),
            default_url: default_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl PaprConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "papr.toml"
    }

    /// Builder method to point the health check elsewhere.
    pub fn with_health_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.health.endpoint = endpoint.into();
        self
    }

    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
