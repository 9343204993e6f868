//! Configuration loading and the config context.
//!
//! Launch targets call [`bootstrap`] before `dioxus::launch`, then hand the
//! returned [`PaprConfig`] to the launcher as root context. Components read it
//! back with [`use_config`].

use dioxus::prelude::*;
use form::PaprConfig;

/// The `papr.toml` compiled into every build.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../papr.toml");

/// Get the application configuration.
pub fn use_config() -> PaprConfig {
    use_context::<PaprConfig>()
}

/// Parse `source`, start the logger at the configured level and return the config.
///
/// A file that fails to parse falls back to [`PaprConfig::default`]; the
/// failure is logged once the logger is up.
pub fn bootstrap(source: &str) -> PaprConfig {
    let parsed = PaprConfig::from_toml(source);
    let config = parsed.as_ref().cloned().unwrap_or_default();

    let level = log_level(&config.logging.level);
    // A second init (hot reload, tests) fails harmlessly; the first subscriber stays.
    dioxus::logger::init(level.unwrap_or(tracing::Level::INFO)).ok();

    if let Err(e) = parsed {
        tracing::warn!("Using default configuration: {}", e);
    }
    if level.is_none() {
        tracing::warn!("Unknown log level {:?}, logging at info", config.logging.level);
    }
    tracing::info!("Health endpoint: {}", config.health.endpoint);
    config
}

fn log_level(name: &str) -> Option<tracing::Level> {
    name.trim().parse().ok()
}
