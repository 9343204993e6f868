//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const PAPR_CSS: Asset = asset!("/assets/styling/papr.css");

mod config;
pub use config::{bootstrap, use_config, DEFAULT_CONFIG_TOML};

mod focus;
mod timer;

mod clock;
pub use clock::Clock;

mod status_indicator;
pub use status_indicator::{use_health_status, StatusIndicator};

mod app_header;
pub use app_header::AppHeader;

pub mod input;
pub use input::{AddInputButton, AttachButton, InputBlockView, InputContainer};

mod url_prompt_dialog;
pub use url_prompt_dialog::UrlPromptDialog;

pub mod views;
pub use views::Workspace;
