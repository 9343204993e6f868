use std::io;
use std::path::{Path, PathBuf};

use dioxus::prelude::*;

fn main() {
    let path = user_config_path();
    let read = match &path {
        Some(path) => read_config_file(path),
        None => Ok(None),
    };
    let source = match &read {
        Ok(Some(text)) => text.as_str(),
        _ => ui::DEFAULT_CONFIG_TOML,
    };
    let config = ui::bootstrap(source);

    // Logged here because the logger only exists after bootstrap.
    match (read, path) {
        (Err(e), Some(path)) => {
            tracing::warn!("Could not read {}: {}; using bundled config", path.display(), e)
        }
        (Ok(Some(_)), Some(path)) => tracing::info!("Loaded config from {}", path.display()),
        _ => {}
    }

    dioxus::LaunchBuilder::new().with_context(config).launch(App);
}

/// `<config_dir>/papr/papr.toml`.
fn user_config_path() -> Option<PathBuf> {
    Some(
        dirs::config_dir()?
            .join("papr")
            .join(form::PaprConfig::filename()),
    )
}

/// Contents of the config file, or `None` when there is no file.
fn read_config_file(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

#[component]
fn App() -> Element {
    rsx! {
        ui::Workspace {}
    }
}
