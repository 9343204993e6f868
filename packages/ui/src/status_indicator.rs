//! Backend connectivity indicator for the header.

use api::{HealthClient, HealthStatus};
use dioxus::prelude::*;

use crate::config::use_config;

/// Check backend health once on mount and expose the result.
///
/// There is no retry and no polling; the request is dropped with the owning
/// scope if the component unmounts before it completes.
pub fn use_health_status() -> Signal<HealthStatus> {
    let config = use_config();
    let mut health = use_signal(HealthStatus::default);

    let _ = use_resource(move || {
        let client = HealthClient::new(config.health.endpoint.clone());
        async move {
            let result = client.check().await;
            health.write().record(result);
        }
    });

    health
}

/// A dot that turns "live" when the backend reports `OK`.
///
/// The tooltip carries the raw status text (`Loading...`, the server's status,
/// or `Failed to connect`).
#[component]
pub fn StatusIndicator() -> Element {
    let health = use_health_status();
    let state = health();

    rsx! {
        span {
            class: state.indicator_class(),
            title: "{state.status}",
        }
    }
}
