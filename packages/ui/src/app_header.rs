use dioxus::prelude::*;

use crate::clock::Clock;
use crate::status_indicator::StatusIndicator;

#[component]
pub fn AppHeader() -> Element {
    rsx! {
        div {
            class: "header",
            "papr.dev"
            div {
                class: "header-right",
                Clock {}
                StatusIndicator {}
            }
        }
    }
}
