use dioxus::prelude::*;

use crate::app_header::AppHeader;
use crate::input::InputContainer;
use crate::PAPR_CSS;

/// The whole page: header bar over an input panel and an output panel.
#[component]
pub fn Workspace() -> Element {
    rsx! {
        document::Stylesheet { href: PAPR_CSS }

        div {
            class: "app-container",
            AppHeader {}

            div {
                class: "body-wrapper",
                div {
                    class: "left-panel",
                    InputContainer {}
                }
                div {
                    class: "right-panel",
                    p { "Output" }
                }
            }
        }
    }
}
