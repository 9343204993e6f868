use dioxus::prelude::*;

use crate::focus::focus_element_id;

const INPUT_ID: &str = "url-prompt-input";

/// Modal asking for a URL to attach to a block.
///
/// Enter or "OK" submits. Escape anywhere in the dialog, "Cancel" or a click
/// on the backdrop cancels. The caller moves focus back to the block once the
/// dialog closes.
#[component]
pub fn UrlPromptDialog(
    draft: String,
    on_input: EventHandler<String>,
    on_submit: EventHandler<()>,
    on_cancel: EventHandler<()>,
) -> Element {
    use_effect(|| focus_element_id(INPUT_ID));

    rsx! {
        div {
            class: "url-prompt-backdrop",
            onclick: move |_| on_cancel.call(()),
            // Escape bubbles up here from the input and both buttons.
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Escape {
                    evt.prevent_default();
                    evt.stop_propagation();
                    on_cancel.call(());
                }
            },
            div {
                class: "url-prompt",
                role: "dialog",
                aria_modal: "true",
                aria_labelledby: "url-prompt-title",
                onclick: move |evt: MouseEvent| evt.stop_propagation(),
                h2 { id: "url-prompt-title", class: "url-prompt-title", "Enter URL:" }
                input {
                    id: INPUT_ID,
                    class: "url-prompt-input",
                    r#type: "text",
                    autofocus: true,
                    value: "{draft}",
                    oninput: move |evt: FormEvent| on_input.call(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.key() == Key::Enter {
                            evt.prevent_default();
                            on_submit.call(());
                        }
                    },
                }
                div {
                    class: "url-prompt-actions",
                    button {
                        class: "primary",
                        onclick: move |_| on_submit.call(()),
                        "OK"
                    }
                    button {
                        class: "secondary",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                }
            }
        }
    }
}
