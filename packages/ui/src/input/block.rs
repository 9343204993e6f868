use dioxus::prelude::*;
use form::{AttachKind, FocusMarker, FocusTarget, InputBlock};

/// One row of the form: header and prompt fields, the attach-context
/// buttons, and the attachments added so far.
#[component]
pub fn InputBlockView(
    index: usize,
    block: InputBlock,
    marker: FocusMarker,
    on_header_change: EventHandler<(usize, String)>,
    on_value_change: EventHandler<(usize, String)>,
    on_attach: EventHandler<(usize, AttachKind)>,
    on_keydown: EventHandler<(FocusTarget, KeyboardEvent)>,
    on_focus: EventHandler<FocusTarget>,
    on_blur: EventHandler<FocusTarget>,
) -> Element {
    let header = FocusTarget::Header(index);
    let prompt = FocusTarget::Prompt(index);

    rsx! {
        div {
            class: "input-block",

            // Header and prompt
            div {
                class: "inputs-section",
                input {
                    id: header.element_id(),
                    r#type: "text",
                    class: marker.class_for(header, "header-field"),
                    placeholder: "HEADER",
                    value: "{block.header}",
                    oninput: move |evt: FormEvent| on_header_change.call((index, evt.value())),
                    onkeydown: move |evt: KeyboardEvent| on_keydown.call((header, evt)),
                    onfocus: move |_| on_focus.call(header),
                    onblur: move |_| on_blur.call(header),
                }
                input {
                    id: prompt.element_id(),
                    r#type: "text",
                    class: marker.class_for(prompt, "input-field"),
                    placeholder: "PROMPT",
                    value: "{block.value}",
                    oninput: move |evt: FormEvent| on_value_change.call((index, evt.value())),
                    onkeydown: move |evt: KeyboardEvent| on_keydown.call((prompt, evt)),
                    onfocus: move |_| on_focus.call(prompt),
                    onblur: move |_| on_blur.call(prompt),
                }
            }

            // Context controls
            div {
                class: "controls-section",
                div {
                    class: "context-section",
                    div { class: "context-header", "[ADD CONTEXT]" }
                    div {
                        class: "context-buttons",
                        for kind in AttachKind::ALL {
                            AttachButton {
                                key: "{kind.slot()}",
                                row: index,
                                kind: kind,
                                marker: marker,
                                on_attach: on_attach,
                                on_keydown: on_keydown,
                                on_focus: on_focus,
                                on_blur: on_blur,
                            }
                        }
                    }
                }
            }

            // Attached context
            div {
                class: "list-section",
                div {
                    class: "context-items-list",
                    for (i, item) in block.attachments().enumerate() {
                        div {
                            key: "{i}",
                            class: "context-item",
                            "{item}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn AttachButton(
    row: usize,
    kind: AttachKind,
    marker: FocusMarker,
    on_attach: EventHandler<(usize, AttachKind)>,
    on_keydown: EventHandler<(FocusTarget, KeyboardEvent)>,
    on_focus: EventHandler<FocusTarget>,
    on_blur: EventHandler<FocusTarget>,
) -> Element {
    let target = FocusTarget::Attach {
        row,
        slot: kind.slot(),
    };

    rsx! {
        button {
            id: target.element_id(),
            class: marker.class_for(target, "add-context-button"),
            onclick: move |_| on_attach.call((row, kind)),
            onkeydown: move |evt: KeyboardEvent| on_keydown.call((target, evt)),
            onfocus: move |_| on_focus.call(target),
            onblur: move |_| on_blur.call(target),
            "{kind.label()}"
        }
    }
}
