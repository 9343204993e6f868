use dioxus::prelude::*;
use form::{FocusMarker, FocusTarget};

#[component]
pub fn AddInputButton(
    marker: FocusMarker,
    on_add: EventHandler<()>,
    on_keydown: EventHandler<(FocusTarget, KeyboardEvent)>,
    on_focus: EventHandler<FocusTarget>,
    on_blur: EventHandler<FocusTarget>,
) -> Element {
    let target = FocusTarget::AddButton;

    rsx! {
        button {
            id: target.element_id(),
            class: marker.class_for(target, "add-button"),
            onclick: move |_| on_add.call(()),
            onkeydown: move |evt: KeyboardEvent| on_keydown.call((target, evt)),
            onfocus: move |_| on_focus.call(target),
            onblur: move |_| on_blur.call(target),
            "ADD INPUT +"
        }
    }
}
