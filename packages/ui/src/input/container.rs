use chrono::Utc;
use dioxus::prelude::*;
use form::{
    navigate, placeholder_file_name, AttachKind, BlockList, FocusMarker, FocusTarget, FormError,
    UrlPrompt,
};

use super::{AddInputButton, InputBlockView};
use crate::config::use_config;
use crate::focus::{arrow_for, move_focus};
use crate::url_prompt_dialog::UrlPromptDialog;

fn log_form_error(result: Result<(), FormError>) {
    if let Err(e) = result {
        tracing::warn!("Ignoring block update: {}", e);
    }
}

/// Owns the block list, the focus marker and the URL prompt.
///
/// Arrow keys from any control are resolved against the grid derived from
/// the current block list; the resulting move is applied by marking the
/// target and focusing its element.
#[component]
pub fn InputContainer() -> Element {
    let config = use_config();
    let mut blocks = use_signal(|| BlockList::with_blocks(config.form.initial_blocks));
    let mut marker = use_signal(FocusMarker::default);
    let mut url_prompt = use_signal(UrlPrompt::default);

    let handle_keydown = move |(from, evt): (FocusTarget, KeyboardEvent)| {
        let Some(arrow) = arrow_for(&evt.key()) else {
            return;
        };
        let navigation = navigate(&blocks.peek().layout(), from, arrow);
        if navigation.consumes_event() {
            evt.prevent_default();
        }
        if let Some(target) = navigation.target() {
            tracing::trace!("Keyboard focus {:?} -> {:?}", from, target);
            move_focus(marker, target);
        }
    };

    let handle_focus = move |target: FocusTarget| marker.write().mark(target);
    let handle_blur = move |target: FocusTarget| marker.write().release(target);

    let handle_header_change = move |(index, text): (usize, String)| {
        log_form_error(blocks.write().set_header(index, text));
    };
    let handle_value_change = move |(index, text): (usize, String)| {
        log_form_error(blocks.write().set_value(index, text));
    };

    let default_url = config.form.default_url;
    let handle_attach = use_callback(move |(index, kind): (usize, AttachKind)| match kind {
        AttachKind::Url => url_prompt.write().open(index, &default_url),
        AttachKind::File => {
            let name = placeholder_file_name(Utc::now().timestamp_millis());
            tracing::debug!("Attaching {} to block {}", name, index);
            log_form_error(blocks.write().add_file(index, name));
        }
    });

    let handle_add = move |_| {
        let index = blocks.write().add_block();
        tracing::debug!("Added input block {}", index);
        move_focus(marker, FocusTarget::AddButton);
    };

    let submit_url = move |_| {
        let return_to = url_prompt.peek().return_focus();
        if let Some((row, url)) = url_prompt.write().submit() {
            tracing::debug!("Attaching {} to block {}", url, row);
            log_form_error(blocks.write().add_url(row, url));
        }
        if let Some(target) = return_to {
            move_focus(marker, target);
        }
    };

    let cancel_url = move |_| {
        let return_to = url_prompt.peek().return_focus();
        url_prompt.write().cancel();
        if let Some(target) = return_to {
            move_focus(marker, target);
        }
    };

    let rows = blocks.read().blocks().to_vec();
    let current_marker = *marker.read();
    let prompt = url_prompt.read().clone();

    rsx! {
        div {
            class: "input-container",
            for (index, block) in rows.into_iter().enumerate() {
                InputBlockView {
                    key: "{index}",
                    index: index,
                    block: block,
                    marker: current_marker,
                    on_header_change: handle_header_change,
                    on_value_change: handle_value_change,
                    on_attach: handle_attach,
                    on_keydown: handle_keydown,
                    on_focus: handle_focus,
                    on_blur: handle_blur,
                }
            }
            AddInputButton {
                marker: current_marker,
                on_add: handle_add,
                on_keydown: handle_keydown,
                on_focus: handle_focus,
                on_blur: handle_blur,
            }
        }

        if prompt.is_open() {
            UrlPromptDialog {
                draft: prompt.draft().to_string(),
                on_input: move |text: String| url_prompt.write().edit(text),
                on_submit: submit_url,
                on_cancel: cancel_url,
            }
        }
    }
}
