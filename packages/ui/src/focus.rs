//! Native focus side effects.
//!
//! Navigation decides *where* focus goes (see [`form::navigate`]); this module
//! moves it there by evaluating a tiny script against the element id the
//! target was rendered with.

use dioxus::prelude::*;
use form::{FocusMarker, FocusTarget};

/// Escape a string so it's safe to embed inside a JS string literal (double-quoted).
fn js_string_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c < '\x20' => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Give native focus to the element with `id`, if it is rendered.
pub(crate) fn focus_element_id(id: &str) {
    let js = format!(
        r#"(function() {{
            var el = document.getElementById({id_js});
            if (el) el.focus();
        }})();"#,
        id_js = js_string_escape(id),
    );
    document::eval(&js);
}

/// Mark `target` and focus its element.
pub(crate) fn move_focus(mut marker: Signal<FocusMarker>, target: FocusTarget) {
    marker.write().mark(target);
    focus_element_id(&target.element_id());
}

/// Map a key to an arrow, ignoring everything else.
pub(crate) fn arrow_for(key: &Key) -> Option<form::Arrow> {
    match key {
        Key::ArrowUp => Some(form::Arrow::Up),
        Key::ArrowDown => Some(form::Arrow::Down),
        Key::ArrowLeft => Some(form::Arrow::Left),
        Key::ArrowRight => Some(form::Arrow::Right),
        _ => None,
    }
}
