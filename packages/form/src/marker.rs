//! The keyboard-focus marker.
//!
//! A single optional slot, so at most one control is ever marked. The UI keeps
//! it in step with native focus: keyboard moves call [`FocusMarker::mark`]
//! before focusing the element, native `focus` events call it again, and native
//! `blur` events call [`FocusMarker::release`].

use crate::focus::FocusTarget;

/// CSS class carried by the marked control.
pub const MARKER_CLASS: &str = "keyboard-focused";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FocusMarker {
    current: Option<FocusTarget>,
}

impl FocusMarker {
    pub fn current(&self) -> Option<FocusTarget> {
        self.current
    }

    pub fn is_marked(&self, target: FocusTarget) -> bool {
        self.current == Some(target)
    }

    /// Move the marker onto `target`, clearing whichever control held it.
    pub fn mark(&mut self, target: FocusTarget) {
        self.current = Some(target);
    }

    /// Drop the marker if `target` still holds it.
    ///
    /// Blur of the previous control arrives after a keyboard move has already
    /// marked the next one; that blur must not clear the new mark.
    pub fn release(&mut self, target: FocusTarget) {
        if self.current == Some(target) {
            self.current = None;
        }
    }

    /// `base` with the marker class appended when `target` is marked.
    pub fn class_for(&self, target: FocusTarget, base: &str) -> String {
        if self.is_marked(target) {
            format!("{base} {MARKER_CLASS}")
        } else {
            base.to_string()
        }
    }
}
