//! # Keyboard focus grid
//!
//! The form is laid out as rows (one per block) with columns
//! `header / prompt / attach buttons...`, followed by a single trailing row
//! holding the add-block button. Arrow keys move focus across that grid.
//!
//! Navigation is computed over an explicit model, never over rendered markup:
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`FocusTarget`] | A focusable control, addressed by `(row, column)`. Maps to a stable element id. |
//! | [`GridLayout`] | How many attach buttons each row has. |
//! | [`Arrow`] | The four arrow keys. |
//! | [`Navigation`] | Outcome of a key press: not handled, handled with no move, or a move. |
//!
//! The UI applies the outcome afterwards: it consumes the key event for every
//! outcome except [`Navigation::Unhandled`] and focuses the target of
//! [`Navigation::MoveTo`]. All four arrows are consumed on every control of a
//! block; only the add button leaves some of them unhandled.

/// A focusable control of the form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    Header(usize),
    Prompt(usize),
    Attach { row: usize, slot: usize },
    AddButton,
}

impl FocusTarget {
    /// DOM id of the element rendered for this target.
    pub fn element_id(&self) -> String {
        match self {
            FocusTarget::Header(row) => format!("block-{row}-header"),
            FocusTarget::Prompt(row) => format!("block-{row}-prompt"),
            FocusTarget::Attach { row, slot } => format!("block-{row}-attach-{slot}"),
            FocusTarget::AddButton => "add-input-button".to_string(),
        }
    }

    pub fn row(&self) -> Option<usize> {
        match self {
            FocusTarget::Header(row) | FocusTarget::Prompt(row) => Some(*row),
            FocusTarget::Attach { row, .. } => Some(*row),
            FocusTarget::AddButton => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arrow {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    /// Key is not navigation for this control; native behaviour applies.
    Unhandled,
    /// A rule applies but there is nowhere to go.
    Stay,
    MoveTo(FocusTarget),
}

impl Navigation {
    /// Whether the key event should have its default action suppressed.
    pub fn consumes_event(&self) -> bool {
        !matches!(self, Navigation::Unhandled)
    }

    pub fn target(&self) -> Option<FocusTarget> {
        match self {
            Navigation::MoveTo(target) => Some(*target),
            _ => None,
        }
    }
}

/// Shape of the grid: the attach-button count of each row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridLayout {
    buttons: Vec<usize>,
}

impl GridLayout {
    pub fn new(buttons: Vec<usize>) -> Self {
        Self { buttons }
    }

    /// `rows` rows with the same number of attach buttons each.
    pub fn uniform(rows: usize, buttons_per_row: usize) -> Self {
        Self {
            buttons: vec![buttons_per_row; rows],
        }
    }

    pub fn rows(&self) -> usize {
        self.buttons.len()
    }

    pub fn buttons_in(&self, row: usize) -> usize {
        self.buttons.get(row).copied().unwrap_or(0)
    }

    fn has_button(&self, row: usize, slot: usize) -> bool {
        slot < self.buttons_in(row)
    }

    fn last_row(&self) -> Option<usize> {
        self.rows().checked_sub(1)
    }
}

fn move_or_stay(target: Option<FocusTarget>) -> Navigation {
    target.map_or(Navigation::Stay, Navigation::MoveTo)
}

/// Where focus goes when `arrow` is pressed on `from`.
pub fn navigate(layout: &GridLayout, from: FocusTarget, arrow: Arrow) -> Navigation {
    match (from, arrow) {
        (FocusTarget::Header(row), Arrow::Down) => Navigation::MoveTo(FocusTarget::Prompt(row)),
        (FocusTarget::Header(row), Arrow::Up) => {
            move_or_stay(row.checked_sub(1).map(FocusTarget::Prompt))
        }
        // Horizontal keys inside a block are swallowed even with nowhere to go.
        (FocusTarget::Header(_), Arrow::Left | Arrow::Right) => Navigation::Stay,

        (FocusTarget::Prompt(row), Arrow::Up) => Navigation::MoveTo(FocusTarget::Header(row)),
        (FocusTarget::Prompt(row), Arrow::Down) => {
            if row + 1 < layout.rows() {
                Navigation::MoveTo(FocusTarget::Header(row + 1))
            } else {
                Navigation::MoveTo(FocusTarget::AddButton)
            }
        }
        (FocusTarget::Prompt(row), Arrow::Right) => move_or_stay(
            layout
                .has_button(row, 0)
                .then_some(FocusTarget::Attach { row, slot: 0 }),
        ),
        (FocusTarget::Prompt(_), Arrow::Left) => Navigation::Stay,

        (FocusTarget::Attach { row, slot }, Arrow::Up) => move_or_stay(
            row.checked_sub(1)
                .filter(|&above| layout.has_button(above, slot))
                .map(|above| FocusTarget::Attach { row: above, slot }),
        ),
        (FocusTarget::Attach { row, slot }, Arrow::Down) => move_or_stay(
            Some(row + 1)
                .filter(|&below| layout.has_button(below, slot))
                .map(|below| FocusTarget::Attach { row: below, slot }),
        ),
        (FocusTarget::Attach { row, slot }, Arrow::Left) => match slot.checked_sub(1) {
            Some(prev) => Navigation::MoveTo(FocusTarget::Attach { row, slot: prev }),
            None => Navigation::MoveTo(FocusTarget::Prompt(row)),
        },
        (FocusTarget::Attach { row, slot }, Arrow::Right) => move_or_stay(
            layout
                .has_button(row, slot + 1)
                .then_some(FocusTarget::Attach { row, slot: slot + 1 }),
        ),

        (FocusTarget::AddButton, Arrow::Up) => {
            move_or_stay(layout.last_row().map(FocusTarget::Prompt))
        }
        (FocusTarget::AddButton, _) => Navigation::Unhandled,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attach(row: usize, slot: usize) -> FocusTarget {
        FocusTarget::Attach { row, slot }
    }

    #[test]
    fn test_header_moves() {
        let layout = GridLayout::uniform(3, 2);
        assert_eq!(
            navigate(&layout, FocusTarget::Header(1), Arrow::Down),
            Navigation::MoveTo(FocusTarget::Prompt(1))
        );
        assert_eq!(
            navigate(&layout, FocusTarget::Header(1), Arrow::Up),
            Navigation::MoveTo(FocusTarget::Prompt(0))
        );
    }

    #[test]
    fn test_up_from_first_header_stays_but_consumes() {
        let layout = GridLayout::uniform(2, 2);
        let nav = navigate(&layout, FocusTarget::Header(0), Arrow::Up);
        assert_eq!(nav, Navigation::Stay);
        assert!(nav.consumes_event());
        assert_eq!(nav.target(), None);
    }

    #[test]
    fn test_every_arrow_inside_a_block_is_consumed() {
        let layout = GridLayout::uniform(2, 2);
        let controls = [
            FocusTarget::Header(0),
            FocusTarget::Header(1),
            FocusTarget::Prompt(0),
            FocusTarget::Prompt(1),
            attach(0, 0),
            attach(0, 1),
            attach(1, 0),
            attach(1, 1),
        ];
        for from in controls {
            for arrow in [Arrow::Up, Arrow::Down, Arrow::Left, Arrow::Right] {
                let nav = navigate(&layout, from, arrow);
                assert!(nav.consumes_event(), "{from:?} {arrow:?} -> {nav:?}");
            }
        }
    }

    #[test]
    fn test_horizontal_keys_in_text_fields_stay() {
        let layout = GridLayout::uniform(1, 2);
        assert_eq!(
            navigate(&layout, FocusTarget::Header(0), Arrow::Left),
            Navigation::Stay
        );
        assert_eq!(
            navigate(&layout, FocusTarget::Header(0), Arrow::Right),
            Navigation::Stay
        );
        assert_eq!(
            navigate(&layout, FocusTarget::Prompt(0), Arrow::Left),
            Navigation::Stay
        );
    }

    #[test]
    fn test_prompt_moves() {
        let layout = GridLayout::uniform(2, 2);
        assert_eq!(
            navigate(&layout, FocusTarget::Prompt(0), Arrow::Up),
            Navigation::MoveTo(FocusTarget::Header(0))
        );
        assert_eq!(
            navigate(&layout, FocusTarget::Prompt(0), Arrow::Down),
            Navigation::MoveTo(FocusTarget::Header(1))
        );
    }

    #[test]
    fn test_down_from_last_prompt_reaches_add_button() {
        let layout = GridLayout::uniform(2, 2);
        assert_eq!(
            navigate(&layout, FocusTarget::Prompt(1), Arrow::Down),
            Navigation::MoveTo(FocusTarget::AddButton)
        );
    }

    #[test]
    fn test_right_left_walk_through_buttons() {
        let layout = GridLayout::uniform(2, 2);

        let mut at = FocusTarget::Prompt(0);
        at = navigate(&layout, at, Arrow::Right).target().unwrap();
        assert_eq!(at, attach(0, 0));
        at = navigate(&layout, at, Arrow::Right).target().unwrap();
        assert_eq!(at, attach(0, 1));

        let nav = navigate(&layout, at, Arrow::Right);
        assert_eq!(nav, Navigation::Stay);
        assert!(nav.consumes_event());

        at = navigate(&layout, at, Arrow::Left).target().unwrap();
        assert_eq!(at, attach(0, 0));
        at = navigate(&layout, at, Arrow::Left).target().unwrap();
        assert_eq!(at, FocusTarget::Prompt(0));
    }

    #[test]
    fn test_right_from_prompt_without_buttons_stays() {
        let layout = GridLayout::new(vec![0, 2]);
        assert_eq!(
            navigate(&layout, FocusTarget::Prompt(0), Arrow::Right),
            Navigation::Stay
        );
    }

    #[test]
    fn test_vertical_button_moves_are_column_aligned() {
        let layout = GridLayout::new(vec![2, 1, 2]);

        assert_eq!(
            navigate(&layout, attach(0, 0), Arrow::Down),
            Navigation::MoveTo(attach(1, 0))
        );
        // Row 1 has no second button.
        assert_eq!(navigate(&layout, attach(0, 1), Arrow::Down), Navigation::Stay);
        assert_eq!(navigate(&layout, attach(2, 1), Arrow::Up), Navigation::Stay);
        assert_eq!(
            navigate(&layout, attach(2, 0), Arrow::Up),
            Navigation::MoveTo(attach(1, 0))
        );
    }

    #[test]
    fn test_vertical_button_moves_stop_at_edges() {
        let layout = GridLayout::uniform(2, 2);
        assert_eq!(navigate(&layout, attach(0, 1), Arrow::Up), Navigation::Stay);
        assert_eq!(navigate(&layout, attach(1, 0), Arrow::Down), Navigation::Stay);
    }

    #[test]
    fn test_add_button() {
        let layout = GridLayout::uniform(3, 2);
        assert_eq!(
            navigate(&layout, FocusTarget::AddButton, Arrow::Up),
            Navigation::MoveTo(FocusTarget::Prompt(2))
        );
        assert_eq!(
            navigate(&layout, FocusTarget::AddButton, Arrow::Down),
            Navigation::Unhandled
        );

        let empty = GridLayout::default();
        assert_eq!(
            navigate(&empty, FocusTarget::AddButton, Arrow::Up),
            Navigation::Stay
        );
    }

    #[test]
    fn test_element_ids_are_distinct() {
        let ids = [
            FocusTarget::Header(0).element_id(),
            FocusTarget::Prompt(0).element_id(),
            attach(0, 0).element_id(),
            attach(0, 1).element_id(),
            FocusTarget::Header(1).element_id(),
            FocusTarget::AddButton.element_id(),
        ];
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
        assert_eq!(attach(3, 1).element_id(), "block-3-attach-1");
    }
}
