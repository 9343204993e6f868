//! The input panel: a growing list of blocks plus the add button, with
//! arrow-key navigation across every control.

mod add_button;
pub use add_button::AddInputButton;

mod block;
pub use block::{AttachButton, InputBlockView};

mod container;
pub use container::InputContainer;
