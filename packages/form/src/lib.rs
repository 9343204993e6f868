pub mod blocks;
pub mod clock;
pub mod config;
pub mod focus;
pub mod marker;
pub mod prompt;

pub use blocks::{placeholder_file_name, AttachKind, BlockList, FormError, InputBlock};
pub use clock::{clock_text, ClockFormat, ClockFormatError};
pub use config::{ConfigError, PaprConfig};
pub use focus::{navigate, Arrow, FocusTarget, GridLayout, Navigation};
pub use marker::FocusMarker;
pub use prompt::UrlPrompt;
