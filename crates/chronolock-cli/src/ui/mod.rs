//! Terminal output: status badges, hints and time formatting.

mod context;
mod format;
mod render;
mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use format::{format_datetime, format_remaining};
pub use render::{badge, hint, success};
