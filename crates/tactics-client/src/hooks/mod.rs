//! Custom Yew hooks.

mod use_keyboard_shortcuts;
mod use_pointer_drag;

pub use use_keyboard_shortcuts::use_keyboard_shortcuts;
pub use use_pointer_drag::{DragRelease, use_pointer_drag};
