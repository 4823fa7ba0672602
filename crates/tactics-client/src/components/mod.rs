//! UI components for the tactics board.

mod pitch;
mod shapes;
mod shortcuts_help;
mod team_controls;
mod token;
mod trash_zone;

pub use pitch::Pitch;
pub use shortcuts_help::ShortcutsHelp;
pub use team_controls::TeamControls;
pub use trash_zone::TrashZone;
