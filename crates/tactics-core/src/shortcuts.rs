//! Keyboard shortcuts.
//!
//! Lower-case keys act for team1, shifted keys for team2.

use crate::board::Side;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutCommand {
    ToggleArrow(Side),
    ToggleRectangle(Side),
    AddPlayer(Side),
}

/// Maps a key press to a command.
///
/// `key` is the DOM `KeyboardEvent.key` value, so a shifted letter may arrive
/// upper-cased; both spellings are accepted. Presses with Ctrl/Meta held are
/// left to the browser.
pub fn resolve_shortcut(key: &str, shift: bool, ctrl: bool) -> Option<ShortcutCommand> {
    if ctrl {
        return None;
    }
    let side = if shift { Side::Team2 } else { Side::Team1 };
    match key {
        "f" | "F" => Some(ShortcutCommand::ToggleArrow(side)),
        "r" | "R" => Some(ShortcutCommand::ToggleRectangle(side)),
        "a" | "A" => Some(ShortcutCommand::AddPlayer(side)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_keys() {
        assert_eq!(
            resolve_shortcut("f", false, false),
            Some(ShortcutCommand::ToggleArrow(Side::Team1))
        );
        assert_eq!(
            resolve_shortcut("F", true, false),
            Some(ShortcutCommand::ToggleArrow(Side::Team2))
        );
        assert_eq!(
            resolve_shortcut("r", true, false),
            Some(ShortcutCommand::ToggleRectangle(Side::Team2))
        );
        assert_eq!(
            resolve_shortcut("a", false, false),
            Some(ShortcutCommand::AddPlayer(Side::Team1))
        );
    }

    #[test]
    fn test_ignored_keys() {
        assert_eq!(resolve_shortcut("x", false, false), None);
        assert_eq!(resolve_shortcut("Enter", true, false), None);
        // Ctrl+R reloads the page, Ctrl+A selects all.
        assert_eq!(resolve_shortcut("r", false, true), None);
        assert_eq!(resolve_shortcut("a", false, true), None);
    }
}
