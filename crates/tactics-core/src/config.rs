//! Board configuration.
//!
//! Every field has a canonical default; a host may deserialize a partial
//! JSON object and keep defaults for the rest.

use serde::{Deserialize, Serialize};

use crate::board::Side;
use crate::geometry::Position;

/// Nominal pitch size in pixels.
pub const FIELD_WIDTH: f64 = 800.0;
pub const FIELD_HEIGHT: f64 = 600.0;

/// Maximum number of tokens on one side.
pub const MAX_PLAYERS_PER_SIDE: usize = 11;

/// Pitch dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FieldDimensions {
    pub width: f64,
    pub height: f64,
}

impl Default for FieldDimensions {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl FieldDimensions {
    pub fn center(&self) -> Position {
        Position::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Interactive board settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub field: FieldDimensions,
    pub max_players_per_side: usize,
    /// Where a newly added team1 token appears.
    pub team1_spawn: Position,
    /// Where a newly added team2 token appears.
    pub team2_spawn: Position,
    pub ball_start: Position,
}

impl Default for BoardConfig {
    fn default() -> Self {
        let field = FieldDimensions::default();
        Self {
            field,
            max_players_per_side: MAX_PLAYERS_PER_SIDE,
            team1_spawn: Position::new(50.0, 50.0),
            team2_spawn: Position::new(750.0, 50.0),
            ball_start: field.center(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn spawn_for(&self, side: Side) -> Position {
        match side {
            Side::Team1 => self.team1_spawn,
            Side::Team2 => self.team2_spawn,
        }
    }
}

/// Limits enforced on imported formation files.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormationLimits {
    pub max_players: usize,
    /// Highest accepted player id.
    pub max_id: u32,
    pub max_left: f64,
    pub max_top: f64,
    /// Names longer than this are truncated, not rejected.
    pub max_name_chars: usize,
    pub max_file_bytes: u64,
}

impl Default for FormationLimits {
    fn default() -> Self {
        Self {
            max_players: MAX_PLAYERS_PER_SIDE,
            max_id: 11,
            max_left: FIELD_WIDTH,
            max_top: FIELD_HEIGHT,
            max_name_chars: 30,
            max_file_bytes: 50 * 1024,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_field() {
        let config = BoardConfig::default();
        assert_eq!(config.field.width, 800.0);
        assert_eq!(config.field.height, 600.0);
        assert_eq!(config.ball_start, Position::new(400.0, 300.0));
        assert_eq!(config.spawn_for(Side::Team2), Position::new(750.0, 50.0));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = BoardConfig::from_json(r#"{ "max_players_per_side": 7 }"#)
            .expect("Failed to parse config");
        assert_eq!(config.max_players_per_side, 7);
        assert_eq!(config.team1_spawn, Position::new(50.0, 50.0));
    }
}
