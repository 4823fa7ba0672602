//! Token position store.
//!
//! [`Board`] is an immutable snapshot: every operation borrows the current
//! board and returns the next one, so a snapshot handed to the renderer is
//! never changed under it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::BoardConfig;
use crate::document::{FormationDocument, FormationEntry};
use crate::formation::FormationCatalog;
use crate::geometry::{Delta, Position, mirror_positions};

/// Player id, unique within a side.
pub type TokenId = u32;

/// One of the two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    pub const ALL: [Side; 2] = [Side::Team1, Side::Team2];

    /// 1 for team1, 2 for team2.
    pub fn number(self) -> u8 {
        match self {
            Self::Team1 => 1,
            Self::Team2 => 2,
        }
    }

    /// Drawing colour associated with the side's controls.
    pub fn color(self) -> &'static str {
        match self {
            Self::Team1 => "blue",
            Self::Team2 => "red",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "team{}", self.number())
    }
}

/// A player token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: TokenId,
    pub position: Position,
    pub name: String,
}

/// Name given to a token created interactively or from a preset.
pub fn player_name(id: TokenId) -> String {
    format!("Player {id}")
}

/// Name given to an imported entry that carries none.
pub fn fallback_name(id: TokenId) -> String {
    format!("Jugador {id}")
}

/// The tokens of one side, keyed by id.
pub type SideState = BTreeMap<TokenId, Token>;

/// Board mutations, for hosts that drive the store through a reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    AddToken(Side),
    RemoveToken { side: Side, id: TokenId },
    RenameToken { side: Side, id: TokenId, name: String },
    MoveToken { side: Side, id: TokenId, delta: Delta },
    MoveBall(Delta),
    ApplyFormation {
        side: Side,
        name: String,
        field_width: f64,
    },
    ReplaceSide { side: Side, document: FormationDocument },
    ResetAll,
}

/// Snapshot of every movable entity on the pitch.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    config: BoardConfig,
    catalog: FormationCatalog,
    team1: SideState,
    team2: SideState,
    ball: Position,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Board {
    /// Empty board with the ball at its configured start.
    pub fn new(config: BoardConfig) -> Self {
        Self {
            ball: config.ball_start,
            config,
            catalog: FormationCatalog::builtin(),
            team1: SideState::new(),
            team2: SideState::new(),
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn catalog(&self) -> &FormationCatalog {
        &self.catalog
    }

    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Team1 => &mut self.team1,
            Side::Team2 => &mut self.team2,
        }
    }

    pub fn count(&self, side: Side) -> usize {
        self.side(side).len()
    }

    pub fn token(&self, side: Side, id: TokenId) -> Option<&Token> {
        self.side(side).get(&id)
    }

    pub fn tokens(&self, side: Side) -> impl Iterator<Item = &Token> {
        self.side(side).values()
    }

    pub fn ball(&self) -> Position {
        self.ball
    }

    /// Applies a reducer action.
    #[must_use]
    pub fn apply(&self, action: BoardAction) -> Self {
        match action {
            BoardAction::AddToken(side) => self.add_token(side),
            BoardAction::RemoveToken { side, id } => self.remove_token(side, id),
            BoardAction::RenameToken { side, id, name } => self.rename_token(side, id, name),
            BoardAction::MoveToken { side, id, delta } => self.move_token(side, id, delta),
            BoardAction::MoveBall(delta) => self.move_ball(delta),
            BoardAction::ApplyFormation {
                side,
                name,
                field_width,
            } => self.apply_formation(side, &name, field_width),
            BoardAction::ReplaceSide { side, document } => self.replace_side(side, &document),
            BoardAction::ResetAll => self.reset_all(),
        }
    }

    /// Lowest id in `1..=max_players_per_side` not held by the side.
    fn next_free_id(&self, side: Side) -> Option<TokenId> {
        let tokens = self.side(side);
        let max = TokenId::try_from(self.config.max_players_per_side).unwrap_or(TokenId::MAX);
        (1..=max).find(|id| !tokens.contains_key(id))
    }

    /// Adds a token at the side's spawn point. A full side is left unchanged.
    #[must_use]
    pub fn add_token(&self, side: Side) -> Self {
        if self.count(side) >= self.config.max_players_per_side {
            tracing::debug!(%side, "side is full, token not added");
            return self.clone();
        }
        let Some(id) = self.next_free_id(side) else {
            return self.clone();
        };

        let mut next = self.clone();
        let position = next.config.spawn_for(side);
        next.side_mut(side).insert(
            id,
            Token {
                id,
                position,
                name: player_name(id),
            },
        );
        tracing::debug!(%side, id, "token added");
        next
    }

    /// Removes a token; remaining ids are not renumbered.
    #[must_use]
    pub fn remove_token(&self, side: Side, id: TokenId) -> Self {
        let mut next = self.clone();
        if next.side_mut(side).remove(&id).is_none() {
            tracing::debug!(%side, id, "remove ignored, no such token");
        }
        next
    }

    #[must_use]
    pub fn rename_token(&self, side: Side, id: TokenId, name: impl Into<String>) -> Self {
        let mut next = self.clone();
        match next.side_mut(side).get_mut(&id) {
            Some(token) => token.name = name.into(),
            None => tracing::debug!(%side, id, "rename ignored, no such token"),
        }
        next
    }

    /// Shifts a token by `delta`. Positions are not clamped to the field.
    #[must_use]
    pub fn move_token(&self, side: Side, id: TokenId, delta: Delta) -> Self {
        let mut next = self.clone();
        match next.side_mut(side).get_mut(&id) {
            Some(token) => token.position = token.position.offset(delta),
            None => tracing::debug!(%side, id, "move ignored, no such token"),
        }
        next
    }

    #[must_use]
    pub fn move_ball(&self, delta: Delta) -> Self {
        Self {
            ball: self.ball.offset(delta),
            ..self.clone()
        }
    }

    /// Replaces the side with a preset. Team2 receives the preset mirrored
    /// across the midline of a field `field_width` pixels wide.
    ///
    /// Unknown names (including the empty selection) leave the board as is.
    #[must_use]
    pub fn apply_formation(&self, side: Side, name: &str, field_width: f64) -> Self {
        let Some(preset) = self.catalog.lookup(name) else {
            if !name.is_empty() {
                tracing::warn!(%side, name, "unknown formation");
            }
            return self.clone();
        };

        let positions = match side {
            Side::Team1 => preset.to_vec(),
            Side::Team2 => mirror_positions(preset, field_width),
        };

        let tokens = positions
            .into_iter()
            .take(self.config.max_players_per_side)
            .zip(1..)
            .map(|(position, id)| {
                (
                    id,
                    Token {
                        id,
                        position,
                        name: player_name(id),
                    },
                )
            })
            .collect();

        let mut next = self.clone();
        *next.side_mut(side) = tokens;
        tracing::info!(%side, name, "formation applied");
        next
    }

    /// Replaces the side with an imported document. Document ids become the
    /// token ids as they are.
    #[must_use]
    pub fn replace_side(&self, side: Side, document: &FormationDocument) -> Self {
        let tokens = document
            .iter()
            .map(|(id, entry)| {
                (
                    id,
                    Token {
                        id,
                        position: entry.position(),
                        name: entry.name.clone().unwrap_or_else(|| fallback_name(id)),
                    },
                )
            })
            .collect();

        let mut next = self.clone();
        *next.side_mut(side) = tokens;
        next
    }

    /// Clears both sides. The ball stays where it is.
    #[must_use]
    pub fn reset_all(&self) -> Self {
        Self {
            team1: SideState::new(),
            team2: SideState::new(),
            ..self.clone()
        }
    }

    /// The side's positions in document form.
    pub fn side_document(&self, side: Side) -> FormationDocument {
        FormationDocument {
            entries: self
                .tokens(side)
                .map(|token| {
                    (
                        token.id,
                        FormationEntry {
                            left: token.position.left,
                            top: token.position.top,
                            name: Some(token.name.clone()),
                        },
                    )
                })
                .collect(),
        }
    }
}
