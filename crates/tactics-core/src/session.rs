//! One board session: tokens, annotations and the gesture in progress.
//!
//! [`Session::reduce`] is the single entry point a host event handler calls;
//! it returns the next session and leaves the previous one untouched.

use crate::annotation::{AnnotationLayer, ShapeKind};
use crate::board::{Board, BoardAction, Side, TokenId};
use crate::config::BoardConfig;
use crate::document::FormationDocument;
use crate::drag::{DragController, DragSubject, DropTarget, GrabZone};
use crate::geometry::{Delta, Point};
use crate::shortcuts::ShortcutCommand;

/// Host events and user commands.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    Board(BoardAction),
    Shortcut(ShortcutCommand),
    ToggleTool { tool: ShapeKind, color: String },
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    HoverAt(Point),
    DeleteShape { kind: ShapeKind, index: usize },
    ClearShapes,
    DragStart { subject: DragSubject, zone: GrabZone },
    DragMove(Delta),
    Drop { target: DropTarget, offset: Option<Delta> },
    CancelDrag,
    /// Replaces a side with a validated, imported document.
    Import { side: Side, document: FormationDocument },
    /// The pitch was measured at a new width.
    FieldResized { width: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub board: Board,
    pub annotations: AnnotationLayer,
    pub drag: DragController,
    /// Rendered pitch width, used for mirroring presets.
    pub field_width: f64,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl Session {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            field_width: config.field.width,
            board: Board::new(config),
            annotations: AnnotationLayer::new(),
            drag: DragController::new(),
        }
    }

    /// Applies one host event and returns the next session.
    ///
    /// Every event is total: gestures that do not apply in the current state,
    /// such as a pointer move with no shape being drawn or a drop with no drag
    /// in progress, return an unchanged session. Hosts compare the result with
    /// the previous session to skip redundant renders.
    ///
    /// # Arguments
    ///
    /// * `action` - The event to apply.
    ///
    /// # Example
    ///
    /// ```
    /// use tactics_core::{Session, SessionAction, ShortcutCommand, Side};
    ///
    /// let session = Session::default()
    ///     .reduce(SessionAction::Shortcut(ShortcutCommand::AddPlayer(Side::Team1)));
    /// assert_eq!(session.board.count(Side::Team1), 1);
    /// ```
    #[must_use]
    pub fn reduce(&self, action: SessionAction) -> Self {
        let mut next = self.clone();
        match action {
            SessionAction::Board(action) => next.board = next.board.apply(action),
            SessionAction::Shortcut(command) => next.run_shortcut(command),
            SessionAction::ToggleTool { tool, color } => {
                next.annotations.toggle_tool(tool, &color);
            }
            SessionAction::PointerDown(pos) => {
                next.annotations.pointer_down(pos);
            }
            SessionAction::PointerMove(pos) => {
                next.annotations.pointer_move(pos);
            }
            SessionAction::PointerUp => {
                next.annotations.pointer_up();
            }
            SessionAction::HoverAt(pos) => {
                next.annotations.hover_at(pos);
            }
            SessionAction::DeleteShape { kind, index } => {
                next.annotations.delete_shape(kind, index);
            }
            SessionAction::ClearShapes => next.annotations.clear_shapes(),
            SessionAction::DragStart { subject, zone } => {
                next.drag.drag_start(subject, zone, next.annotations.mode());
            }
            SessionAction::DragMove(offset) => next.drag.drag_move(offset),
            SessionAction::Drop { target, offset } => {
                next.board = next.drag.drop(&self.board, target, offset);
            }
            SessionAction::CancelDrag => next.drag.cancel(),
            SessionAction::Import { side, document } => {
                next.board = next.board.replace_side(side, &document);
            }
            SessionAction::FieldResized { width } => next.field_width = width,
        }
        next
    }

    fn run_shortcut(&mut self, command: ShortcutCommand) {
        match command {
            ShortcutCommand::ToggleArrow(side) => self.annotations.toggle_arrow_mode(side.color()),
            ShortcutCommand::ToggleRectangle(side) => {
                self.annotations.toggle_rectangle_mode(side.color());
            }
            ShortcutCommand::AddPlayer(side) => self.board = self.board.add_token(side),
        }
    }

    /// Applies a preset using the last measured field width.
    #[must_use]
    pub fn apply_formation(&self, side: Side, name: &str) -> Self {
        self.reduce(SessionAction::Board(BoardAction::ApplyFormation {
            side,
            name: name.to_string(),
            field_width: self.field_width,
        }))
    }

    /// Whether `(side, id)` is the token being dragged.
    pub fn is_dragging_player(&self, side: Side, id: TokenId) -> bool {
        self.drag.subject() == Some(DragSubject::Player { side, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    #[test]
    fn test_shortcuts_route_to_owners() {
        let session = Session::default()
            .reduce(SessionAction::Shortcut(ShortcutCommand::AddPlayer(Side::Team2)))
            .reduce(SessionAction::Shortcut(ShortcutCommand::ToggleArrow(Side::Team2)));

        assert_eq!(session.board.count(Side::Team2), 1);
        assert!(session.annotations.mode().is_active(ShapeKind::Arrow, "red"));

        let session = session.reduce(SessionAction::Shortcut(ShortcutCommand::ToggleRectangle(
            Side::Team1,
        )));
        assert!(session.annotations.mode().is_active(ShapeKind::Rectangle, "blue"));
    }

    #[test]
    fn test_drag_blocked_while_drawing() {
        let session = Session::default()
            .reduce(SessionAction::Board(BoardAction::AddToken(Side::Team1)))
            .reduce(SessionAction::ToggleTool {
                tool: ShapeKind::Arrow,
                color: "blue".to_string(),
            })
            .reduce(SessionAction::DragStart {
                subject: DragSubject::Player {
                    side: Side::Team1,
                    id: 1,
                },
                zone: GrabZone::Glyph,
            });
        assert!(!session.drag.is_dragging());
    }

    #[test]
    fn test_drag_and_drop() {
        let subject = DragSubject::Player {
            side: Side::Team1,
            id: 1,
        };
        let session = Session::default()
            .reduce(SessionAction::Board(BoardAction::AddToken(Side::Team1)))
            .reduce(SessionAction::DragStart {
                subject,
                zone: GrabZone::Glyph,
            })
            .reduce(SessionAction::DragMove(Delta::new(5.0, 5.0)));
        assert!(session.is_dragging_player(Side::Team1, 1));

        let session = session.reduce(SessionAction::Drop {
            target: DropTarget::Pitch,
            offset: Some(Delta::new(100.0, 200.0)),
        });
        assert!(!session.drag.is_dragging());
        assert_eq!(
            session.board.token(Side::Team1, 1).map(|t| t.position),
            Some(Position::new(150.0, 250.0))
        );
    }

    #[test]
    fn test_formation_uses_measured_width() {
        let session = Session::default()
            .reduce(SessionAction::FieldResized { width: 1200.0 })
            .apply_formation(Side::Team2, "4-4-2");
        assert_eq!(
            session.board.token(Side::Team2, 1).map(|t| t.position),
            Some(Position::new(1150.0, 250.0))
        );
    }
}
