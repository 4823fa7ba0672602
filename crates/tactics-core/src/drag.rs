//! Drag-and-drop of tokens and the ball.
//!
//! The host reports a gesture as start → move* → drop. Only the drop touches
//! the board; moves feed the preview offset. The dropped entity lands at its
//! old position plus the net gesture offset, never at the raw pointer
//! position, so the grab point inside the token does not matter.

use crate::annotation::DrawingMode;
use crate::board::{Board, Side, TokenId};
use crate::geometry::Delta;

/// What is being dragged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSubject {
    Player { side: Side, id: TokenId },
    Ball,
}

/// Part of a token the gesture started on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrabZone {
    /// The token's circle. Starts a drag.
    Glyph,
    /// The editable name under the circle. Never starts a drag.
    NameLabel,
}

/// Where the entity was released.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    Pitch,
    Trash,
    /// Released outside every drop target.
    Outside,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragSession {
    subject: DragSubject,
    preview: Option<Delta>,
}

/// Tracks the single gesture in progress.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begins a gesture.
    ///
    /// Refused when another gesture is active, when it starts on a name
    /// label, or while a drawing tool owns the pointer.
    pub fn drag_start(&mut self, subject: DragSubject, zone: GrabZone, mode: &DrawingMode) -> bool {
        if self.session.is_some() {
            tracing::debug!(?subject, "drag refused, gesture already active");
            return false;
        }
        if zone == GrabZone::NameLabel {
            tracing::debug!(?subject, "drag refused, grabbed by the name label");
            return false;
        }
        if mode.is_drawing_enabled() {
            tracing::debug!(?subject, "drag refused, drawing tool active");
            return false;
        }
        self.session = Some(DragSession {
            subject,
            preview: None,
        });
        true
    }

    /// Records the offset from the gesture start, for preview only.
    pub fn drag_move(&mut self, offset: Delta) {
        if let Some(session) = self.session.as_mut() {
            session.preview = Some(offset);
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn subject(&self) -> Option<DragSubject> {
        self.session.map(|s| s.subject)
    }

    /// Offset to draw `subject` at while the gesture is live.
    pub fn preview_offset(&self, subject: DragSubject) -> Option<Delta> {
        self.session
            .filter(|s| s.subject == subject)
            .and_then(|s| s.preview)
    }

    /// Ends the gesture without touching the board.
    pub fn cancel(&mut self) {
        self.session = None;
    }

    /// Ends the gesture and returns the resulting board.
    ///
    /// A `None` offset means the gesture was cancelled without net movement
    /// and leaves the board as it was.
    #[must_use]
    pub fn drop(&mut self, board: &Board, target: DropTarget, offset: Option<Delta>) -> Board {
        let Some(session) = self.session.take() else {
            return board.clone();
        };

        match (target, session.subject) {
            (DropTarget::Trash, DragSubject::Player { side, id }) => {
                tracing::debug!(%side, id, "token dropped on trash");
                board.remove_token(side, id)
            }
            // The ball cannot be deleted.
            (DropTarget::Trash, DragSubject::Ball) | (DropTarget::Outside, _) => board.clone(),
            (DropTarget::Pitch, subject) => {
                let Some(delta) = offset else {
                    return board.clone();
                };
                match subject {
                    DragSubject::Player { side, id } => board.move_token(side, id, delta),
                    DragSubject::Ball => board.move_ball(delta),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::annotation::ShapeKind;
    use crate::geometry::Position;

    fn board() -> Board {
        Board::default().add_token(Side::Team1).add_token(Side::Team1)
    }

    fn player(id: TokenId) -> DragSubject {
        DragSubject::Player {
            side: Side::Team1,
            id,
        }
    }

    #[test]
    fn test_drop_on_pitch_applies_net_offset() {
        let mut drag = DragController::new();
        let mode = DrawingMode::default();
        assert!(drag.drag_start(player(2), GrabZone::Glyph, &mode));
        drag.drag_move(Delta::new(3.0, 4.0));
        assert_eq!(drag.preview_offset(player(2)), Some(Delta::new(3.0, 4.0)));
        assert_eq!(drag.preview_offset(player(1)), None);

        let next = drag.drop(&board(), DropTarget::Pitch, Some(Delta::new(30.0, -10.0)));
        assert_eq!(
            next.token(Side::Team1, 2).map(|t| t.position),
            Some(Position::new(80.0, 40.0))
        );
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_without_offset_is_noop() {
        let mut drag = DragController::new();
        let before = board();
        drag.drag_start(player(1), GrabZone::Glyph, &DrawingMode::default());
        assert_eq!(drag.drop(&before, DropTarget::Pitch, None), before);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_drop_on_trash_removes_player_only() {
        let mut drag = DragController::new();
        let mode = DrawingMode::default();

        drag.drag_start(player(1), GrabZone::Glyph, &mode);
        let next = drag.drop(&board(), DropTarget::Trash, Some(Delta::new(0.0, 700.0)));
        assert!(next.token(Side::Team1, 1).is_none());
        assert!(next.token(Side::Team1, 2).is_some());

        drag.drag_start(DragSubject::Ball, GrabZone::Glyph, &mode);
        let after = drag.drop(&next, DropTarget::Trash, Some(Delta::new(0.0, 700.0)));
        assert_eq!(after, next);
    }

    #[test]
    fn test_ball_moves_by_delta() {
        let mut drag = DragController::new();
        drag.drag_start(DragSubject::Ball, GrabZone::Glyph, &DrawingMode::default());
        let next = drag.drop(&board(), DropTarget::Pitch, Some(Delta::new(-50.0, 25.0)));
        assert_eq!(next.ball(), Position::new(350.0, 325.0));
    }

    #[test]
    fn test_name_label_and_drawing_mode_block_drag() {
        let mut drag = DragController::new();
        assert!(!drag.drag_start(player(1), GrabZone::NameLabel, &DrawingMode::default()));

        let mut mode = DrawingMode::default();
        mode.toggle(ShapeKind::Arrow, "blue");
        assert!(!drag.drag_start(player(1), GrabZone::Glyph, &mode));
        assert!(!drag.is_dragging());

        // Without a session a drop changes nothing.
        let before = board();
        assert_eq!(drag.drop(&before, DropTarget::Trash, None), before);
    }

    /// Runs `f` with debug logs written into a buffer and returns the output.
    fn captured_logs(f: impl FnOnce()) -> String {
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let writer = {
            let buffer = buffer.clone();
            move || LogBuffer(buffer.clone())
        };
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();
        tracing::subscriber::with_default(subscriber, f);
        let bytes = buffer.lock().expect("log buffer poisoned").clone();
        String::from_utf8(bytes).expect("logs are utf-8")
    }

    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().expect("log buffer poisoned").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_refused_drags_are_logged() {
        let logs = captured_logs(|| {
            let mut drag = DragController::new();
            drag.drag_start(player(1), GrabZone::NameLabel, &DrawingMode::default());

            let mut mode = DrawingMode::default();
            mode.toggle(ShapeKind::Rectangle, "red");
            drag.drag_start(player(1), GrabZone::Glyph, &mode);
        });
        assert!(logs.contains("drag refused, grabbed by the name label"), "{logs}");
        assert!(logs.contains("drag refused, drawing tool active"), "{logs}");
    }

    #[test]
    fn test_one_gesture_at_a_time() {
        let mut drag = DragController::new();
        let mode = DrawingMode::default();
        assert!(drag.drag_start(player(1), GrabZone::Glyph, &mode));
        assert!(!drag.drag_start(player(2), GrabZone::Glyph, &mode));
        assert_eq!(drag.subject(), Some(player(1)));

        drag.cancel();
        assert!(drag.drag_start(player(2), GrabZone::Glyph, &mode));
    }

    #[test]
    fn test_drop_outside_keeps_position() {
        let mut drag = DragController::new();
        let before = board();
        drag.drag_start(player(1), GrabZone::Glyph, &DrawingMode::default());
        assert_eq!(
            drag.drop(&before, DropTarget::Outside, Some(Delta::new(5.0, 5.0))),
            before
        );
    }
}
