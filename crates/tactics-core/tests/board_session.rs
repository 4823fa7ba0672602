//! End-to-end sessions driven the way the pitch UI drives them.

use futures::executor::block_on;
use std::future::{Future, ready};
use tactics_core::{
    BoardAction, DragSubject, DropTarget, FileMeta, FileReadError, FormationSource, GrabZone,
    Point, Position, Session, SessionAction, ShapeKind, Side, export_formation,
    import_formation, resolve_shortcut,
};

struct DroppedFile(String);

impl FormationSource for DroppedFile {
    fn meta(&self) -> FileMeta {
        FileMeta::new("formacion_equipo_1.json", "application/json", self.0.len() as u64)
    }

    fn read_text(&self) -> impl Future<Output = Result<String, FileReadError>> {
        ready(Ok(self.0.clone()))
    }
}

fn key(session: &Session, key: &str, shift: bool) -> Session {
    let command = resolve_shortcut(key, shift, false).expect("bound key");
    session.reduce(SessionAction::Shortcut(command))
}

#[test]
fn test_build_and_annotate_a_layout() {
    let mut session = Session::default();
    for _ in 0..3 {
        session = key(&session, "a", false);
    }
    let ids: Vec<_> = session.board.side(Side::Team1).keys().copied().collect();
    assert_eq!(ids, vec![1, 2, 3]);
    assert!(
        session
            .board
            .tokens(Side::Team1)
            .all(|t| t.position == Position::new(50.0, 50.0))
    );

    // Drag player 2 to the trash, then re-add: no duplicate ids appear.
    session = session
        .reduce(SessionAction::DragStart {
            subject: DragSubject::Player {
                side: Side::Team1,
                id: 2,
            },
            zone: GrabZone::Glyph,
        })
        .reduce(SessionAction::Drop {
            target: DropTarget::Trash,
            offset: None,
        });
    let ids: Vec<_> = session.board.side(Side::Team1).keys().copied().collect();
    assert_eq!(ids, vec![1, 3]);
    session = key(&session, "a", false);
    assert_eq!(session.board.count(Side::Team1), 3);

    // Shift+F draws one red arrow, then the tool switches itself off.
    session = key(&session, "F", true)
        .reduce(SessionAction::PointerDown(Point::new(100.0, 100.0)))
        .reduce(SessionAction::PointerMove(Point::new(110.0, 90.0)))
        .reduce(SessionAction::PointerMove(Point::new(150.0, 80.0)))
        .reduce(SessionAction::PointerMove(Point::new(200.0, 60.0)))
        .reduce(SessionAction::PointerUp);

    let arrows = session.annotations.shapes(ShapeKind::Arrow);
    assert_eq!(arrows.len(), 1);
    assert_eq!(arrows[0].end, Point::new(200.0, 60.0));
    assert_eq!(arrows[0].color, "red");
    assert!(!arrows[0].drawing);
    assert!(!session.annotations.mode().is_drawing_enabled());

    // Hover the arrow and delete it through its index.
    session = session.reduce(SessionAction::HoverAt(Point::new(150.0, 80.0)));
    let hovered = session.annotations.hovered().expect("arrow hovered");
    session = session.reduce(SessionAction::DeleteShape {
        kind: hovered.kind,
        index: hovered.index,
    });
    assert!(session.annotations.is_empty());
}

#[test]
fn test_export_then_import_restores_side() {
    let session = Session::default()
        .apply_formation(Side::Team2, "4-3-3")
        .reduce(SessionAction::Board(BoardAction::RenameToken {
            side: Side::Team2,
            id: 10,
            name: "Delantero".to_string(),
        }));

    let exported = export_formation(&session.board.side_document(Side::Team2), Side::Team2)
        .expect("Failed to export");
    assert_eq!(exported.file_name, "formacion_equipo_2.json");

    let document =
        block_on(import_formation(&DroppedFile(exported.contents))).expect("Failed to import");
    let restored = Session::default().reduce(SessionAction::Import {
        side: Side::Team2,
        document,
    });
    assert_eq!(
        restored.board.side(Side::Team2),
        session.board.side(Side::Team2)
    );
}

/// Applies an import outcome the way the team toolbar does: only a validated
/// document reaches the session.
fn import_into(session: &Session, side: Side, text: &str) -> (Session, Option<String>) {
    match block_on(import_formation(&DroppedFile(text.to_string()))) {
        Ok(document) => (session.reduce(SessionAction::Import { side, document }), None),
        Err(error) => (session.clone(), Some(error.to_string())),
    }
}

#[test]
fn test_failed_import_leaves_state_untouched() {
    let session = Session::default()
        .apply_formation(Side::Team1, "4-3-3")
        .reduce(SessionAction::Board(BoardAction::RenameToken {
            side: Side::Team1,
            id: 9,
            name: "Nueve".to_string(),
        }));
    let before = session.board.side(Side::Team1).clone();

    // The same import with valid coordinates replaces the whole side.
    let (replaced, error) = import_into(&session, Side::Team1, r#"{ "1": { "left": 90, "top": 10 } }"#);
    assert_eq!(error, None);
    assert_eq!(replaced.board.count(Side::Team1), 1);

    let (after, error) = import_into(&session, Side::Team1, r#"{ "1": { "left": 900, "top": 10 } }"#);
    assert_eq!(
        error.as_deref(),
        Some("Coordinates of player 1 are out of range")
    );
    assert_eq!(after.board.side(Side::Team1), &before);
    assert_eq!(after, session);
}
