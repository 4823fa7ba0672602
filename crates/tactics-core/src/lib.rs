//! Tactics Board Core Library
//!
//! Interaction and state engine for a football tactics board: token
//! positions and drag/drop, freehand arrows and rectangles, preset
//! formations, and validated JSON import/export of a side's layout.

#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod annotation;
pub mod board;
pub mod config;
pub mod document;
pub mod drag;
pub mod formation;
pub mod formation_file;
pub mod geometry;
pub mod session;
pub mod shortcuts;
pub mod validation;

pub use annotation::{AnnotationLayer, DrawingMode, Shape, ShapeKind, ShapeRef};
pub use board::{Board, BoardAction, Side, SideState, Token, TokenId};
pub use config::{BoardConfig, FieldDimensions, FormationLimits};
pub use document::{FormationDocument, FormationEntry};
pub use drag::{DragController, DragSubject, DropTarget, GrabZone};
pub use formation::{Formation, FormationCatalog};
pub use formation_file::{
    ExportedFile, FileReadError, FormationSource, ImportError, PendingImport, begin_import,
    export_formation, import_formation,
};
pub use geometry::{Delta, Point, Position, Rect, ShapeFrame};
pub use session::{Session, SessionAction};
pub use shortcuts::{ShortcutCommand, resolve_shortcut};
pub use validation::{
    FileMeta, ValidationError, validate_formation_document, validate_formation_file,
};
