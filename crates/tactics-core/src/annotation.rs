//! Freehand annotations drawn over the pitch.
//!
//! A shape lives through `pointer_down` → `pointer_move`* → `pointer_up`.
//! The shape being drawn is tracked by an explicit handle; at most one shape
//! is ever in the drawing state.

use serde::{Deserialize, Serialize};

use crate::geometry::{Point, Rect, ShapeFrame};

/// Extra hit area around an arrow's bounding box.
pub const ARROW_PADDING: f64 = 20.0;

/// Side length of the delete control shown on a hovered shape.
pub const DELETE_BUTTON_SIZE: f64 = 24.0;

/// Colour selected before the user picks one.
pub const DEFAULT_COLOR: &str = "black";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Arrow,
    Rectangle,
}

impl ShapeKind {
    /// Padding between the start/end box and the rendered frame.
    pub fn padding(self) -> f64 {
        match self {
            Self::Arrow => ARROW_PADDING,
            Self::Rectangle => 0.0,
        }
    }
}

/// A drawn arrow or rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub kind: ShapeKind,
    pub start: Point,
    pub end: Point,
    pub color: String,
    pub drawing: bool,
}

impl Shape {
    /// Box and line placement used to render the shape.
    pub fn frame(&self) -> ShapeFrame {
        ShapeFrame::new(self.start, self.end, self.kind.padding())
    }

    /// Area of the delete control, centred between start and end.
    pub fn delete_button(&self) -> Rect {
        Rect::centered(self.start.midpoint(self.end), DELETE_BUTTON_SIZE)
    }

    /// Whether `point` lies over the shape or its delete control.
    pub fn hit(&self, point: Point) -> bool {
        self.frame().bounds.contains(point) || self.delete_button().contains(point)
    }
}

/// Index of a shape within its kind's list.
///
/// Indices shift when an earlier shape of the same kind is deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeRef {
    pub kind: ShapeKind,
    pub index: usize,
}

impl ShapeRef {
    pub const fn new(kind: ShapeKind, index: usize) -> Self {
        Self { kind, index }
    }
}

/// Session-wide tool selection. One tool at most is active.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawingMode {
    pub active_tool: Option<ShapeKind>,
    pub active_color: String,
}

impl Default for DrawingMode {
    fn default() -> Self {
        Self {
            active_tool: None,
            active_color: DEFAULT_COLOR.to_string(),
        }
    }
}

impl DrawingMode {
    /// Selecting the active (tool, colour) pair turns drawing off; any other
    /// pair becomes the active one.
    pub fn toggle(&mut self, tool: ShapeKind, color: &str) {
        if self.active_tool == Some(tool) && self.active_color == color {
            self.active_tool = None;
        } else {
            self.active_tool = Some(tool);
            self.active_color = color.to_string();
        }
    }

    pub fn is_active(&self, tool: ShapeKind, color: &str) -> bool {
        self.active_tool == Some(tool) && self.active_color == color
    }

    pub fn is_drawing_enabled(&self) -> bool {
        self.active_tool.is_some()
    }
}

/// Shapes on the pitch plus the drawing state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AnnotationLayer {
    arrows: Vec<Shape>,
    rectangles: Vec<Shape>,
    mode: DrawingMode,
    current: Option<ShapeRef>,
    hovered: Option<ShapeRef>,
}

impl AnnotationLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> &DrawingMode {
        &self.mode
    }

    pub fn toggle_tool(&mut self, tool: ShapeKind, color: &str) {
        self.mode.toggle(tool, color);
    }

    pub fn toggle_arrow_mode(&mut self, color: &str) {
        self.mode.toggle(ShapeKind::Arrow, color);
    }

    pub fn toggle_rectangle_mode(&mut self, color: &str) {
        self.mode.toggle(ShapeKind::Rectangle, color);
    }

    pub fn shapes(&self, kind: ShapeKind) -> &[Shape] {
        match kind {
            ShapeKind::Arrow => &self.arrows,
            ShapeKind::Rectangle => &self.rectangles,
        }
    }

    fn shapes_mut(&mut self, kind: ShapeKind) -> &mut Vec<Shape> {
        match kind {
            ShapeKind::Arrow => &mut self.arrows,
            ShapeKind::Rectangle => &mut self.rectangles,
        }
    }

    /// Every shape in paint order: arrows first, then rectangles.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (ShapeRef, &Shape)> {
        let arrows = self
            .arrows
            .iter()
            .enumerate()
            .map(|(i, s)| (ShapeRef::new(ShapeKind::Arrow, i), s));
        let rectangles = self
            .rectangles
            .iter()
            .enumerate()
            .map(|(i, s)| (ShapeRef::new(ShapeKind::Rectangle, i), s));
        arrows.chain(rectangles)
    }

    pub fn get(&self, shape: ShapeRef) -> Option<&Shape> {
        self.shapes(shape.kind).get(shape.index)
    }

    fn get_mut(&mut self, shape: ShapeRef) -> Option<&mut Shape> {
        self.shapes_mut(shape.kind).get_mut(shape.index)
    }

    pub fn len(&self) -> usize {
        self.arrows.len() + self.rectangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The shape currently being drawn.
    pub fn current(&self) -> Option<ShapeRef> {
        self.current
    }

    pub fn hovered(&self) -> Option<ShapeRef> {
        self.hovered
    }

    /// Starts a shape at `pos` with the active tool and colour.
    ///
    /// Returns `false` when no tool is active.
    pub fn pointer_down(&mut self, pos: Point) -> bool {
        let Some(kind) = self.mode.active_tool else {
            return false;
        };

        // A release that never reached us leaves the previous shape drawing.
        if let Some(stale) = self.current.take() {
            if let Some(shape) = self.get_mut(stale) {
                shape.drawing = false;
            }
        }

        let color = self.mode.active_color.clone();
        let list = self.shapes_mut(kind);
        list.push(Shape {
            kind,
            start: pos,
            end: pos,
            color,
            drawing: true,
        });
        let index = list.len() - 1;
        self.current = Some(ShapeRef::new(kind, index));
        tracing::debug!(?kind, index, "shape started");
        true
    }

    /// Moves the end point of the shape being drawn.
    pub fn pointer_move(&mut self, pos: Point) -> bool {
        let Some(current) = self.current else {
            return false;
        };
        match self.get_mut(current) {
            Some(shape) if shape.drawing => {
                shape.end = pos;
                true
            }
            _ => false,
        }
    }

    /// Freezes the shape being drawn and turns the tool off.
    ///
    /// Returns the kind of the completed shape.
    pub fn pointer_up(&mut self) -> Option<ShapeKind> {
        let current = self.current.take()?;
        let shape = self.get_mut(current)?;
        shape.drawing = false;
        self.mode.active_tool = None;
        tracing::debug!(kind = ?current.kind, index = current.index, "shape completed");
        Some(current.kind)
    }

    /// Sets the hovered shape. Unknown references clear the hover.
    pub fn hover(&mut self, shape: Option<ShapeRef>) {
        self.hovered = shape.filter(|s| self.get(*s).is_some());
    }

    /// Resolves hover from a pointer position.
    ///
    /// The hovered shape keeps the hover while the pointer stays inside its
    /// region, delete control included; otherwise the topmost shape under the
    /// pointer takes it.
    pub fn hover_at(&mut self, point: Point) -> Option<ShapeRef> {
        if let Some(hovered) = self.hovered {
            if self.get(hovered).is_some_and(|s| s.hit(point)) {
                return Some(hovered);
            }
        }

        let top = self
            .iter()
            .filter(|(_, s)| !s.drawing && s.hit(point))
            .map(|(r, _)| r)
            .next_back();
        self.hovered = top;
        top
    }

    /// Removes one shape. Later shapes of the same kind move down one index.
    pub fn delete_shape(&mut self, kind: ShapeKind, index: usize) -> bool {
        let list = self.shapes_mut(kind);
        if index >= list.len() {
            return false;
        }
        list.remove(index);

        let reindex = |slot: Option<ShapeRef>| match slot {
            Some(r) if r.kind == kind && r.index == index => None,
            Some(r) if r.kind == kind && r.index > index => Some(ShapeRef::new(kind, r.index - 1)),
            other => other,
        };
        self.current = reindex(self.current);
        self.hovered = reindex(self.hovered);
        tracing::debug!(?kind, index, "shape deleted");
        true
    }

    /// Removes every shape.
    pub fn clear_shapes(&mut self) {
        self.arrows.clear();
        self.rectangles.clear();
        self.current = None;
        self.hovered = None;
    }
}
