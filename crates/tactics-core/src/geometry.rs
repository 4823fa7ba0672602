//! Pitch-space geometry.
//!
//! All coordinates are pixels in the pitch's local space, origin at the
//! top-left corner, `y` growing downwards.

use serde::{Deserialize, Serialize};

/// Position of a token or the ball.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

impl Position {
    pub const fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    /// Returns this position shifted by `delta`.
    pub fn offset(self, delta: Delta) -> Self {
        Self {
            left: self.left + delta.dx,
            top: self.top + delta.dy,
        }
    }
}

/// Net pointer displacement of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Delta {
    pub dx: f64,
    pub dy: f64,
}

impl Delta {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn between(from: Point, to: Point) -> Self {
        Self {
            dx: to.x - from.x,
            dy: to.y - from.y,
        }
    }
}

/// Pointer location used by the annotation layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new(f64::midpoint(self.x, other.x), f64::midpoint(self.y, other.y))
    }
}

/// Axis-aligned box with a non-negative size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Normalizes two arbitrary corners into a box.
    pub fn from_corners(a: Point, b: Point) -> Self {
        Self {
            left: a.x.min(b.x),
            top: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    /// Square box of side `size` centred on `center`.
    pub fn centered(center: Point, size: f64) -> Self {
        Self {
            left: center.x - size / 2.0,
            top: center.y - size / 2.0,
            width: size,
            height: size,
        }
    }

    /// Grows the box by `padding` on every side.
    pub fn padded(self, padding: f64) -> Self {
        Self {
            left: self.left - padding,
            top: self.top - padding,
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left
            && point.x <= self.right()
            && point.y >= self.top
            && point.y <= self.bottom()
    }

    /// Converts a pitch point into this box's local coordinates.
    pub fn to_local(&self, point: Point) -> Point {
        Point::new(point.x - self.left, point.y - self.top)
    }
}

/// Placement of a directional shape: its bounding box plus the line endpoints
/// expressed in the box's local coordinates.
///
/// `from`/`to` keep the true start→end direction, so an arrowhead drawn at
/// `to` points the way the user dragged no matter which corner of the box is
/// numerically smaller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeFrame {
    pub bounds: Rect,
    pub from: Point,
    pub to: Point,
}

impl ShapeFrame {
    pub fn new(start: Point, end: Point, padding: f64) -> Self {
        let bounds = Rect::from_corners(start, end).padded(padding);
        Self {
            bounds,
            from: bounds.to_local(start),
            to: bounds.to_local(end),
        }
    }
}

/// Reflects a horizontal coordinate across the vertical midline of a field
/// `field_width` pixels wide.
pub fn mirror_left(left: f64, field_width: f64) -> f64 {
    let midfield = field_width / 2.0;
    2.0 * midfield - left
}

/// Mirrors every position across the midline, leaving `top` untouched.
pub fn mirror_positions(positions: &[Position], field_width: f64) -> Vec<Position> {
    positions
        .iter()
        .map(|p| Position::new(mirror_left(p.left, field_width), p.top))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_from_corners_any_order() {
        let expected = Rect {
            left: 10.0,
            top: 20.0,
            width: 90.0,
            height: 40.0,
        };
        let a = Point::new(10.0, 20.0);
        let b = Point::new(100.0, 60.0);
        assert_eq!(Rect::from_corners(a, b), expected);
        assert_eq!(Rect::from_corners(b, a), expected);
        assert_eq!(
            Rect::from_corners(Point::new(10.0, 60.0), Point::new(100.0, 20.0)),
            expected
        );
    }

    #[test]
    fn test_frame_keeps_direction() {
        // Dragged up and to the left: the line must still end at the
        // top-left corner of the (padded) box.
        let frame = ShapeFrame::new(Point::new(200.0, 150.0), Point::new(100.0, 100.0), 20.0);
        assert_eq!(frame.bounds.left, 80.0);
        assert_eq!(frame.bounds.top, 80.0);
        assert_eq!(frame.bounds.width, 140.0);
        assert_eq!(frame.bounds.height, 90.0);
        assert_eq!(frame.from, Point::new(120.0, 70.0));
        assert_eq!(frame.to, Point::new(20.0, 20.0));
    }

    #[test]
    fn test_mirror_across_midline() {
        assert_eq!(mirror_left(50.0, 800.0), 750.0);
        assert_eq!(mirror_left(400.0, 800.0), 400.0);
        // Live width differs from the canonical one.
        assert_eq!(mirror_left(100.0, 1000.0), 900.0);

        let mirrored = mirror_positions(&[Position::new(150.0, 100.0)], 800.0);
        assert_eq!(mirrored, vec![Position::new(650.0, 100.0)]);
    }

    #[test]
    fn test_contains_is_inclusive() {
        let rect = Rect::centered(Point::new(0.0, 0.0), 24.0);
        assert!(rect.contains(Point::new(12.0, -12.0)));
        assert!(!rect.contains(Point::new(12.1, 0.0)));
    }
}
