//! Plain 2-D value types shared by the scene and the interaction layer.

use serde::{Deserialize, Serialize};

use crate::Axis;

/// A position (or displacement) in scene coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The component a line on `axis` is measured along.
    ///
    /// Horizontal lines sit at a y value, vertical lines at an x value.
    #[must_use]
    pub const fn along(self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.y,
            Axis::Vertical => self.x,
        }
    }

    /// Euclidean distance to another position.
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A finite line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// First endpoint.
    pub start: Position,
    /// Second endpoint.
    pub end: Position,
}

impl Segment {
    /// Create a segment between two endpoints.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    #[must_use]
    pub fn bounds(&self) -> ([f64; 2], [f64; 2]) {
        (
            [self.start.x.min(self.end.x), self.start.y.min(self.end.y)],
            [self.start.x.max(self.end.x), self.start.y.max(self.end.y)],
        )
    }

    /// Shortest distance from `p` to any point on the segment.
    #[must_use]
    pub fn distance_to(&self, p: Position) -> f64 {
        let dx = self.end.x - self.start.x;
        let dy = self.end.y - self.start.y;
        let len_sq = dx * dx + dy * dy;
        if len_sq == 0.0 {
            return self.start.distance_to(p);
        }
        let t = (((p.x - self.start.x) * dx + (p.y - self.start.y) * dy) / len_sq).clamp(0.0, 1.0);
        Position::new(self.start.x + t * dx, self.start.y + t * dy).distance_to(p)
    }
}

/// Grid cell size used for snapping and drag spacing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    /// Cell width (spacing between vertical lines).
    pub x: f64,
    /// Cell height (spacing between horizontal lines).
    pub y: f64,
}

impl GridCell {
    /// Create a grid cell. Callers are expected to pass positive sizes.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Spacing between consecutive lines on `axis`.
    #[must_use]
    pub const fn spacing(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.y,
            Axis::Vertical => self.x,
        }
    }

    /// Round each coordinate to the nearest multiple of the cell size.
    #[must_use]
    pub fn snap(&self, p: Position) -> Position {
        Position::new(snap_value(p.x, self.x), snap_value(p.y, self.y))
    }
}

/// Round `v` to the nearest multiple of `cell`.
#[must_use]
pub fn snap_value(v: f64, cell: f64) -> f64 {
    (v / cell).round() * cell + 0.0
}
