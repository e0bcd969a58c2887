//! Scene elements - the abstract records the editor stores.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a line or intersection.
///
/// Lines and intersections share one id space, so a single id is enough
/// to look up any element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ElementId(Uuid);

impl ElementId {
    /// Create a new unique element ID.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Orientation of a construction line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Runs left to right; its value is a y coordinate.
    Horizontal,
    /// Runs top to bottom; its value is an x coordinate.
    Vertical,
}

impl Axis {
    /// Both axes, horizontal first.
    pub const ALL: [Self; 2] = [Self::Horizontal, Self::Vertical];

    /// The perpendicular axis.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    /// Short tag used when deriving identifier keys.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Horizontal => "h",
            Self::Vertical => "v",
        }
    }
}

/// An infinite construction line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line {
    /// Unique identifier.
    pub id: ElementId,
    /// Orientation.
    pub axis: Axis,
    /// Coordinate on the perpendicular axis (y for horizontal, x for vertical).
    pub v: f64,
}

impl Line {
    /// Create a line record.
    #[must_use]
    pub const fn new(id: ElementId, axis: Axis, v: f64) -> Self {
        Self { id, axis, v }
    }
}

/// A point placed where one horizontal and one vertical line cross.
///
/// The position is never stored; it is derived from the two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Intersection {
    /// Unique identifier.
    pub id: ElementId,
    /// The horizontal line (supplies the y coordinate).
    pub horizontal: ElementId,
    /// The vertical line (supplies the x coordinate).
    pub vertical: ElementId,
}

impl Intersection {
    /// The referenced line on the given axis.
    #[must_use]
    pub const fn line(&self, axis: Axis) -> ElementId {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
        }
    }

    /// Both referenced lines, horizontal first.
    #[must_use]
    pub const fn lines(&self) -> [ElementId; 2] {
        [self.horizontal, self.vertical]
    }
}

/// What kind of element an id refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "axis")]
pub enum ElementKind {
    /// A construction line on the given axis.
    Line(Axis),
    /// An intersection.
    Point,
}

/// A set of selected lines and points.
///
/// Insertion order is kept so drags expand the selection deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    /// Selected line ids.
    pub lines: Vec<ElementId>,
    /// Selected intersection ids.
    pub points: Vec<ElementId>,
}

impl Selection {
    /// A selection holding a single line.
    #[must_use]
    pub fn of_line(id: ElementId) -> Self {
        Self {
            lines: vec![id],
            points: Vec::new(),
        }
    }

    /// A selection holding a single point.
    #[must_use]
    pub fn of_point(id: ElementId) -> Self {
        Self {
            lines: Vec::new(),
            points: vec![id],
        }
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.points.is_empty()
    }

    /// Total number of selected elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len() + self.points.len()
    }

    /// Whether the line is selected.
    #[must_use]
    pub fn has_line(&self, id: ElementId) -> bool {
        self.lines.contains(&id)
    }

    /// Whether the point is selected.
    #[must_use]
    pub fn has_point(&self, id: ElementId) -> bool {
        self.points.contains(&id)
    }

    /// Whether the id is selected as either a line or a point.
    #[must_use]
    pub fn contains(&self, id: ElementId) -> bool {
        self.has_line(id) || self.has_point(id)
    }

    /// Add a line, ignoring duplicates.
    #[must_use]
    pub fn with_line(mut self, id: ElementId) -> Self {
        if !self.lines.contains(&id) {
            self.lines.push(id);
        }
        self
    }

    /// Add a point, ignoring duplicates.
    #[must_use]
    pub fn with_point(mut self, id: ElementId) -> Self {
        if !self.points.contains(&id) {
            self.points.push(id);
        }
        self
    }

    /// Remove a line if present.
    #[must_use]
    pub fn without_line(mut self, id: ElementId) -> Self {
        self.lines.retain(|&l| l != id);
        self
    }

    /// Remove a point if present.
    #[must_use]
    pub fn without_point(mut self, id: ElementId) -> Self {
        self.points.retain(|&p| p != id);
        self
    }
}
