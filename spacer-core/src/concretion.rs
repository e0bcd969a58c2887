//! Derivation of concrete 2-D shapes from abstract records.
//!
//! Concretion is pure: the same lines and intersections always produce the
//! same shapes. [`ConcreteScene`] bundles one full derivation together with
//! the spatial index built over it, and is what [`Scene`](crate::Scene)
//! caches between mutations.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::scene::Grid;
use crate::spatial::SpatialEntry;
use crate::{
    Axis, ElementId, ElementKind, Intersection, Line, Position, SceneError, SceneResult, Segment,
    SpatialIndex,
};

/// A line with its concrete segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLine {
    /// The abstract record.
    pub line: Line,
    /// Segment standing in for the infinite line.
    pub segment: Segment,
}

/// An intersection with its concrete position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// The abstract record.
    pub intersection: Intersection,
    /// Where the two referenced lines cross.
    pub point: Position,
}

/// Any element with its concrete geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum Geometry {
    /// A construction line.
    Line(GeoLine),
    /// An intersection.
    Point(GeoPoint),
}

impl Geometry {
    /// Id of the underlying record.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        match self {
            Self::Line(l) => l.line.id,
            Self::Point(p) => p.intersection.id,
        }
    }

    /// Kind of the underlying record.
    #[must_use]
    pub const fn kind(&self) -> ElementKind {
        match self {
            Self::Line(l) => ElementKind::Line(l.line.axis),
            Self::Point(_) => ElementKind::Point,
        }
    }

    /// Shortest distance from `p` to the shape.
    #[must_use]
    pub fn distance_to(&self, p: Position) -> f64 {
        match self {
            Self::Line(l) => l.segment.distance_to(p),
            Self::Point(g) => g.point.distance_to(p),
        }
    }

    /// Bounding-box entry for the spatial index.
    #[must_use]
    pub fn spatial_entry(&self) -> SpatialEntry {
        match self {
            Self::Line(l) => {
                let (min, max) = l.segment.bounds();
                SpatialEntry::new(l.line.id, min, max)
            }
            Self::Point(p) => SpatialEntry::point(p.intersection.id, p.point),
        }
    }
}

/// Concretize a line as a segment from the origin edge out to `extent`.
///
/// Horizontal at `v`: `(0, v) -> (extent, v)`. Vertical at `v`:
/// `(v, 0) -> (v, extent)`.
#[must_use]
pub fn concretize_line(line: &Line, extent: f64) -> GeoLine {
    let segment = match line.axis {
        Axis::Horizontal => Segment::new(Position::new(0.0, line.v), Position::new(extent, line.v)),
        Axis::Vertical => Segment::new(Position::new(line.v, 0.0), Position::new(line.v, extent)),
    };
    GeoLine {
        line: *line,
        segment,
    }
}

/// Concretize an intersection as the crossing of its two lines.
///
/// # Errors
///
/// Returns [`SceneError::AxisMismatch`] if either line sits on the wrong
/// axis (parallel lines have no single crossing), or
/// [`SceneError::NoUniqueCrossing`] if the crossing is not a finite point.
pub fn concretize_intersection(
    intersection: &Intersection,
    horizontal: &GeoLine,
    vertical: &GeoLine,
) -> SceneResult<GeoPoint> {
    expect_axis(&horizontal.line, Axis::Horizontal)?;
    expect_axis(&vertical.line, Axis::Vertical)?;

    let point = Position::new(vertical.line.v, horizontal.line.v);
    if !point.x.is_finite() || !point.y.is_finite() {
        return Err(SceneError::NoUniqueCrossing {
            point: intersection.id,
        });
    }

    Ok(GeoPoint {
        intersection: *intersection,
        point,
    })
}

fn expect_axis(line: &Line, expected: Axis) -> SceneResult<()> {
    if line.axis == expected {
        Ok(())
    } else {
        Err(SceneError::AxisMismatch {
            id: line.id,
            expected,
            found: line.axis,
        })
    }
}

/// One complete derivation of the scene's concrete geometry.
#[derive(Debug, Clone, Default)]
pub struct ConcreteScene {
    lines: HashMap<ElementId, GeoLine>,
    points: HashMap<ElementId, GeoPoint>,
    index: SpatialIndex,
}

impl ConcreteScene {
    /// Derive every shape and index it.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid or an intersection references a missing
    /// line, or if an intersection cannot be concretized.
    pub fn build(
        lines: &HashMap<ElementId, Line>,
        intersections: &HashMap<ElementId, Intersection>,
        grid: &Grid,
        extent: f64,
    ) -> SceneResult<Self> {
        let mut geo_lines = HashMap::with_capacity(lines.len());
        for axis in Axis::ALL {
            for id in grid.axis(axis) {
                let line = lines.get(id).ok_or(SceneError::ElementNotFound(*id))?;
                geo_lines.insert(*id, concretize_line(line, extent));
            }
        }

        let mut geo_points = HashMap::with_capacity(intersections.len());
        for (id, intersection) in intersections {
            let horizontal = geo_lines
                .get(&intersection.horizontal)
                .ok_or(SceneError::ElementNotFound(intersection.horizontal))?;
            let vertical = geo_lines
                .get(&intersection.vertical)
                .ok_or(SceneError::ElementNotFound(intersection.vertical))?;
            geo_points.insert(*id, concretize_intersection(intersection, horizontal, vertical)?);
        }

        let entries = geo_lines
            .values()
            .map(|l| Geometry::Line(*l).spatial_entry())
            .chain(geo_points.values().map(|p| Geometry::Point(*p).spatial_entry()));
        let index = SpatialIndex::from_entries(entries);

        Ok(Self {
            lines: geo_lines,
            points: geo_points,
            index,
        })
    }

    /// Concrete lines by id.
    #[must_use]
    pub const fn lines(&self) -> &HashMap<ElementId, GeoLine> {
        &self.lines
    }

    /// Concrete intersections by id.
    #[must_use]
    pub const fn points(&self) -> &HashMap<ElementId, GeoPoint> {
        &self.points
    }

    /// Look up any element's geometry.
    #[must_use]
    pub fn lookup(&self, id: ElementId) -> Option<Geometry> {
        self.lines
            .get(&id)
            .map(|l| Geometry::Line(*l))
            .or_else(|| self.points.get(&id).map(|p| Geometry::Point(*p)))
    }

    /// Elements within `buffer` of `at` (box query), nearest first.
    ///
    /// Ties are broken by id so the order is stable between calls.
    #[must_use]
    pub fn hit(&self, at: Position, buffer: f64) -> Vec<Geometry> {
        let mut ranked: Vec<(f64, Geometry)> = self
            .index
            .query_around(at, buffer)
            .into_iter()
            .filter_map(|id| self.lookup(id))
            .map(|g| (g.distance_to(at), g))
            .collect();
        ranked.sort_by(|(da, a), (db, b)| da.total_cmp(db).then_with(|| a.id().cmp(&b.id())));
        ranked.into_iter().map(|(_, g)| g).collect()
    }
}
