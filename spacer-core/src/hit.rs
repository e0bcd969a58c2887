//! Priority helpers over ranked hit lists.
//!
//! Every helper takes the output of [`Scene::hit`](crate::Scene::hit),
//! which is already sorted nearest first.

use crate::{Axis, GeoLine, GeoPoint, Geometry};

/// What a point-placement cursor is over.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IntersectionHits {
    /// An existing intersection.
    Point(GeoPoint),
    /// A single nearby line; a new point would slide along it.
    AlongLine(GeoLine),
    /// One nearby line per axis; a new point would sit on their crossing.
    AtIntersection {
        /// Nearest horizontal line.
        horizontal: GeoLine,
        /// Nearest vertical line.
        vertical: GeoLine,
    },
}

/// Nearest intersection in the list.
#[must_use]
pub fn first_point(elements: &[Geometry]) -> Option<GeoPoint> {
    elements.iter().find_map(|g| match g {
        Geometry::Point(p) => Some(*p),
        Geometry::Line(_) => None,
    })
}

/// Nearest line in the list, either axis.
#[must_use]
pub fn first_line(elements: &[Geometry]) -> Option<GeoLine> {
    elements.iter().find_map(|g| match g {
        Geometry::Line(l) => Some(*l),
        Geometry::Point(_) => None,
    })
}

/// Nearest line on `axis`.
#[must_use]
pub fn first_line_of_axis(elements: &[Geometry], axis: Axis) -> Option<GeoLine> {
    elements.iter().find_map(|g| match g {
        Geometry::Line(l) if l.line.axis == axis => Some(*l),
        _ => None,
    })
}

/// The element a bare cursor should hover.
///
/// Points always outrank lines, whatever their distance, so small
/// features stay selectable next to the lines that define them.
#[must_use]
pub fn highest_priority_element(elements: &[Geometry]) -> Option<Geometry> {
    first_point(elements)
        .map(Geometry::Point)
        .or_else(|| first_line(elements).map(Geometry::Line))
}

/// Classify what a point-placement cursor is over.
///
/// An existing point wins outright. Otherwise the nearest line of each
/// axis is collected; `None` means free placement.
#[must_use]
pub fn intersection_hits(elements: &[Geometry]) -> Option<IntersectionHits> {
    if let Some(point) = first_point(elements) {
        return Some(IntersectionHits::Point(point));
    }

    match (
        first_line_of_axis(elements, Axis::Horizontal),
        first_line_of_axis(elements, Axis::Vertical),
    ) {
        (Some(horizontal), Some(vertical)) => Some(IntersectionHits::AtIntersection {
            horizontal,
            vertical,
        }),
        (Some(line), None) | (None, Some(line)) => Some(IntersectionHits::AlongLine(line)),
        (None, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::concretion::concretize_line;
    use crate::{ElementId, Intersection, Line, Position};

    fn line(axis: Axis, v: f64) -> GeoLine {
        concretize_line(&Line::new(ElementId::new(), axis, v), 1000.0)
    }

    fn point(x: f64, y: f64) -> GeoPoint {
        GeoPoint {
            intersection: Intersection {
                id: ElementId::new(),
                horizontal: ElementId::new(),
                vertical: ElementId::new(),
            },
            point: Position::new(x, y),
        }
    }

    #[test]
    fn test_point_outranks_nearer_line() {
        let l = line(Axis::Horizontal, 10.0);
        let p = point(10.0, 15.0);
        let hits = [Geometry::Line(l), Geometry::Point(p)];
        assert_eq!(highest_priority_element(&hits), Some(Geometry::Point(p)));
    }

    #[test]
    fn test_first_line_when_no_point() {
        let a = line(Axis::Vertical, 1.0);
        let b = line(Axis::Horizontal, 2.0);
        let hits = [Geometry::Line(a), Geometry::Line(b)];
        assert_eq!(highest_priority_element(&hits), Some(Geometry::Line(a)));
        assert_eq!(first_line_of_axis(&hits, Axis::Horizontal), Some(b));
    }

    #[test]
    fn test_empty_hits() {
        assert_eq!(highest_priority_element(&[]), None);
        assert_eq!(intersection_hits(&[]), None);
    }

    #[test]
    fn test_intersection_hits_one_line_per_axis() {
        let h1 = line(Axis::Horizontal, 1.0);
        let h2 = line(Axis::Horizontal, 2.0);
        let v1 = line(Axis::Vertical, 3.0);
        let hits = [Geometry::Line(h1), Geometry::Line(h2), Geometry::Line(v1)];
        assert_eq!(
            intersection_hits(&hits),
            Some(IntersectionHits::AtIntersection {
                horizontal: h1,
                vertical: v1
            })
        );
    }

    #[test]
    fn test_intersection_hits_single_axis() {
        let v = line(Axis::Vertical, 3.0);
        let hits = [Geometry::Line(v)];
        assert_eq!(intersection_hits(&hits), Some(IntersectionHits::AlongLine(v)));
    }

    #[test]
    fn test_intersection_hits_point_wins() {
        let h = line(Axis::Horizontal, 1.0);
        let p = point(0.0, 0.0);
        let hits = [Geometry::Line(h), Geometry::Point(p)];
        assert_eq!(intersection_hits(&hits), Some(IntersectionHits::Point(p)));
    }
}
