//! Spatial index module.
//!
//! R-tree over the bounding boxes of concrete shapes. Box queries return
//! candidate ids; exact distance ranking happens in [`Scene::hit`](crate::Scene::hit).

use rstar::{RTree, RTreeObject, AABB};

use crate::{ElementId, Position};

/// A spatial entry: one shape's axis-aligned bounding box.
#[derive(Debug, Clone, Copy)]
pub struct SpatialEntry {
    /// Element the box belongs to.
    pub id: ElementId,
    /// Minimum corner.
    pub min: [f64; 2],
    /// Maximum corner.
    pub max: [f64; 2],
}

impl SpatialEntry {
    /// Entry for a box spanning `min` to `max`.
    #[must_use]
    pub const fn new(id: ElementId, min: [f64; 2], max: [f64; 2]) -> Self {
        Self { id, min, max }
    }

    /// Entry for a single point.
    #[must_use]
    pub const fn point(id: ElementId, p: Position) -> Self {
        Self::new(id, [p.x, p.y], [p.x, p.y])
    }
}

impl RTreeObject for SpatialEntry {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

/// Bounded box-query index over scene shapes.
#[derive(Debug, Clone)]
pub struct SpatialIndex {
    tree: RTree<SpatialEntry>,
}

impl SpatialIndex {
    /// Create an empty index.
    #[must_use]
    pub fn new() -> Self {
        Self { tree: RTree::new() }
    }

    /// Bulk-load an index from entries.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = SpatialEntry>,
    {
        Self {
            tree: RTree::bulk_load(entries.into_iter().collect()),
        }
    }

    /// Insert one entry.
    pub fn insert(&mut self, entry: SpatialEntry) {
        self.tree.insert(entry);
    }

    /// Ids whose boxes intersect the rectangle.
    #[must_use]
    pub fn query_rect(&self, min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Vec<ElementId> {
        let envelope = AABB::from_corners([min_x, min_y], [max_x, max_y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    /// Ids whose boxes intersect the square of half-width `buffer` around `center`.
    #[must_use]
    pub fn query_around(&self, center: Position, buffer: f64) -> Vec<ElementId> {
        self.query_rect(
            center.x - buffer,
            center.y - buffer,
            center.x + buffer,
            center.y + buffer,
        )
    }

    /// Number of indexed entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.size()
    }

    /// Whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_query() {
        let a = ElementId::new();
        let b = ElementId::new();
        let mut index = SpatialIndex::new();
        index.insert(SpatialEntry::new(a, [0.0, 10.0], [1000.0, 10.0]));
        index.insert(SpatialEntry::point(b, Position::new(40.0, 40.0)));

        let results = index.query_around(Position::new(500.0, 12.0), 7.0);
        assert_eq!(results, vec![a]);

        let results = index.query_around(Position::new(45.0, 35.0), 7.0);
        assert_eq!(results, vec![b]);
    }

    #[test]
    fn test_query_rect_misses() {
        let index = SpatialIndex::from_entries([SpatialEntry::point(
            ElementId::new(),
            Position::new(100.0, 100.0),
        )]);
        assert_eq!(index.len(), 1);
        assert!(index.query_rect(0.0, 0.0, 50.0, 50.0).is_empty());
    }
}
