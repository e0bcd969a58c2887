//! The scene: abstract store, cached concrete geometry and writer operations.

use std::cell::OnceCell;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::cascade::{self, DEFAULT_SPACING};
use crate::concretion::ConcreteScene;
use crate::{
    Axis, ElementId, GeoLine, GeoPoint, Geometry, GridCell, Identifier, Intersection, Line,
    Position, SceneError, SceneResult, Selection,
};

/// Default half-width of the hit-test box.
pub const DEFAULT_HIT_BUFFER: f64 = 7.0;

/// Default length standing in for "infinite" when concretizing lines.
pub const DEFAULT_EXTENT: f64 = 9_999_999_999_999.0;

/// Configuration for a scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    /// Half-width of the square searched by [`Scene::hit`].
    pub hit_buffer: f64,
    /// Length of the segment drawn for each line.
    pub extent: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            hit_buffer: DEFAULT_HIT_BUFFER,
            extent: DEFAULT_EXTENT,
        }
    }
}

/// Draw and drag order of the lines on each axis.
///
/// Each list is kept ascending by line value after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// Horizontal line ids, ordered by y.
    pub horizontal: Vec<ElementId>,
    /// Vertical line ids, ordered by x.
    pub vertical: Vec<ElementId>,
}

impl Grid {
    /// The ordered ids on `axis`.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> &[ElementId] {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    fn axis_mut(&mut self, axis: Axis) -> &mut Vec<ElementId> {
        match axis {
            Axis::Horizontal => &mut self.horizontal,
            Axis::Vertical => &mut self.vertical,
        }
    }
}

/// An editing session's scene.
///
/// Reads go through a lazily built [`ConcreteScene`]; any mutation drops it
/// and the next read rebuilds it. Mutations are grouped into batches, and
/// [`Scene::revision`] advances once per batch that changed something.
///
/// # Example
///
/// ```
/// use spacer_core::{Axis, Scene};
///
/// let mut scene = Scene::new();
/// let h = scene.create_line(Axis::Horizontal, 50.0);
/// let v = scene.create_line(Axis::Vertical, 50.0);
/// let p = scene.create_intersection(h, v).unwrap();
///
/// let hits = scene.hit(52.0, 49.0).unwrap();
/// assert_eq!(hits[0].id(), p);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scene {
    config: SceneConfig,
    lines: HashMap<ElementId, Line>,
    intersections: HashMap<ElementId, Intersection>,
    grid: Grid,
    ids: Identifier,
    revision: u64,
    batch_depth: u32,
    dirty: bool,
    concrete: OnceCell<ConcreteScene>,
}

impl Scene {
    /// Create an empty scene with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create an empty scene with custom configuration.
    #[must_use]
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// The scene configuration.
    #[must_use]
    pub const fn config(&self) -> &SceneConfig {
        &self.config
    }

    // ------------------------------------------------------------------
    // Reading
    // ------------------------------------------------------------------

    /// The ordered line ids per axis.
    #[must_use]
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Abstract line record.
    #[must_use]
    pub fn line(&self, id: ElementId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Abstract intersection record.
    #[must_use]
    pub fn intersection(&self, id: ElementId) -> Option<&Intersection> {
        self.intersections.get(&id)
    }

    /// Number of lines.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of intersections.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.intersections.len()
    }

    /// Whether the scene holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.intersections.is_empty()
    }

    /// Counter advanced once per mutating batch.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// The concrete geometry for the current store, built on first use.
    ///
    /// # Errors
    ///
    /// Returns an error if the store breaks referential integrity.
    pub fn concrete(&self) -> SceneResult<&ConcreteScene> {
        if let Some(concrete) = self.concrete.get() {
            return Ok(concrete);
        }
        let built = ConcreteScene::build(
            &self.lines,
            &self.intersections,
            &self.grid,
            self.config.extent,
        )
        .inspect_err(|e| tracing::warn!("Concretion failed: {e}"))?;
        Ok(self.concrete.get_or_init(|| built))
    }

    /// Concrete lines by id.
    ///
    /// # Errors
    ///
    /// See [`Scene::concrete`].
    pub fn lines(&self) -> SceneResult<&HashMap<ElementId, GeoLine>> {
        Ok(self.concrete()?.lines())
    }

    /// Concrete intersections by id.
    ///
    /// # Errors
    ///
    /// See [`Scene::concrete`].
    pub fn points(&self) -> SceneResult<&HashMap<ElementId, GeoPoint>> {
        Ok(self.concrete()?.points())
    }

    /// Any element with its geometry.
    ///
    /// # Errors
    ///
    /// See [`Scene::concrete`].
    pub fn lookup(&self, id: ElementId) -> SceneResult<Option<Geometry>> {
        Ok(self.concrete()?.lookup(id))
    }

    /// Elements near `(x, y)`, nearest first.
    ///
    /// # Errors
    ///
    /// See [`Scene::concrete`].
    pub fn hit(&self, x: f64, y: f64) -> SceneResult<Vec<Geometry>> {
        let hits = self
            .concrete()?
            .hit(Position::new(x, y), self.config.hit_buffer);
        tracing::trace!(x, y, count = hits.len(), "Hit test");
        Ok(hits)
    }

    /// Like [`Scene::hit`], taking a [`Position`].
    ///
    /// # Errors
    ///
    /// See [`Scene::concrete`].
    pub fn hit_at(&self, at: Position) -> SceneResult<Vec<Geometry>> {
        self.hit(at.x, at.y)
    }

    fn expect_line(&self, id: ElementId) -> SceneResult<Line> {
        match self.lines.get(&id) {
            Some(line) => Ok(*line),
            None if self.intersections.contains_key(&id) => Err(SceneError::NotALine(id)),
            None => Err(SceneError::ElementNotFound(id)),
        }
    }

    fn expect_intersection(&self, id: ElementId) -> SceneResult<Intersection> {
        match self.intersections.get(&id) {
            Some(point) => Ok(*point),
            None if self.lines.contains_key(&id) => Err(SceneError::NotAPoint(id)),
            None => Err(SceneError::ElementNotFound(id)),
        }
    }

    fn expect_line_on(&self, id: ElementId, axis: Axis) -> SceneResult<Line> {
        let line = self.expect_line(id)?;
        if line.axis == axis {
            Ok(line)
        } else {
            Err(SceneError::AxisMismatch {
                id,
                expected: axis,
                found: line.axis,
            })
        }
    }

    // ------------------------------------------------------------------
    // Writing
    // ------------------------------------------------------------------

    /// Run `f` as one batch.
    ///
    /// Nested batches fold into the outermost one, so a gesture that
    /// touches many lines advances [`Scene::revision`] exactly once.
    pub fn batch<T>(&mut self, f: impl FnOnce(&mut Self) -> T) -> T {
        self.batch_depth += 1;
        let result = f(self);
        self.batch_depth -= 1;
        if self.batch_depth == 0 && self.dirty {
            self.dirty = false;
            self.revision += 1;
        }
        result
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
        self.concrete.take();
    }

    /// Create a line, or return the existing one for the same rounded value.
    ///
    /// The value is rounded to an integer and keyed by axis, so repeating
    /// the call never duplicates a line. A new line is inserted into its
    /// axis's order after every line with a value at or below its own.
    pub fn create_line(&mut self, axis: Axis, value: f64) -> ElementId {
        self.batch(|scene| scene.insert_line(axis, value))
    }

    fn insert_line(&mut self, axis: Axis, value: f64) -> ElementId {
        // `+ 0.0` folds -0.0 into 0.0 so both share a key.
        let v = value.round() + 0.0;
        let id = self.ids.next(&format!("line:{}:{v}", axis.tag()));
        if self.lines.contains_key(&id) {
            return id;
        }

        self.lines.insert(id, Line::new(id, axis, v));
        let lines = &self.lines;
        let order = self.grid.axis_mut(axis);
        let at = order.partition_point(|other| lines.get(other).is_some_and(|l| l.v <= v));
        order.insert(at, id);
        self.mark_dirty();

        tracing::debug!(%id, ?axis, v, "Created line");
        id
    }

    /// Create an intersection of a horizontal and a vertical line.
    ///
    /// Idempotent: the same pair always yields the same id.
    ///
    /// # Errors
    ///
    /// Returns an error if either id is missing, not a line, or on the
    /// wrong axis.
    pub fn create_intersection(
        &mut self,
        horizontal: ElementId,
        vertical: ElementId,
    ) -> SceneResult<ElementId> {
        self.batch(|scene| scene.insert_intersection(horizontal, vertical))
    }

    fn insert_intersection(
        &mut self,
        horizontal: ElementId,
        vertical: ElementId,
    ) -> SceneResult<ElementId> {
        self.expect_line_on(horizontal, Axis::Horizontal)?;
        self.expect_line_on(vertical, Axis::Vertical)?;

        let id = self
            .ids
            .next(&format!("intersection:{horizontal}:{vertical}"));
        if self.intersections.contains_key(&id) {
            return Ok(id);
        }

        self.intersections.insert(
            id,
            Intersection {
                id,
                horizontal,
                vertical,
            },
        );
        self.mark_dirty();

        tracing::debug!(%id, %horizontal, %vertical, "Created intersection");
        Ok(id)
    }

    /// Create an intersection at a free position: one new line per axis.
    ///
    /// # Errors
    ///
    /// Only on internal defects; see [`Scene::create_intersection`].
    pub fn create_intersection_at(&mut self, at: Position) -> SceneResult<ElementId> {
        self.batch(|scene| {
            let horizontal = scene.insert_line(Axis::Horizontal, at.y);
            let vertical = scene.insert_line(Axis::Vertical, at.x);
            scene.insert_intersection(horizontal, vertical)
        })
    }

    /// Create an intersection on an existing line.
    ///
    /// The line keeps its coordinate; a new perpendicular line is placed at
    /// the cursor's other coordinate.
    ///
    /// # Errors
    ///
    /// Returns an error if `line` is not a line in this scene.
    pub fn create_intersection_along_line(
        &mut self,
        line: ElementId,
        at: Position,
    ) -> SceneResult<ElementId> {
        self.batch(|scene| {
            let existing = scene.expect_line(line)?;
            match existing.axis {
                Axis::Vertical => {
                    let horizontal = scene.insert_line(Axis::Horizontal, at.y);
                    scene.insert_intersection(horizontal, line)
                }
                Axis::Horizontal => {
                    let vertical = scene.insert_line(Axis::Vertical, at.x);
                    scene.insert_intersection(line, vertical)
                }
            }
        })
    }

    /// Create an intersection where two existing lines cross.
    ///
    /// The lines may be given in either order.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::MalformedAction`] unless exactly one line per
    /// axis is given.
    pub fn create_intersection_at_intersection(
        &mut self,
        a: ElementId,
        b: ElementId,
    ) -> SceneResult<ElementId> {
        let (first, second) = (self.expect_line(a)?, self.expect_line(b)?);
        let (horizontal, vertical) = match (first.axis, second.axis) {
            (Axis::Horizontal, Axis::Vertical) => (a, b),
            (Axis::Vertical, Axis::Horizontal) => (b, a),
            _ => {
                tracing::warn!(%a, %b, "Crossing placement without one line per axis");
                return Err(SceneError::MalformedAction(format!(
                    "intersection at intersection needs one horizontal and one vertical line, got {a} and {b}"
                )));
            }
        };
        self.create_intersection(horizontal, vertical)
    }

    /// Drag a line to `value`, pushing neighbours per [`cascade::drag`].
    ///
    /// Neighbours are kept at least one grid cell apart (or
    /// [`DEFAULT_SPACING`] without a grid).
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not a line in this scene.
    pub fn drag_line(&mut self, id: ElementId, value: f64, grid: Option<GridCell>) -> SceneResult<()> {
        self.batch(|scene| scene.move_line(id, value, grid))
    }

    fn move_line(&mut self, id: ElementId, value: f64, grid: Option<GridCell>) -> SceneResult<()> {
        let line = self.expect_line(id)?;
        let spacing = grid.map_or(DEFAULT_SPACING, |g| g.spacing(line.axis));
        let order = self.grid.axis(line.axis);
        let index = order
            .iter()
            .position(|other| *other == id)
            .ok_or(SceneError::ElementNotFound(id))?;

        let mut values = order
            .iter()
            .map(|other| self.expect_line(*other).map(|l| l.v))
            .collect::<SceneResult<Vec<f64>>>()?;

        if !cascade::drag(&mut values, index, value, spacing) {
            return Ok(());
        }

        let order = self.grid.axis(line.axis).to_vec();
        for (other, v) in order.iter().zip(values) {
            if let Some(l) = self.lines.get_mut(other) {
                l.v = v;
            }
        }
        self.mark_dirty();

        tracing::debug!(%id, axis = ?line.axis, value, spacing, "Dragged line");
        Ok(())
    }

    /// Drag an intersection: its vertical line to `x`, its horizontal line to `y`.
    ///
    /// # Errors
    ///
    /// Returns an error if `id` is not an intersection in this scene.
    pub fn drag_intersection(
        &mut self,
        id: ElementId,
        at: Position,
        grid: Option<GridCell>,
    ) -> SceneResult<()> {
        self.batch(|scene| {
            let point = scene.expect_intersection(id)?;
            scene.move_line(point.vertical, at.x, grid)?;
            scene.move_line(point.horizontal, at.y, grid)
        })
    }

    /// Move every line implied by a selection by `delta`.
    ///
    /// Selected points contribute both of their lines. Target values are
    /// computed from the positions before any line moves, then each line is
    /// dragged in turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the selection references missing elements.
    pub fn drag_selection_by_delta(
        &mut self,
        delta: Position,
        selection: &Selection,
        grid: Option<GridCell>,
    ) -> SceneResult<()> {
        self.batch(|scene| {
            let mut ids: Vec<ElementId> = Vec::with_capacity(selection.len() * 2);
            for id in &selection.lines {
                if !ids.contains(id) {
                    ids.push(*id);
                }
            }
            for id in &selection.points {
                for line in scene.expect_intersection(*id)?.lines() {
                    if !ids.contains(&line) {
                        ids.push(line);
                    }
                }
            }

            let targets = ids
                .iter()
                .map(|id| {
                    scene
                        .expect_line(*id)
                        .map(|l| (l.id, l.v + delta.along(l.axis)))
                })
                .collect::<SceneResult<Vec<_>>>()?;

            for (id, value) in targets {
                scene.move_line(id, value, grid)?;
            }
            Ok(())
        })
    }

    /// Snap every line to the grid, keeping each axis strictly ascending.
    ///
    /// Horizontal lines snap to multiples of `cell.y`, vertical lines to
    /// multiples of `cell.x`.
    pub fn apply_grid(&mut self, cell: GridCell) {
        self.batch(|scene| {
            for axis in Axis::ALL {
                let order = scene.grid.axis(axis).to_vec();
                let mut values: Vec<f64> = order
                    .iter()
                    .filter_map(|id| scene.lines.get(id).map(|l| l.v))
                    .collect();
                if !cascade::quantize(&mut values, cell.spacing(axis)) {
                    continue;
                }
                for (id, v) in order.iter().zip(values) {
                    if let Some(line) = scene.lines.get_mut(id) {
                        line.v = v;
                    }
                }
                scene.mark_dirty();
            }
        });
        tracing::info!(x = cell.x, y = cell.y, "Applied grid");
    }
}
