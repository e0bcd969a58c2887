//! Shared scene fixture for unit tests.

use spacer_core::{Axis, ElementId, Position, Scene};

/// ```text
///   x=100      x=300
///     |          |
/// ----P----------+------ y=100
///     |          |
/// ----+----------+------ y=300
///     |          |
/// ```
///
/// Only the crossing at (100, 100) carries an intersection.
pub struct Fixture {
    pub scene: Scene,
    pub h100: ElementId,
    pub h300: ElementId,
    pub v100: ElementId,
    pub v300: ElementId,
    pub point: ElementId,
}

impl Fixture {
    pub fn new() -> Self {
        let mut scene = Scene::new();
        let h100 = scene.create_line(Axis::Horizontal, 100.0);
        let h300 = scene.create_line(Axis::Horizontal, 300.0);
        let v100 = scene.create_line(Axis::Vertical, 100.0);
        let v300 = scene.create_line(Axis::Vertical, 300.0);
        let point = scene
            .create_intersection(h100, v100)
            .expect("fixture intersection");
        Self {
            scene,
            h100,
            h300,
            v100,
            v300,
            point,
        }
    }
}

/// Over the intersection at (100, 100).
pub const ON_POINT: Position = Position::new(102.0, 99.0);
/// Over the horizontal line y=300 only.
pub const ON_H300: Position = Position::new(200.0, 303.0);
/// Over the vertical line x=300 only.
pub const ON_V300: Position = Position::new(297.0, 200.0);
/// Over the bare crossing of y=300 and x=300.
pub const ON_CROSSING: Position = Position::new(301.0, 302.0);
/// Nothing nearby.
pub const EMPTY: Position = Position::new(500.0, 500.0);
