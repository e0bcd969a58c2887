//! Shared fixtures for spacer-interact integration tests.

#![allow(dead_code)]

use spacer_core::{Axis, ElementId, Position, Scene, Selection};
use spacer_interact::{Action, ActionKind, CrossingLines, InputEvent};

/// Over the intersection at (100, 100).
pub const ON_POINT: Position = Position::new(101.0, 102.0);
/// Over the horizontal line y=300 only.
pub const ON_H300: Position = Position::new(200.0, 298.0);
/// Over the bare crossing of y=300 and x=300.
pub const ON_CROSSING: Position = Position::new(299.0, 301.0);
/// Nothing nearby.
pub const EMPTY: Position = Position::new(640.0, 480.0);

/// Two lines per axis at 100 and 300, with an intersection at (100, 100).
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

    /// A representative action of `kind` whose ids all resolve in the scene.
    pub fn sample(&self, kind: ActionKind) -> Action {
        let at = Position::new(150.0, 150.0);
        let line = self.h300;
        let point = self.point;
        let lines = CrossingLines {
            horizontal: self.h300,
            vertical: self.v300,
        };
        let selection = Selection::of_line(self.v300).with_point(self.point);

        match kind {
            ActionKind::None => Action::None,
            ActionKind::Interacting => Action::Interacting { at },
            ActionKind::Selecting => Action::Selecting { selection, at },
            ActionKind::CreateLine => Action::CreateLine {
                axis: Axis::Vertical,
                at,
            },
            ActionKind::CreateIntersection => Action::CreateIntersection { at },
            ActionKind::CreateIntersectionAlongLine => {
                Action::CreateIntersectionAlongLine { line, at }
            }
            ActionKind::CreateIntersectionAtIntersection => {
                Action::CreateIntersectionAtIntersection { lines }
            }
            ActionKind::PlacingLine => Action::PlacingLine {
                axis: Axis::Horizontal,
                at,
            },
            ActionKind::PlacingIntersection => Action::PlacingIntersection { at },
            ActionKind::PlacingIntersectionAlongLine => {
                Action::PlacingIntersectionAlongLine { line, at }
            }
            ActionKind::PlacingIntersectionAtIntersection => {
                Action::PlacingIntersectionAtIntersection { lines, at }
            }
            ActionKind::HoveringLine => Action::HoveringLine { line, at },
            ActionKind::HoveringLineWhileSelecting => Action::HoveringLineWhileSelecting {
                line,
                selection,
                at,
            },
            ActionKind::HoveringSelectedLineWhileSelecting => {
                Action::HoveringSelectedLineWhileSelecting {
                    line: self.v300,
                    selection,
                    at,
                }
            }
            ActionKind::HoveringIntersection => Action::HoveringIntersection { point, at },
            ActionKind::HoveringIntersectionWhileSelecting => {
                Action::HoveringIntersectionWhileSelecting {
                    point,
                    selection: Selection::of_line(self.v300),
                    at,
                }
            }
            ActionKind::HoveringSelectedIntersectionWhileSelecting => {
                Action::HoveringSelectedIntersectionWhileSelecting {
                    point,
                    selection,
                    at,
                }
            }
            ActionKind::TouchingLine => Action::TouchingLine { line, at },
            ActionKind::TouchingLineWhileSelecting => Action::TouchingLineWhileSelecting {
                line,
                selection,
                at,
            },
            ActionKind::TouchingSelectedLineWhileSelecting => {
                Action::TouchingSelectedLineWhileSelecting {
                    line: self.v300,
                    selection,
                    at,
                }
            }
            ActionKind::TouchingIntersection => Action::TouchingIntersection { point, at },
            ActionKind::TouchingIntersectionWhileSelecting => {
                Action::TouchingIntersectionWhileSelecting {
                    point,
                    selection: Selection::of_line(self.v300),
                    at,
                }
            }
            ActionKind::TouchingSelectedIntersectionWhileSelecting => {
                Action::TouchingSelectedIntersectionWhileSelecting {
                    point,
                    selection,
                    at,
                }
            }
            ActionKind::DraggingLine => Action::DraggingLine { line, at },
            ActionKind::DraggingLineWhileSelecting => Action::DraggingLineWhileSelecting {
                line,
                selection,
                at,
            },
            ActionKind::DraggingIntersection => Action::DraggingIntersection {
                point,
                lines: CrossingLines {
                    horizontal: self.h100,
                    vertical: self.v100,
                },
                at,
            },
            ActionKind::DraggingIntersectionWhileSelecting => {
                Action::DraggingIntersectionWhileSelecting {
                    point,
                    selection: Selection::of_line(self.v300),
                    at,
                }
            }
            ActionKind::DraggingSelectionByLine => Action::DraggingSelectionByLine {
                line: self.v300,
                selection,
                at,
            },
            ActionKind::DraggingSelectionByPoint => Action::DraggingSelectionByPoint {
                point,
                selection,
                at,
            },
            ActionKind::UiHoveringElement => Action::UiHoveringElement { element: line },
            ActionKind::UiHoveringElementWhileSelecting => {
                Action::UiHoveringElementWhileSelecting {
                    element: line,
                    selection,
                    at,
                }
            }
        }
    }
}

/// Every event type, pointer events at each interesting position.
pub fn all_events(f: &Fixture) -> Vec<InputEvent> {
    let mut events = Vec::new();
    for at in [ON_POINT, ON_H300, ON_CROSSING, EMPTY] {
        events.push(InputEvent::PointerDown(at));
        events.push(InputEvent::PointerUp(at));
        events.push(InputEvent::PointerMove(at));
        events.push(InputEvent::PointerEnter(at));
    }
    events.push(InputEvent::PointerLeave);
    events.push(InputEvent::KeyboardEscape);
    events.push(InputEvent::UiHover(f.v100));
    events.push(InputEvent::UiClear);
    events
}

/// Install a test-writer tracing subscriber so failures come with logs.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("spacer_interact=debug,spacer_core=debug")
        .with_test_writer()
        .try_init();
}
