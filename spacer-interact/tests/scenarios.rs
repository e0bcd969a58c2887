//! End-to-end editing scenarios driven through a [`Session`].

mod common;

use common::init_tracing;
use spacer_core::{Axis, Position, Selection};
use spacer_interact::{Action, ActionKind, InputEvent, Mode, Session};

fn at(x: f64, y: f64) -> Position {
    Position::new(x, y)
}

fn line_value(session: &Session, axis: Axis, index: usize) -> f64 {
    let id = session.scene().grid().axis(axis)[index];
    session.scene().line(id).expect("line").v
}

/// Place horizontal lines by clicking in line mode.
fn place_horizontal(session: &mut Session, y: f64) {
    session.set_mode(Mode::HorizontalLine);
    session
        .handle(InputEvent::PointerMove(at(500.0, y)))
        .expect("move");
    session
        .handle(InputEvent::PointerUp(at(500.0, y)))
        .expect("up");
    session.set_mode(Mode::None);
}

// ===========================================================================
// Placement
// ===========================================================================

/// Point mode on an empty scene: enter then release creates one
/// intersection with one line per axis.
#[test]
fn test_place_intersection_on_empty_scene() {
    init_tracing();
    let mut session = Session::new();
    session.set_mode(Mode::Point);

    let action = session
        .handle(InputEvent::PointerEnter(at(50.0, 50.0)))
        .expect("enter");
    assert_eq!(action, &Action::PlacingIntersection { at: at(50.0, 50.0) });

    let action = session
        .handle(InputEvent::PointerUp(at(50.0, 50.0)))
        .expect("up");
    assert_eq!(action, &Action::CreateIntersection { at: at(50.0, 50.0) });

    let scene = session.scene();
    let lines = scene.lines().expect("lines");
    assert_eq!(lines.len(), 2);
    for axis in Axis::ALL {
        let ids = scene.grid().axis(axis);
        assert_eq!(ids.len(), 1);
        let line = lines[&ids[0]].line;
        assert_eq!(line.axis, axis);
        assert!((line.v - 50.0).abs() < f64::EPSILON);
    }

    let points = scene.points().expect("points");
    assert_eq!(points.len(), 1);
    let point = points.values().next().expect("point");
    assert_eq!(point.intersection.horizontal, scene.grid().horizontal[0]);
    assert_eq!(point.intersection.vertical, scene.grid().vertical[0]);
    assert_eq!(point.point, at(50.0, 50.0));
}

/// Releasing twice at the same spot never duplicates elements.
#[test]
fn test_repeated_placement_is_idempotent() {
    let mut session = Session::new();
    session.set_mode(Mode::Point);
    for _ in 0..3 {
        session
            .handle(InputEvent::PointerMove(at(80.0, 40.0)))
            .expect("move");
        session
            .handle(InputEvent::PointerUp(at(80.0, 40.0)))
            .expect("up");
    }
    assert_eq!(session.scene().point_count(), 1);
    assert_eq!(session.scene().line_count(), 2);
}

/// In point mode, hovering an existing line snaps the new point onto it.
#[test]
fn test_place_intersection_along_line() {
    let mut session = Session::new();
    place_horizontal(&mut session, 200.0);
    session.set_mode(Mode::Point);

    let action = session
        .handle(InputEvent::PointerMove(at(120.0, 203.0)))
        .expect("move");
    assert_eq!(action.kind(), ActionKind::PlacingIntersectionAlongLine);
    session
        .handle(InputEvent::PointerUp(at(120.0, 203.0)))
        .expect("up");

    let scene = session.scene();
    assert_eq!(scene.grid().horizontal.len(), 1);
    let point = scene.points().expect("points").values().next().copied().expect("point");
    assert_eq!(point.point, at(120.0, 200.0));
}

/// With a grid on, pointer positions snap before placement.
#[test]
fn test_grid_snaps_placement() {
    let mut session = Session::new();
    session.set_grid(25.0, 25.0).expect("grid");
    session.set_mode(Mode::VerticalLine);
    session
        .handle(InputEvent::PointerMove(at(61.0, 10.0)))
        .expect("move");
    session
        .handle(InputEvent::PointerUp(at(61.0, 10.0)))
        .expect("up");
    assert!((line_value(&session, Axis::Vertical, 0) - 50.0).abs() < f64::EPSILON);
}

/// Clicks just either side of the origin snap onto one shared point.
#[test]
fn test_grid_snaps_both_sides_of_origin_to_one_point() {
    let mut session = Session::new();
    session.set_grid(10.0, 10.0).expect("grid");
    session.set_mode(Mode::Point);
    for p in [at(-3.0, -2.0), at(2.0, 3.0)] {
        session.handle(InputEvent::PointerMove(p)).expect("move");
        session.handle(InputEvent::PointerUp(p)).expect("up");
    }
    assert_eq!(session.scene().point_count(), 1);
    assert_eq!(session.scene().line_count(), 2);
}

// ===========================================================================
// Dragging
// ===========================================================================

/// Dragging line A past line B pushes B one unit beyond A.
#[test]
fn test_drag_line_overtakes_neighbour() {
    init_tracing();
    let mut session = Session::new();
    place_horizontal(&mut session, 10.0);
    place_horizontal(&mut session, 20.0);
    let a = session.scene().grid().horizontal[0];
    let b = session.scene().grid().horizontal[1];

    let action = session
        .handle(InputEvent::PointerMove(at(500.0, 9.0)))
        .expect("move");
    assert_eq!(action, &Action::HoveringLine { line: a, at: at(500.0, 9.0) });
    session
        .handle(InputEvent::PointerDown(at(500.0, 9.0)))
        .expect("down");

    let action = session
        .handle(InputEvent::PointerMove(at(500.0, 25.0)))
        .expect("move");
    assert_eq!(action.kind(), ActionKind::DraggingLine);

    assert!((session.scene().line(a).expect("a").v - 25.0).abs() < f64::EPSILON);
    assert!((session.scene().line(b).expect("b").v - 26.0).abs() < f64::EPSILON);
    assert_eq!(session.scene().grid().horizontal, vec![a, b]);

    let action = session
        .handle(InputEvent::PointerUp(at(500.0, 25.0)))
        .expect("up");
    assert_eq!(action, &Action::HoveringLine { line: a, at: at(500.0, 25.0) });
}

/// Each drag step is a single scene revision, even when several lines move.
#[test]
fn test_selection_drag_moves_together() {
    let mut session = Session::new();
    session.set_mode(Mode::Point);
    for p in [at(100.0, 100.0), at(200.0, 200.0)] {
        session.handle(InputEvent::PointerMove(p)).expect("move");
        session.handle(InputEvent::PointerUp(p)).expect("up");
    }
    session.set_mode(Mode::None);

    // Select both points.
    for p in [at(100.0, 100.0), at(200.0, 200.0)] {
        session.handle(InputEvent::PointerMove(p)).expect("move");
        session.handle(InputEvent::PointerDown(p)).expect("down");
        session.handle(InputEvent::PointerUp(p)).expect("up");
    }
    let selected = session.action().selection().cloned().expect("selection");
    assert_eq!(selected.points.len(), 2);

    // Grab the second one and drag by (+10, -30).
    session
        .handle(InputEvent::PointerDown(at(200.0, 200.0)))
        .expect("down");
    let before = session.scene().revision();
    let action = session
        .handle(InputEvent::PointerMove(at(210.0, 170.0)))
        .expect("move");
    assert_eq!(action.kind(), ActionKind::DraggingSelectionByPoint);
    assert_eq!(session.scene().revision(), before + 1);

    let mut positions: Vec<Position> = session
        .scene()
        .points()
        .expect("points")
        .values()
        .map(|p| p.point)
        .collect();
    positions.sort_by(|a, b| a.x.total_cmp(&b.x));
    assert_eq!(positions, vec![at(110.0, 70.0), at(210.0, 170.0)]);

    let action = session
        .handle(InputEvent::PointerUp(at(210.0, 170.0)))
        .expect("up");
    assert_eq!(action.kind(), ActionKind::HoveringSelectedIntersectionWhileSelecting);
    assert_eq!(action.selection(), Some(&selected));
}

// ===========================================================================
// Selection lifetime
// ===========================================================================

/// Leaving the canvas keeps the selection; Escape drops it.
#[test]
fn test_selection_survives_leave_but_not_escape() {
    let mut session = Session::new();
    place_horizontal(&mut session, 60.0);
    let line = session.scene().grid().horizontal[0];

    session
        .handle(InputEvent::PointerMove(at(300.0, 60.0)))
        .expect("move");
    session
        .handle(InputEvent::PointerDown(at(300.0, 60.0)))
        .expect("down");
    session
        .handle(InputEvent::PointerUp(at(300.0, 60.0)))
        .expect("up");

    let action = session.handle(InputEvent::PointerLeave).expect("leave");
    assert_eq!(
        action,
        &Action::Selecting {
            selection: Selection::of_line(line),
            at: at(300.0, 60.0)
        }
    );

    let action = session
        .handle(InputEvent::PointerEnter(at(300.0, 61.0)))
        .expect("enter");
    assert_eq!(action.kind(), ActionKind::HoveringSelectedLineWhileSelecting);

    let action = session.escape().expect("escape");
    assert_eq!(action, &Action::HoveringLine { line, at: at(300.0, 61.0) });
}

/// Hovering an element in a side panel composes with the canvas selection.
#[test]
fn test_ui_hover_keeps_selection() {
    let mut session = Session::new();
    place_horizontal(&mut session, 60.0);
    place_horizontal(&mut session, 90.0);
    let first = session.scene().grid().horizontal[0];
    let second = session.scene().grid().horizontal[1];

    session
        .handle(InputEvent::PointerMove(at(300.0, 60.0)))
        .expect("move");
    session
        .handle(InputEvent::PointerDown(at(300.0, 60.0)))
        .expect("down");
    session
        .handle(InputEvent::PointerUp(at(300.0, 60.0)))
        .expect("up");
    session.handle(InputEvent::PointerLeave).expect("leave");

    let action = session.handle(InputEvent::UiHover(second)).expect("hover");
    assert_eq!(action.kind(), ActionKind::UiHoveringElementWhileSelecting);
    assert!(action.references(first));
    assert!(action.references(second));

    let action = session.handle(InputEvent::UiClear).expect("clear");
    assert_eq!(action.kind(), ActionKind::Selecting);
    assert!(!action.references(second));
}
