//! Hover and placement logic for a cursor with nothing in hand.

use spacer_core::hit::{first_line_of_axis, highest_priority_element, intersection_hits};
use spacer_core::{Axis, Geometry, IntersectionHits, Position, Scene, SceneResult, Selection};

use crate::{Action, CrossingLines, Mode};

/// The action for a cursor arriving at `at` with nothing touched or dragged.
///
/// If `current` carries a selection, the selection is kept and the cursor
/// hovers whatever element ranks highest. Otherwise the placement mode
/// decides what the cursor targets.
///
/// # Errors
///
/// Returns an error if the scene's geometry cannot be derived.
pub fn compute_enter(
    current: &Action,
    scene: &Scene,
    mode: Mode,
    at: Position,
) -> SceneResult<Action> {
    if let Some(selection) = current.selection() {
        return hover_while_selecting(selection, scene, at);
    }

    let hits = scene.hit_at(at)?;
    Ok(match mode {
        Mode::None => enter_without_mode(&hits, at),
        Mode::HorizontalLine => enter_line_mode(&hits, Axis::Horizontal, at),
        Mode::VerticalLine => enter_line_mode(&hits, Axis::Vertical, at),
        Mode::Point => enter_point_mode(&hits, at),
    })
}

/// Hover under an existing selection, marking selected targets as such.
///
/// The placement mode is not consulted: any line or point can be hovered
/// while a selection is held.
pub(super) fn hover_while_selecting(
    selection: &Selection,
    scene: &Scene,
    at: Position,
) -> SceneResult<Action> {
    let selection = selection.clone();
    let hits = scene.hit_at(at)?;
    Ok(match highest_priority_element(&hits) {
        Some(Geometry::Line(l)) if selection.has_line(l.line.id) => {
            Action::HoveringSelectedLineWhileSelecting {
                line: l.line.id,
                selection,
                at,
            }
        }
        Some(Geometry::Line(l)) => Action::HoveringLineWhileSelecting {
            line: l.line.id,
            selection,
            at,
        },
        Some(Geometry::Point(p)) if selection.has_point(p.intersection.id) => {
            Action::HoveringSelectedIntersectionWhileSelecting {
                point: p.intersection.id,
                selection,
                at,
            }
        }
        Some(Geometry::Point(p)) => Action::HoveringIntersectionWhileSelecting {
            point: p.intersection.id,
            selection,
            at,
        },
        None => Action::Selecting { selection, at },
    })
}

fn enter_without_mode(hits: &[Geometry], at: Position) -> Action {
    match highest_priority_element(hits) {
        Some(Geometry::Point(p)) => Action::HoveringIntersection {
            point: p.intersection.id,
            at,
        },
        Some(Geometry::Line(l)) => Action::HoveringLine {
            line: l.line.id,
            at,
        },
        None => Action::Interacting { at },
    }
}

fn enter_line_mode(hits: &[Geometry], axis: Axis, at: Position) -> Action {
    match first_line_of_axis(hits, axis) {
        Some(l) => Action::HoveringLine {
            line: l.line.id,
            at,
        },
        None => Action::PlacingLine { axis, at },
    }
}

fn enter_point_mode(hits: &[Geometry], at: Position) -> Action {
    match intersection_hits(hits) {
        Some(IntersectionHits::Point(p)) => Action::HoveringIntersection {
            point: p.intersection.id,
            at,
        },
        Some(IntersectionHits::AlongLine(l)) => Action::PlacingIntersectionAlongLine {
            line: l.line.id,
            at,
        },
        Some(IntersectionHits::AtIntersection {
            horizontal,
            vertical,
        }) => Action::PlacingIntersectionAtIntersection {
            lines: CrossingLines {
                horizontal: horizontal.line.id,
                vertical: vertical.line.id,
            },
            at,
        },
        None => Action::PlacingIntersection { at },
    }
}
