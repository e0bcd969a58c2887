//! Button release: selection toggles, placements and the end of drags.

use spacer_core::{Position, Scene, SceneResult, Selection};

use super::enter::compute_enter;
use crate::{Action, Mode};

/// Next action after the primary button is released at `at`.
pub(super) fn pointer_up(
    current: &Action,
    scene: &Scene,
    mode: Mode,
    at: Position,
) -> SceneResult<Action> {
    Ok(match current.clone() {
        // A touch released without moving is a click: toggle selection.
        Action::TouchingLine { line, .. } => Action::HoveringSelectedLineWhileSelecting {
            line,
            selection: Selection::of_line(line),
            at,
        },
        Action::TouchingIntersection { point, .. } => {
            Action::HoveringSelectedIntersectionWhileSelecting {
                point,
                selection: Selection::of_point(point),
                at,
            }
        }
        Action::TouchingLineWhileSelecting {
            line, selection, ..
        } => Action::HoveringSelectedLineWhileSelecting {
            line,
            selection: selection.with_line(line),
            at,
        },
        Action::TouchingIntersectionWhileSelecting {
            point, selection, ..
        } => Action::HoveringSelectedIntersectionWhileSelecting {
            point,
            selection: selection.with_point(point),
            at,
        },
        Action::TouchingSelectedLineWhileSelecting {
            line, selection, ..
        } => {
            let selection = selection.without_line(line);
            if selection.is_empty() {
                Action::HoveringLine { line, at }
            } else {
                Action::HoveringLineWhileSelecting {
                    line,
                    selection,
                    at,
                }
            }
        }
        Action::TouchingSelectedIntersectionWhileSelecting {
            point, selection, ..
        } => {
            let selection = selection.without_point(point);
            if selection.is_empty() {
                Action::HoveringIntersection { point, at }
            } else {
                Action::HoveringIntersectionWhileSelecting {
                    point,
                    selection,
                    at,
                }
            }
        }

        Action::PlacingLine { axis, .. } => Action::CreateLine { axis, at },
        Action::PlacingIntersection { .. } => Action::CreateIntersection { at },
        Action::PlacingIntersectionAlongLine { line, .. } => {
            Action::CreateIntersectionAlongLine { line, at }
        }
        Action::PlacingIntersectionAtIntersection { lines, .. } => {
            Action::CreateIntersectionAtIntersection { lines }
        }
        Action::CreateLine { .. }
        | Action::CreateIntersection { .. }
        | Action::CreateIntersectionAlongLine { .. }
        | Action::CreateIntersectionAtIntersection { .. } => {
            compute_enter(current, scene, mode, at)?
        }

        Action::DraggingLine { line, .. } => Action::HoveringLine { line, at },
        Action::DraggingIntersection { point, .. } => Action::HoveringIntersection { point, at },
        Action::DraggingLineWhileSelecting {
            line, selection, ..
        } => Action::HoveringLineWhileSelecting {
            line,
            selection,
            at,
        },
        Action::DraggingIntersectionWhileSelecting {
            point, selection, ..
        } => Action::HoveringIntersectionWhileSelecting {
            point,
            selection,
            at,
        },
        Action::DraggingSelectionByLine {
            line, selection, ..
        } => Action::HoveringSelectedLineWhileSelecting {
            line,
            selection,
            at,
        },
        Action::DraggingSelectionByPoint {
            point, selection, ..
        } => Action::HoveringSelectedIntersectionWhileSelecting {
            point,
            selection,
            at,
        },

        other => other,
    })
}
