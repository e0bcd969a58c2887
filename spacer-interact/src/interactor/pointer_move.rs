//! Cursor movement: hover updates, drag promotion and drag tracking.

use spacer_core::{Position, Scene, SceneError, SceneResult};

use super::enter::{compute_enter, hover_while_selecting};
use crate::{Action, CrossingLines, Mode};

/// Next action after the cursor moves to (or enters at) `at`.
pub(super) fn pointer_move(
    current: &Action,
    scene: &Scene,
    mode: Mode,
    at: Position,
) -> SceneResult<Action> {
    Ok(match current {
        Action::None
        | Action::Interacting { .. }
        | Action::CreateLine { .. }
        | Action::CreateIntersection { .. }
        | Action::CreateIntersectionAlongLine { .. }
        | Action::CreateIntersectionAtIntersection { .. }
        | Action::PlacingLine { .. }
        | Action::PlacingIntersection { .. }
        | Action::PlacingIntersectionAlongLine { .. }
        | Action::PlacingIntersectionAtIntersection { .. }
        | Action::HoveringLine { .. }
        | Action::HoveringIntersection { .. }
        | Action::UiHoveringElement { .. } => compute_enter(current, scene, mode, at)?,

        Action::Selecting { selection, .. }
        | Action::HoveringLineWhileSelecting { selection, .. }
        | Action::HoveringSelectedLineWhileSelecting { selection, .. }
        | Action::HoveringIntersectionWhileSelecting { selection, .. }
        | Action::HoveringSelectedIntersectionWhileSelecting { selection, .. }
        | Action::UiHoveringElementWhileSelecting { selection, .. } => {
            hover_while_selecting(selection, scene, at)?
        }

        Action::TouchingLine { line, .. } | Action::DraggingLine { line, .. } => {
            Action::DraggingLine { line: *line, at }
        }
        Action::TouchingLineWhileSelecting {
            line, selection, ..
        }
        | Action::DraggingLineWhileSelecting {
            line, selection, ..
        } => Action::DraggingLineWhileSelecting {
            line: *line,
            selection: selection.clone(),
            at,
        },
        Action::TouchingSelectedLineWhileSelecting {
            line, selection, ..
        }
        | Action::DraggingSelectionByLine {
            line, selection, ..
        } => Action::DraggingSelectionByLine {
            line: *line,
            selection: selection.clone(),
            at,
        },
        Action::TouchingIntersectionWhileSelecting {
            point, selection, ..
        }
        | Action::DraggingIntersectionWhileSelecting {
            point, selection, ..
        } => Action::DraggingIntersectionWhileSelecting {
            point: *point,
            selection: selection.clone(),
            at,
        },
        Action::TouchingSelectedIntersectionWhileSelecting {
            point, selection, ..
        }
        | Action::DraggingSelectionByPoint {
            point, selection, ..
        } => Action::DraggingSelectionByPoint {
            point: *point,
            selection: selection.clone(),
            at,
        },
        Action::TouchingIntersection { point, .. } => {
            let intersection = scene.intersection(*point).ok_or_else(|| {
                tracing::warn!(%point, "Touched intersection is missing from the scene");
                SceneError::ElementNotFound(*point)
            })?;
            Action::DraggingIntersection {
                point: *point,
                lines: CrossingLines {
                    horizontal: intersection.horizontal,
                    vertical: intersection.vertical,
                },
                at,
            }
        }
        Action::DraggingIntersection { point, lines, .. } => Action::DraggingIntersection {
            point: *point,
            lines: *lines,
            at,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{Fixture, EMPTY, ON_H300, ON_POINT};
    use crate::ActionKind;
    use spacer_core::Selection;

    #[test]
    fn test_touching_line_starts_drag() {
        let f = Fixture::new();
        let current = Action::TouchingLine {
            line: f.h300,
            at: ON_H300,
        };
        let next = pointer_move(&current, &f.scene, Mode::None, EMPTY).expect("move");
        assert_eq!(next, Action::DraggingLine { line: f.h300, at: EMPTY });
    }

    #[test]
    fn test_touching_intersection_carries_its_lines() {
        let f = Fixture::new();
        let current = Action::TouchingIntersection {
            point: f.point,
            at: ON_POINT,
        };
        let next = pointer_move(&current, &f.scene, Mode::None, EMPTY).expect("move");
        assert_eq!(
            next,
            Action::DraggingIntersection {
                point: f.point,
                lines: CrossingLines {
                    horizontal: f.h100,
                    vertical: f.v100
                },
                at: EMPTY
            }
        );
    }

    #[test]
    fn test_touching_missing_intersection_is_an_error() {
        let f = Fixture::new();
        let current = Action::TouchingIntersection {
            point: spacer_core::ElementId::new(),
            at: ON_POINT,
        };
        let result = pointer_move(&current, &f.scene, Mode::None, EMPTY);
        assert!(matches!(result, Err(SceneError::ElementNotFound(_))));
    }

    #[test]
    fn test_touching_selected_starts_selection_drag() {
        let f = Fixture::new();
        let selection = Selection::of_point(f.point).with_line(f.h300);
        let current = Action::TouchingSelectedLineWhileSelecting {
            line: f.h300,
            selection: selection.clone(),
            at: ON_H300,
        };
        let next = pointer_move(&current, &f.scene, Mode::None, EMPTY).expect("move");
        assert_eq!(
            next,
            Action::DraggingSelectionByLine {
                line: f.h300,
                selection,
                at: EMPTY
            }
        );
    }

    #[test]
    fn test_dragging_tracks_cursor() {
        let f = Fixture::new();
        let current = Action::DraggingLine {
            line: f.v300,
            at: ON_H300,
        };
        let next = pointer_move(&current, &f.scene, Mode::Point, EMPTY).expect("move");
        assert_eq!(next.kind(), ActionKind::DraggingLine);
        assert_eq!(next.position(), Some(EMPTY));
    }

    #[test]
    fn test_selecting_hovers_without_dropping_selection() {
        let f = Fixture::new();
        let selection = Selection::of_line(f.h300);
        let current = Action::HoveringSelectedLineWhileSelecting {
            line: f.h300,
            selection: selection.clone(),
            at: ON_H300,
        };

        let next = pointer_move(&current, &f.scene, Mode::None, ON_POINT).expect("move");
        assert_eq!(
            next,
            Action::HoveringIntersectionWhileSelecting {
                point: f.point,
                selection: selection.clone(),
                at: ON_POINT
            }
        );

        let next = pointer_move(&next, &f.scene, Mode::None, EMPTY).expect("move");
        assert_eq!(next, Action::Selecting { selection, at: EMPTY });
    }

    #[test]
    fn test_create_recomputes_hover() {
        let f = Fixture::new();
        let current = Action::CreateIntersection { at: ON_POINT };
        let next = pointer_move(&current, &f.scene, Mode::Point, ON_POINT).expect("move");
        assert_eq!(
            next,
            Action::HoveringIntersection {
                point: f.point,
                at: ON_POINT
            }
        );
    }
}
