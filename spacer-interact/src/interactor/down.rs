//! Button press.

use crate::Action;

/// Next action after the primary button goes down.
///
/// Only hovering states react: the hovered element becomes touched. The
/// press alone does not decide between click and drag.
pub(super) fn pointer_down(current: &Action) -> Action {
    match current.clone() {
        Action::HoveringLine { line, at } => Action::TouchingLine { line, at },
        Action::HoveringLineWhileSelecting {
            line,
            selection,
            at,
        } => Action::TouchingLineWhileSelecting {
            line,
            selection,
            at,
        },
        Action::HoveringSelectedLineWhileSelecting {
            line,
            selection,
            at,
        } => Action::TouchingSelectedLineWhileSelecting {
            line,
            selection,
            at,
        },
        Action::HoveringIntersection { point, at } => Action::TouchingIntersection { point, at },
        Action::HoveringIntersectionWhileSelecting {
            point,
            selection,
            at,
        } => Action::TouchingIntersectionWhileSelecting {
            point,
            selection,
            at,
        },
        Action::HoveringSelectedIntersectionWhileSelecting {
            point,
            selection,
            at,
        } => Action::TouchingSelectedIntersectionWhileSelecting {
            point,
            selection,
            at,
        },
        other => other,
    }
}
