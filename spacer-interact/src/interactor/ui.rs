//! Hover driven from outside the canvas, e.g. an element list.

use spacer_core::ElementId;

use crate::Action;

/// Next action after `element` is hovered in the UI.
///
/// An existing selection is kept alongside the hovered id.
pub(super) fn ui_hover(current: &Action, element: ElementId) -> Action {
    match current.selection() {
        Some(selection) => Action::UiHoveringElementWhileSelecting {
            element,
            selection: selection.clone(),
            at: current.position().unwrap_or_default(),
        },
        None => Action::UiHoveringElement { element },
    }
}

/// Next action after the UI hover ends; collapses the same way as leaving
/// the canvas.
pub(super) fn ui_clear(current: &Action) -> Action {
    super::leave::pointer_leave(current)
}
