//! Cursor leaving the canvas.

use crate::Action;

/// Next action after the cursor leaves the canvas.
///
/// Everything collapses to [`Action::None`] except the selection, which
/// survives as a bare [`Action::Selecting`] at the last known position.
pub(super) fn pointer_leave(current: &Action) -> Action {
    match current.selection() {
        Some(selection) => Action::Selecting {
            selection: selection.clone(),
            at: current.position().unwrap_or_default(),
        },
        None => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spacer_core::{ElementId, Position, Selection};

    #[test]
    fn test_leave_keeps_selection() {
        let line = ElementId::new();
        let at = Position::new(7.0, 8.0);
        let current = Action::DraggingLineWhileSelecting {
            line,
            selection: Selection::of_line(line),
            at,
        };
        assert_eq!(
            pointer_leave(&current),
            Action::Selecting {
                selection: Selection::of_line(line),
                at
            }
        );
    }

    #[test]
    fn test_leave_drops_everything_else() {
        let current = Action::DraggingLine {
            line: ElementId::new(),
            at: Position::new(1.0, 1.0),
        };
        assert_eq!(pointer_leave(&current), Action::None);
        assert_eq!(pointer_leave(&Action::None), Action::None);
    }
}
