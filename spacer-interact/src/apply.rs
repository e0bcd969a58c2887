//! Applying actions to the scene.

use spacer_core::{Axis, ElementId, GridCell, Position, Scene, SceneError, SceneResult};

use crate::Action;

/// Write the effect of `action` into `scene`.
///
/// `Create*` actions add elements (idempotently) and `Dragging*` actions
/// move lines to the cursor, keeping neighbours at least one `grid` cell
/// apart. Every other action is a no-op. The whole effect is one scene
/// batch.
///
/// # Errors
///
/// Returns an error if the action references elements that are not in
/// `scene`, or names a crossing without one line per axis.
pub fn apply_action(scene: &mut Scene, action: &Action, grid: Option<GridCell>) -> SceneResult<()> {
    if !action.is_terminal() {
        return Ok(());
    }
    scene
        .batch(|scene| apply_terminal(scene, action, grid))
        .inspect_err(|e| tracing::warn!(kind = %action.kind(), "Failed to apply action: {e}"))
}

fn apply_terminal(scene: &mut Scene, action: &Action, grid: Option<GridCell>) -> SceneResult<()> {
    match action {
        Action::CreateLine { axis, at } => {
            scene.create_line(*axis, at.along(*axis));
        }
        Action::CreateIntersection { at } => {
            scene.create_intersection_at(*at)?;
        }
        Action::CreateIntersectionAlongLine { line, at } => {
            scene.create_intersection_along_line(*line, *at)?;
        }
        Action::CreateIntersectionAtIntersection { lines } => {
            scene.create_intersection_at_intersection(lines.horizontal, lines.vertical)?;
        }

        Action::DraggingLine { line, at } | Action::DraggingLineWhileSelecting { line, at, .. } => {
            let axis = line_axis(scene, *line)?;
            scene.drag_line(*line, at.along(axis), grid)?;
        }
        Action::DraggingIntersection { point, at, .. }
        | Action::DraggingIntersectionWhileSelecting { point, at, .. } => {
            scene.drag_intersection(*point, *at, grid)?;
        }
        Action::DraggingSelectionByLine {
            line,
            selection,
            at,
        } => {
            let handle = *scene.line(*line).ok_or(SceneError::ElementNotFound(*line))?;
            let delta = match handle.axis {
                Axis::Vertical => Position::new(at.x - handle.v, 0.0),
                Axis::Horizontal => Position::new(0.0, at.y - handle.v),
            };
            scene.drag_selection_by_delta(delta, selection, grid)?;
        }
        Action::DraggingSelectionByPoint {
            point,
            selection,
            at,
        } => {
            let handle = *scene
                .intersection(*point)
                .ok_or(SceneError::ElementNotFound(*point))?;
            let x = line_value(scene, handle.vertical)?;
            let y = line_value(scene, handle.horizontal)?;
            let delta = Position::new(at.x - x, at.y - y);
            scene.drag_selection_by_delta(delta, selection, grid)?;
        }

        _ => {}
    }
    Ok(())
}

fn line_axis(scene: &Scene, id: ElementId) -> SceneResult<Axis> {
    scene
        .line(id)
        .map(|l| l.axis)
        .ok_or(SceneError::ElementNotFound(id))
}

fn line_value(scene: &Scene, id: ElementId) -> SceneResult<f64> {
    scene
        .line(id)
        .map(|l| l.v)
        .ok_or(SceneError::ElementNotFound(id))
}
