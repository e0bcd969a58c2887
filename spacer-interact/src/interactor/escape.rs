//! Escape key.

use spacer_core::{Scene, SceneResult};

use super::enter::compute_enter;
use crate::{Action, Mode};

/// Next action after Escape.
///
/// Drops any selection and placement. If the cursor position is known,
/// hover is re-evaluated there as if the cursor had just entered with no
/// placement mode.
pub(super) fn escape(current: &Action, scene: &Scene) -> SceneResult<Action> {
    match current.position() {
        Some(at) => compute_enter(&Action::None, scene, Mode::None, at),
        None => Ok(Action::None),
    }
}
