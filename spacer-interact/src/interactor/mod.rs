//! The interaction state machine.
//!
//! Each event family has its own handler module. Handlers are pure: they
//! read the current action, the scene and the placement mode, and return
//! the next action without touching anything else.

mod down;
mod enter;
mod escape;
mod leave;
mod pointer_move;
mod ui;
mod up;

use spacer_core::{Scene, SceneResult};

pub use enter::compute_enter;

use crate::{Action, InputEvent, Mode};

/// Compute the action that follows `current` when `event` arrives.
///
/// Pointer coordinates are used as given; snap them first if a grid is on.
///
/// # Errors
///
/// Returns an error only if `current` references elements that are not
/// in `scene`.
pub fn transition(
    current: &Action,
    scene: &Scene,
    mode: Mode,
    event: &InputEvent,
) -> SceneResult<Action> {
    match *event {
        InputEvent::PointerDown(_) => Ok(down::pointer_down(current)),
        InputEvent::PointerUp(at) => up::pointer_up(current, scene, mode, at),
        InputEvent::PointerMove(at) | InputEvent::PointerEnter(at) => {
            pointer_move::pointer_move(current, scene, mode, at)
        }
        InputEvent::PointerLeave => Ok(leave::pointer_leave(current)),
        InputEvent::KeyboardEscape => escape::escape(current, scene),
        InputEvent::UiHover(element) => Ok(ui::ui_hover(current, element)),
        InputEvent::UiClear => Ok(ui::ui_clear(current)),
    }
}

/// Holds the current action and advances it event by event.
#[derive(Debug, Clone, Default)]
pub struct Interactor {
    action: Action,
}

impl Interactor {
    /// Create an interactor in [`Action::None`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current action.
    #[must_use]
    pub const fn action(&self) -> &Action {
        &self.action
    }

    /// Advance on `event` and return the new current action.
    ///
    /// On error the current action is left unchanged.
    ///
    /// # Errors
    ///
    /// See [`transition`].
    pub fn handle(&mut self, scene: &Scene, mode: Mode, event: &InputEvent) -> SceneResult<&Action> {
        let next = self.peek(scene, mode, event)?;
        self.commit(event, next);
        Ok(&self.action)
    }

    /// The action `event` would lead to, without advancing.
    ///
    /// # Errors
    ///
    /// See [`transition`].
    pub fn peek(&self, scene: &Scene, mode: Mode, event: &InputEvent) -> SceneResult<Action> {
        transition(&self.action, scene, mode, event).inspect_err(|e| {
            tracing::warn!(event = event.name(), from = %self.action.kind(), "Transition failed: {e}");
        })
    }

    /// Make `next`, computed for `event`, the current action.
    pub fn commit(&mut self, event: &InputEvent, next: Action) {
        if next.kind() != self.action.kind() {
            tracing::debug!(
                event = event.name(),
                from = %self.action.kind(),
                to = %next.kind(),
                "Action transition"
            );
        }
        self.action = next;
    }

    /// Drop back to [`Action::None`].
    pub fn reset(&mut self) {
        self.action = Action::None;
    }
}
