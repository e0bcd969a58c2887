//! An editing session: one scene, its controls and the interactor driving it.

use std::fmt;

use spacer_core::{Scene, SceneConfig, SceneResult};

use crate::{apply_action, Action, Controls, ControlsError, InputEvent, Interactor, Mode};

type Subscriber = Box<dyn FnMut(&Action, u64)>;

/// Handle returned by [`Session::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Wires input events through the interactor into the scene.
///
/// Every handled event runs to completion: the pointer position is
/// snapped to the grid, the next action is computed, its effect is
/// written to the scene as one batch, and subscribers are told the new
/// action and scene revision.
///
/// # Example
///
/// ```
/// use spacer_core::Position;
/// use spacer_interact::{ActionKind, InputEvent, Mode, Session};
///
/// let mut session = Session::new();
/// session.set_mode(Mode::Point);
/// session.handle(InputEvent::PointerEnter(Position::new(50.0, 50.0))).unwrap();
/// let action = session.handle(InputEvent::PointerUp(Position::new(50.0, 50.0))).unwrap();
/// assert_eq!(action.kind(), ActionKind::CreateIntersection);
/// assert_eq!(session.scene().point_count(), 1);
/// ```
pub struct Session {
    scene: Scene,
    controls: Controls,
    interactor: Interactor,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: usize,
}

impl Session {
    /// Create a session over an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SceneConfig::default())
    }

    /// Create a session over an empty scene with custom configuration.
    #[must_use]
    pub fn with_config(config: SceneConfig) -> Self {
        Self {
            scene: Scene::with_config(config),
            controls: Controls::new(),
            interactor: Interactor::new(),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The scene.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The placement controls.
    #[must_use]
    pub const fn controls(&self) -> &Controls {
        &self.controls
    }

    /// The current action.
    #[must_use]
    pub const fn action(&self) -> &Action {
        self.interactor.action()
    }

    /// Handle one input event.
    ///
    /// Escape also leaves the current placement mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the current action or the scene is internally
    /// inconsistent. Nothing is committed and no subscriber runs in that
    /// case.
    pub fn handle(&mut self, event: InputEvent) -> SceneResult<&Action> {
        let event = event.snapped(self.controls.grid());
        let next = self
            .interactor
            .peek(&self.scene, self.controls.mode(), &event)?;
        apply_action(&mut self.scene, &next, self.controls.grid())?;

        self.interactor.commit(&event, next);
        if matches!(event, InputEvent::KeyboardEscape) {
            self.controls.exit_mode();
        }
        self.notify();
        Ok(self.interactor.action())
    }

    /// Press Escape.
    ///
    /// # Errors
    ///
    /// See [`Session::handle`].
    pub fn escape(&mut self) -> SceneResult<&Action> {
        self.handle(InputEvent::KeyboardEscape)
    }

    /// Switch placement mode.
    pub fn set_mode(&mut self, mode: Mode) {
        self.controls.set_mode(mode);
    }

    /// Toggle placement mode.
    pub fn toggle_mode(&mut self, mode: Mode) {
        self.controls.toggle_mode(mode);
    }

    /// Turn on grid snapping and quantize every line to the new grid.
    ///
    /// # Errors
    ///
    /// Returns [`ControlsError::InvalidGridCell`] for non-positive sizes;
    /// the scene is untouched in that case.
    pub fn set_grid(&mut self, x: f64, y: f64) -> Result<(), ControlsError> {
        let cell = self.controls.set_grid(x, y)?;
        self.scene.apply_grid(cell);
        self.notify();
        Ok(())
    }

    /// Turn off grid snapping. Line positions are kept.
    pub fn unset_grid(&mut self) {
        self.controls.unset_grid();
    }

    /// Call `f` with the action and scene revision after every handled
    /// event and grid change.
    pub fn subscribe(&mut self, f: impl FnMut(&Action, u64) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(f)));
        id
    }

    /// Stop notifying a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(other, _)| *other != id);
        self.subscribers.len() != before
    }

    fn notify(&mut self) {
        let action = self.interactor.action();
        let revision = self.scene.revision();
        for (_, subscriber) in &mut self.subscribers {
            subscriber(action, revision);
        }
    }

    /// The current action as JSON, for inspectors.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn action_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.interactor.action())
    }

    /// Log the current action at debug level.
    pub fn debug(&self) {
        let kind = self.interactor.action().kind();
        match self.action_json() {
            Ok(json) => tracing::debug!(
                %kind,
                revision = self.scene.revision(),
                action = %json,
                "Current action"
            ),
            Err(e) => tracing::debug!(%kind, "Current action could not be serialized: {e}"),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("scene", &self.scene)
            .field("controls", &self.controls)
            .field("action", self.interactor.action())
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}
