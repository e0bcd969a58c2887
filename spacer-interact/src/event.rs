//! Input events consumed by the interactor.
//!
//! Coordinates are scene-space; translating from widget coordinates is the
//! host's job.

use serde::{Deserialize, Serialize};
use spacer_core::{ElementId, GridCell, Position};

/// Every event the interactor understands.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum InputEvent {
    /// Primary button pressed.
    PointerDown(Position),
    /// Primary button released.
    PointerUp(Position),
    /// Cursor moved over the canvas.
    PointerMove(Position),
    /// Cursor entered the canvas.
    PointerEnter(Position),
    /// Cursor left the canvas.
    PointerLeave,
    /// Escape pressed.
    KeyboardEscape,
    /// An element was hovered outside the canvas, e.g. in a list panel.
    UiHover(ElementId),
    /// The out-of-canvas hover ended.
    UiClear,
}

impl InputEvent {
    /// Cursor position carried by pointer events.
    #[must_use]
    pub const fn position(&self) -> Option<Position> {
        match self {
            Self::PointerDown(p) | Self::PointerUp(p) | Self::PointerMove(p) | Self::PointerEnter(p) => {
                Some(*p)
            }
            Self::PointerLeave | Self::KeyboardEscape | Self::UiHover(_) | Self::UiClear => None,
        }
    }

    /// The same event with its position rounded to `grid`, if any.
    #[must_use]
    pub fn snapped(self, grid: Option<GridCell>) -> Self {
        let Some(cell) = grid else {
            return self;
        };
        match self {
            Self::PointerDown(p) => Self::PointerDown(cell.snap(p)),
            Self::PointerUp(p) => Self::PointerUp(cell.snap(p)),
            Self::PointerMove(p) => Self::PointerMove(cell.snap(p)),
            Self::PointerEnter(p) => Self::PointerEnter(cell.snap(p)),
            other => other,
        }
    }

    /// Short name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::PointerDown(_) => "pointer_down",
            Self::PointerUp(_) => "pointer_up",
            Self::PointerMove(_) => "pointer_move",
            Self::PointerEnter(_) => "pointer_enter",
            Self::PointerLeave => "pointer_leave",
            Self::KeyboardEscape => "keyboard_escape",
            Self::UiHover(_) => "ui_hover",
            Self::UiClear => "ui_clear",
        }
    }
}
