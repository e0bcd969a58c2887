//! Placement mode and the controls store that owns it.

use serde::{Deserialize, Serialize};
use spacer_core::{Axis, GridCell};

use crate::ControlsError;

/// What a bare cursor on the canvas is about to place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Nothing; the cursor hovers and selects.
    #[default]
    None,
    /// Place horizontal lines.
    HorizontalLine,
    /// Place vertical lines.
    VerticalLine,
    /// Place intersections.
    Point,
}

impl Mode {
    /// Every mode.
    pub const ALL: [Self; 4] = [
        Self::None,
        Self::HorizontalLine,
        Self::VerticalLine,
        Self::Point,
    ];

    /// Axis of the lines placed in a line mode.
    #[must_use]
    pub const fn line_axis(self) -> Option<Axis> {
        match self {
            Self::HorizontalLine => Some(Axis::Horizontal),
            Self::VerticalLine => Some(Axis::Vertical),
            Self::None | Self::Point => None,
        }
    }
}

/// Placement mode plus the optional snapping grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Controls {
    mode: Mode,
    grid: Option<GridCell>,
}

impl Controls {
    /// Controls in [`Mode::None`] without a grid.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current placement mode.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Current grid cell, if snapping is on.
    #[must_use]
    pub const fn grid(&self) -> Option<GridCell> {
        self.grid
    }

    /// Switch to `mode`.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = ?self.mode, to = ?mode, "Mode changed");
        }
        self.mode = mode;
    }

    /// Switch to `mode`, or back to [`Mode::None`] if already in it.
    pub fn toggle_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            self.set_mode(Mode::None);
        } else {
            self.set_mode(mode);
        }
    }

    /// Start placing horizontal lines.
    pub fn enter_horizontal_line_mode(&mut self) {
        self.set_mode(Mode::HorizontalLine);
    }

    /// Start placing vertical lines.
    pub fn enter_vertical_line_mode(&mut self) {
        self.set_mode(Mode::VerticalLine);
    }

    /// Start placing intersections.
    pub fn enter_point_mode(&mut self) {
        self.set_mode(Mode::Point);
    }

    /// Toggle horizontal line placement.
    pub fn toggle_horizontal_line_mode(&mut self) {
        self.toggle_mode(Mode::HorizontalLine);
    }

    /// Toggle vertical line placement.
    pub fn toggle_vertical_line_mode(&mut self) {
        self.toggle_mode(Mode::VerticalLine);
    }

    /// Toggle intersection placement.
    pub fn toggle_point_mode(&mut self) {
        self.toggle_mode(Mode::Point);
    }

    /// Return to [`Mode::None`].
    pub fn exit_mode(&mut self) {
        self.set_mode(Mode::None);
    }

    /// Turn on snapping with an `x` by `y` cell.
    ///
    /// # Errors
    ///
    /// Returns [`ControlsError::InvalidGridCell`] unless both sizes are
    /// finite and greater than zero.
    pub fn set_grid(&mut self, x: f64, y: f64) -> Result<GridCell, ControlsError> {
        if !(x.is_finite() && y.is_finite() && x > 0.0 && y > 0.0) {
            return Err(ControlsError::InvalidGridCell { x, y });
        }
        let cell = GridCell::new(x, y);
        self.grid = Some(cell);
        Ok(cell)
    }

    /// Turn off snapping.
    pub fn unset_grid(&mut self) {
        self.grid = None;
    }
}
