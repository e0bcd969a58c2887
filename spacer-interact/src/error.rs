//! Error types for the placement controls.

use thiserror::Error;

/// Errors raised when configuring [`Controls`](crate::Controls).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlsError {
    /// Grid cells must be finite and strictly positive on both axes.
    #[error("Invalid grid cell {x} x {y}: sizes must be positive")]
    InvalidGridCell {
        /// Requested cell width.
        x: f64,
        /// Requested cell height.
        y: f64,
    },
}
