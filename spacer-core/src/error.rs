//! Error types for scene operations.
//!
//! Every variant describes an internal defect: a record that should exist
//! but does not, or geometry that breaks the scene's referential
//! integrity. None of them is reachable through ordinary interaction.

use thiserror::Error;

use crate::{Axis, ElementId};

/// Result type for scene operations.
pub type SceneResult<T> = Result<T, SceneError>;

/// Errors that can occur in scene operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SceneError {
    /// No line or intersection with this id exists in the scene.
    #[error("Element not found: {0}")]
    ElementNotFound(ElementId),

    /// The id exists but does not name a line.
    #[error("Element is not a line: {0}")]
    NotALine(ElementId),

    /// The id exists but does not name an intersection.
    #[error("Element is not a point: {0}")]
    NotAPoint(ElementId),

    /// A line was referenced in a slot reserved for the other axis.
    #[error("Line {id} is {found:?}, expected {expected:?}")]
    AxisMismatch {
        /// The offending line.
        id: ElementId,
        /// Axis required by the slot.
        expected: Axis,
        /// Axis the line actually has.
        found: Axis,
    },

    /// The two lines of an intersection do not cross at exactly one point.
    #[error("Intersection {point} does not resolve to a single crossing")]
    NoUniqueCrossing {
        /// The intersection being concretized.
        point: ElementId,
    },

    /// An action reached the writer without the references it requires.
    #[error("Malformed action: {0}")]
    MalformedAction(String),
}
