//! # Spacer Core
//!
//! Scene model for the spacer sketch editor: horizontal and vertical
//! construction lines, the intersections placed on them, and the derived
//! geometry used for drawing and hit testing.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  Scene                      │
//! ├─────────────────────────────────────────────┤
//! │  Abstract store   │  Concrete snapshot      │
//! │  - Lines (axis,v) │  - Segments / points    │
//! │  - Intersections  │  - R-tree index         │
//! │  - Ordered grid   │  - Ranked hit queries   │
//! ├─────────────────────────────────────────────┤
//! │  Writer: idempotent creation, drag cascade, │
//! │          grid quantization                  │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! The abstract store is the only mutable state. Concrete geometry is a
//! pure function of it, rebuilt lazily the first time it is read after a
//! mutation.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cascade;
pub mod concretion;
pub mod element;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod id;
pub mod scene;
pub mod spatial;

pub use concretion::{GeoLine, GeoPoint, Geometry};
pub use element::{Axis, ElementId, ElementKind, Intersection, Line, Selection};
pub use error::{SceneError, SceneResult};
pub use geometry::{GridCell, Position, Segment};
pub use hit::IntersectionHits;
pub use id::Identifier;
pub use scene::{Grid, Scene, SceneConfig};
pub use spatial::SpatialIndex;

/// Spacer core version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
