//! # Spacer Interact
//!
//! Interaction engine for the spacer sketch editor. Turns pointer,
//! keyboard and UI events into a single current [`Action`], and applies
//! the actions that change geometry to a [`Scene`](spacer_core::Scene).
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                  Session                    │
//! ├─────────────────────────────────────────────┤
//! │  InputEvent ──► grid snap ──► Interactor    │
//! │                                  │          │
//! │  Controls (mode, grid) ──────────┤          │
//! │                                  ▼          │
//! │            Action ──► apply_action ──► Scene│
//! │               │                             │
//! │               └──► subscribers              │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod action;
pub mod apply;
pub mod error;
pub mod event;
pub mod interactor;
pub mod mode;
pub mod session;

#[cfg(test)]
mod testing;

pub use action::{Action, ActionKind, CrossingLines, ReferencedElements};
pub use apply::apply_action;
pub use error::ControlsError;
pub use event::InputEvent;
pub use interactor::Interactor;
pub use mode::{Controls, Mode};
pub use session::{Session, SubscriptionId};

/// Spacer interact version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
