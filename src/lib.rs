//! # spinstrip
//!
//! Slot-machine style prize strip rotation engine.
//!
//! A fixed-width strip of items ("prizes") scrolls horizontally under a fixed
//! pointer: the strip launches at an initial velocity, decelerates uniformly,
//! and stops with a chosen prize centered, firing tick feedback once per slot
//! that crosses the pointer.
//!
//! ## Architecture
//!
//! The engine is a deterministic, frame-stepped simulation. Nothing in the
//! core reads a wall clock - simulated time advances by `1/fps` per step, so
//! every rotation is reproducible and testable one frame at a time.
//!
//! ```text
//! Roulette (facade) → Kinematics (pure math) → RotationState (per-frame step)
//!                   → PrizeRing (slot recycling) → layout (selected derivation)
//! ```
//!
//! Painting prizes and emitting audio stay behind collaborator seams: the
//! engine exposes logical offsets and a [`TickFeedback`] capability, and the
//! presentation layer renders them however it likes.
//!
//! ## Example
//!
//! ```ignore
//! use spinstrip::{PrizeCell, PrizeQuery, RotateFlags, RotateTo, Roulette};
//!
//! let mut wheel = Roulette::builder()
//!     .prizes(labels.into_iter().map(|l| PrizeCell::new(l, 100.0, 40.0)))
//!     .spacing(10.0)
//!     .on_stop(|ev| println!("landed on {}", ev.index))
//!     .build()?;
//!
//! wheel.rotate_to(PrizeQuery::index(3), RotateTo::laps(2))?;
//! wheel.run_to_completion();
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Prize, PrizeQuery, RotateTo, events)
//! - [`ring`] - Circular prize sequence with O(1) slot recycling
//! - [`kinematics`] - Pure deceleration and travel-distance math
//! - [`layout`] - Selected-prize derivation over a layout snapshot
//! - [`scheduler`] - The rotation state machine, stepped once per frame
//! - [`feedback`] - Tick-feedback capability for the presentation layer
//! - [`engine`] - The public facade: [`Roulette`] and its builder

pub mod engine;
pub mod feedback;
pub mod kinematics;
pub mod layout;
pub mod ring;
pub mod scheduler;
pub mod types;

pub use engine::{EventHandler, Roulette, RouletteBuilder};
pub use feedback::{FnFeedback, NullFeedback, TickFeedback};
pub use ring::PrizeRing;
pub use types::{Prize, PrizeCell, PrizeQuery, RotateFlags, RotateTo, RotationEvent};

use thiserror::Error;

/// Engine error taxonomy. Every failure is raised synchronously from the
/// call that triggered it; a rejected start leaves the engine untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SpinError {
    /// The builder was finalized without any prize source attached.
    #[error("container was undefined")]
    ContainerUndefined,

    /// The prize source yielded zero items.
    #[error("items not found")]
    ItemsNotFound,

    /// A start was requested while a rotation is running. Recoverable:
    /// wait for completion or call `stop()` first.
    #[error("rotation is already active")]
    RotationAlreadyActive,

    /// A prize lookup resolved to nothing.
    #[error("prize not found")]
    PrizeNotFound,

    /// Backward rotation was requested. The reverse kinematics are a stub;
    /// the engine refuses rather than silently rotating forward.
    #[error("not implemented")]
    NotImplemented,

    /// A prize lookup was attempted with neither index nor content.
    #[error("not enough arguments")]
    NotEnoughArguments,
}

/// Convenience alias used throughout the crate.
pub type SpinResult<T> = Result<T, SpinError>;
