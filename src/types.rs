//! Core types for spinstrip.
//!
//! These are the foundation the engine builds on: the prize unit itself,
//! lookup queries, and the option block accepted by `rotate_to`.

use std::time::Duration;

use bitflags::bitflags;

// =============================================================================
// PRIZES
// =============================================================================

/// One item supplied to the builder: an opaque payload plus its measured size.
///
/// The engine never interprets `content`; it only needs the measurements the
/// presentation layer took when the item was laid out.
#[derive(Debug, Clone)]
pub struct PrizeCell<T> {
    pub content: T,
    pub width: f64,
    pub height: f64,
}

impl<T> PrizeCell<T> {
    pub fn new(content: T, width: f64, height: f64) -> Self {
        Self {
            content,
            width,
            height,
        }
    }
}

/// One rotating unit on the strip.
///
/// `index` is stable identity: assigned at construction, never reassigned,
/// unaffected by recycling. `offset` is the signed displacement from the
/// slot's nominal position; only the front prize ever carries a non-zero
/// offset, and it is always `<= 0` (the strip scrolls leftward).
#[derive(Debug, Clone)]
pub struct Prize<T> {
    pub index: usize,
    pub content: T,
    pub offset: f64,
    pub width: f64,
}

// =============================================================================
// LOOKUP
// =============================================================================

/// How to find a prize: by stable index, by content identity, or both unset
/// (which the lookup rejects with `NotEnoughArguments`).
///
/// Content takes precedence when both are given, matching the original
/// lookup order.
#[derive(Debug, Clone, Copy)]
pub struct PrizeQuery<'a, T> {
    pub index: Option<usize>,
    pub content: Option<&'a T>,
}

impl<T> Default for PrizeQuery<'_, T> {
    fn default() -> Self {
        Self {
            index: None,
            content: None,
        }
    }
}

impl<'a, T> PrizeQuery<'a, T> {
    /// Query by stable prize index.
    pub fn index(index: usize) -> Self {
        Self {
            index: Some(index),
            content: None,
        }
    }

    /// Query by content identity (`T: PartialEq`).
    pub fn content(content: &'a T) -> Self {
        Self {
            index: None,
            content: Some(content),
        }
    }
}

// =============================================================================
// ROTATION OPTIONS
// =============================================================================

bitflags! {
    /// Behavior flags for `rotate_to`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RotateFlags: u8 {
        /// Perturb the stop point by up to ±0.4 prize widths so repeated
        /// spins on the same target do not land pixel-identically.
        const RANDOMIZE = 1 << 0;
        /// Rotate against the scroll direction. Accepted but unimplemented:
        /// the engine fails with `NotImplemented` instead of guessing.
        const BACKWARD = 1 << 1;
    }
}

/// Options for `rotate_to`. `laps` requests extra full ring traversals;
/// `duration` switches to the time-based variant (the lap count is then
/// derived so the motion still terminates on the target, not at an
/// arbitrary point).
#[derive(Debug, Clone, Copy)]
pub struct RotateTo {
    pub laps: u32,
    pub duration: Option<Duration>,
    pub flags: RotateFlags,
}

impl Default for RotateTo {
    /// Randomization is on by default, as in the original engine.
    fn default() -> Self {
        Self {
            laps: 0,
            duration: None,
            flags: RotateFlags::RANDOMIZE,
        }
    }
}

impl RotateTo {
    /// Lap-based rotation with default flags.
    pub fn laps(laps: u32) -> Self {
        Self {
            laps,
            ..Self::default()
        }
    }

    /// Time-based rotation with default flags.
    pub fn duration(duration: Duration) -> Self {
        Self {
            duration: Some(duration),
            ..Self::default()
        }
    }

    pub fn with_flags(mut self, flags: RotateFlags) -> Self {
        self.flags = flags;
        self
    }
}

// =============================================================================
// EVENTS
// =============================================================================

/// Payload for rotation-started / rotation-stopped notifications: the prize
/// selected at that instant. Content is cloned so observers never hold
/// references into the ring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotationEvent<T> {
    pub index: usize,
    pub content: T,
}
