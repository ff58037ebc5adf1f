//! Pure rotation kinematics.
//!
//! Uniform deceleration from an initial velocity `v0` to rest over a total
//! distance `d`, with constant deceleration `k`:
//!
//! ```text
//! v0 = sqrt(2·k·d)        total = v0 / k
//! pos(t) = starter + v0·t − k·t²/2      (mod ring width)
//! ```
//!
//! Everything here is stateless; the scheduler feeds it simulated time and
//! the facade feeds it ring geometry.

// =============================================================================
// LAUNCH / POSITION
// =============================================================================

/// Solve the launch parameters for a forward travel of `distance` length
/// units under deceleration `acceleration`.
///
/// Returns `(v0, total_time)`.
pub fn launch(distance: f64, acceleration: f64) -> (f64, f64) {
    let v0 = (2.0 * acceleration * distance).sqrt();
    (v0, v0 / acceleration)
}

/// Ring-space position at elapsed time `t`, `0 <= t <= total_time`.
///
/// `starter` is the front prize's visual offset magnitude at rotation start,
/// so consecutive rotations resume from wherever the strip stopped.
pub fn position(starter: f64, v0: f64, acceleration: f64, t: f64, ring_width: f64) -> f64 {
    (starter + v0 * t - acceleration * t * t / 2.0) % ring_width
}

// =============================================================================
// TRAVEL DISTANCE
// =============================================================================

/// Strip geometry needed by the travel-distance solver.
#[derive(Debug, Clone, Copy)]
pub struct TravelGeometry {
    /// One slot including trailing spacing: `width + spacing`.
    pub block: f64,
    pub spacing: f64,
    pub width: f64,
    /// Viewport center coordinate the pointer sits at.
    pub center: f64,
    /// `count × block`.
    pub ring_width: f64,
}

/// Forward travel distance that centers `target` under the pointer.
///
/// `selected` / `selected_left` describe the currently centered prize and
/// its current left edge. Wraparound is forward-only: when the target sits
/// behind the current position the distance goes the long way around, never
/// negative. `laps` adds that many full ring traversals on top.
pub fn travel_distance(
    selected: usize,
    selected_left: f64,
    target: usize,
    laps: u32,
    geom: &TravelGeometry,
) -> f64 {
    let current = selected as f64 * geom.block + (geom.center - selected_left);
    let destination = target as f64 * geom.block + geom.spacing + geom.width / 2.0;

    let base = if destination >= current {
        destination - current
    } else {
        geom.ring_width - (current - destination)
    };

    f64::from(laps) * geom.ring_width + base
}

/// Lap count for the time-based variant: the caller asks for roughly
/// `seconds` of motion, we derive the distance that takes and round it up
/// to whole laps so the stop still lands on the target prize.
pub fn laps_for_duration(acceleration: f64, seconds: f64, ring_width: f64) -> u32 {
    let v0 = acceleration * seconds;
    let distance = v0 * v0 / (2.0 * acceleration);
    (distance / ring_width).ceil() as u32
}
