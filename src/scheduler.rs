//! The rotation state machine, stepped once per simulated frame.
//!
//! Rotation state is an explicit tagged enum rather than a sentinel token:
//! `Idle` or `Active` with the full launch record. Each step advances
//! simulated time by the frame interval and reduces to a [`FrameUpdate`] -
//! a plain description of what the facade must do to the ring (recycle the
//! front slot, reposition it, fire the tick). The state machine itself
//! touches nothing, which keeps every frame unit-testable.

use crate::kinematics;

// =============================================================================
// GEOMETRY
// =============================================================================

/// Fixed strip measurements the stepper needs every frame.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RingGeometry {
    /// One slot including trailing spacing: `width + spacing`.
    pub block: f64,
    /// Tick threshold within a block: `spacing + width/2`, the point where a
    /// slot's midline crosses the pointer. (Deliberately not `block/2`.)
    pub half_block: f64,
    /// `count × block`.
    pub ring_width: f64,
    /// Number of prizes on the ring.
    pub count: usize,
    /// Simulated frame interval: `1 / fps` seconds.
    pub dt: f64,
}

// =============================================================================
// ROTATION STATE
// =============================================================================

/// Exactly one per engine instance. `Idle → Active` happens only through a
/// validated start; `Active → Idle` on duration exhaustion or explicit stop.
#[derive(Debug)]
pub(crate) enum RotationState {
    Idle,
    Active(ActiveRotation),
}

/// Launch record plus per-frame bookkeeping for the one running rotation.
#[derive(Debug)]
pub(crate) struct ActiveRotation {
    /// Front offset magnitude at start; motion resumes from here.
    starter: f64,
    v0: f64,
    acceleration: f64,
    total_time: f64,
    /// Simulated elapsed time, advanced by `dt` per frame.
    elapsed: f64,
    /// Ring block the strip currently occupies (mod count).
    current_block: usize,
    /// Whether the tick already fired for the current block.
    ticked: bool,
}

/// What one frame asks of the facade, in application order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FrameUpdate {
    /// Duration exhausted: terminate, ignore the rest of the update.
    pub finished: bool,
    /// A block boundary was crossed: recycle the front slot first.
    pub recycle: bool,
    /// New displacement for the (possibly just recycled) front slot.
    pub front_offset: f64,
    /// The slot midline crossed the pointer: fire tick feedback once.
    pub tick: bool,
}

impl FrameUpdate {
    const FINISHED: Self = Self {
        finished: true,
        recycle: false,
        front_offset: 0.0,
        tick: false,
    };
}

impl ActiveRotation {
    pub fn begin(starter: f64, v0: f64, acceleration: f64, total_time: f64) -> Self {
        Self {
            starter,
            v0,
            acceleration,
            total_time,
            elapsed: 0.0,
            current_block: 0,
            ticked: false,
        }
    }

    /// Advance one simulated frame.
    ///
    /// Exhausting `total_time` is the sole normal termination path. A frame
    /// that skips past more than one block boundary still recycles exactly
    /// one slot; at sane fps a frame moves far less than one block.
    pub fn advance(&mut self, geom: &RingGeometry) -> FrameUpdate {
        if self.elapsed > self.total_time {
            return FrameUpdate::FINISHED;
        }

        let pos = kinematics::position(
            self.starter,
            self.v0,
            self.acceleration,
            self.elapsed,
            geom.ring_width,
        );

        let recycle = (pos / geom.block).floor() as usize != self.current_block;
        if recycle {
            self.current_block = (self.current_block + 1) % geom.count;
            self.ticked = false;
        }

        let margin = pos % geom.block;
        let tick = margin > geom.half_block && !self.ticked;
        if tick {
            self.ticked = true;
        }

        self.elapsed += geom.dt;

        FrameUpdate {
            finished: false,
            recycle,
            front_offset: -margin,
            tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kinematics::launch;

    fn geometry() -> RingGeometry {
        RingGeometry {
            block: 110.0,
            half_block: 60.0,
            ring_width: 660.0,
            count: 6,
            dt: 1.0 / 40.0,
        }
    }

    fn rotation(distance: f64) -> ActiveRotation {
        let (v0, total) = launch(distance, 350.0);
        ActiveRotation::begin(0.0, v0, 350.0, total)
    }

    /// Drive a rotation to completion, returning (frames, recycles, ticks,
    /// last front offset).
    fn drain(mut rot: ActiveRotation, geom: &RingGeometry) -> (usize, usize, usize, f64) {
        let mut frames = 0;
        let mut recycles = 0;
        let mut ticks = 0;
        let mut last_offset = 0.0;
        loop {
            let update = rot.advance(geom);
            if update.finished {
                return (frames, recycles, ticks, last_offset);
            }
            frames += 1;
            recycles += usize::from(update.recycle);
            ticks += usize::from(update.tick);
            last_offset = update.front_offset;
            assert!(frames < 100_000, "rotation never finished");
        }
    }

    #[test]
    fn test_finishes_after_total_time() {
        let geom = geometry();
        let (_, total) = launch(330.0, 350.0);
        let (frames, _, _, _) = drain(rotation(330.0), &geom);
        // One frame per dt while elapsed <= total.
        let expected = (total / geom.dt).floor() as usize + 1;
        assert_eq!(frames, expected);
    }

    #[test]
    fn test_one_recycle_per_block_boundary() {
        let geom = geometry();
        // 990 units crosses boundaries at 110, 220, ..., 880: 8 recycles.
        let (_, recycles, _, _) = drain(rotation(990.0), &geom);
        assert_eq!(recycles, 8);
    }

    #[test]
    fn test_one_tick_per_block() {
        let geom = geometry();
        // 8 completed blocks plus the final partial block whose margin ends
        // past the midline: 9 ticks, exactly one per block.
        let (_, _, ticks, _) = drain(rotation(990.0), &geom);
        assert_eq!(ticks, 9);
    }

    #[test]
    fn test_no_tick_before_midline() {
        let geom = geometry();
        // 50 units never reaches the 60-unit midline: no tick, no recycle.
        let (_, recycles, ticks, last_offset) = drain(rotation(50.0), &geom);
        assert_eq!(recycles, 0);
        assert_eq!(ticks, 0);
        assert!(last_offset > -60.0 && last_offset <= 0.0);
    }

    #[test]
    fn test_front_offset_tracks_margin() {
        let geom = geometry();
        let mut rot = rotation(330.0);
        // First frame is at t = 0: position equals the starter (0 here).
        let first = rot.advance(&geom);
        assert_eq!(first.front_offset, 0.0);
        assert!(!first.recycle && !first.tick && !first.finished);

        // Offsets stay within one block of displacement.
        loop {
            let update = rot.advance(&geom);
            if update.finished {
                break;
            }
            assert!(update.front_offset <= 0.0);
            assert!(update.front_offset > -geom.block);
        }
    }

    #[test]
    fn test_starter_resumes_mid_block() {
        let geom = geometry();
        // Starting 100 units into a block, 20 more units crosses into the
        // next block immediately.
        let (v0, total) = launch(20.0, 350.0);
        let mut rot = ActiveRotation::begin(100.0, v0, 350.0, total);

        let first = rot.advance(&geom);
        assert!(!first.recycle, "t=0 frame sits at the starter position");
        assert_eq!(first.front_offset, -100.0);

        let mut recycled = false;
        loop {
            let update = rot.advance(&geom);
            if update.finished {
                break;
            }
            recycled |= update.recycle;
        }
        assert!(recycled, "crossing 110 must recycle the front slot");
    }
}
