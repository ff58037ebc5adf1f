//! The public engine facade.
//!
//! [`Roulette`] validates every entry point, enforces the single-active-
//! rotation invariant, and owns the pieces: the prize ring, the rotation
//! state machine, the feedback capability, and the start/stop observers.
//!
//! # Driving frames
//!
//! The engine never reads a wall clock. After a successful `rotate` /
//! `rotate_to`, the caller drives the simulation:
//!
//! - [`Roulette::step`] advances exactly one frame (deterministic, the test
//!   driver and the building block for any host event loop);
//! - [`Roulette::run_to_completion`] paces steps with a sleep of `1/fps`
//!   for plain blocking use.
//!
//! # Example
//!
//! ```ignore
//! let mut wheel = Roulette::builder()
//!     .prizes(cells)
//!     .on_stop(|ev| println!("winner: {}", ev.index))
//!     .build()?;
//!
//! wheel.rotate_to(PrizeQuery::index(3), RotateTo::laps(2))?;
//! wheel.run_to_completion();
//! assert_eq!(wheel.selected_prize().index, 3);
//! ```

use std::thread;
use std::time::Duration;

use log::{debug, trace};
use rand::Rng;
use spark_signals::{Signal, signal};

use crate::feedback::{NullFeedback, TickFeedback};
use crate::kinematics::{self, TravelGeometry};
use crate::layout;
use crate::ring::PrizeRing;
use crate::scheduler::{ActiveRotation, RingGeometry, RotationState};
use crate::types::{Prize, PrizeCell, PrizeQuery, RotateFlags, RotateTo, RotationEvent};
use crate::{SpinError, SpinResult};

/// Boxed observer for rotation-started / rotation-stopped notifications.
pub type EventHandler<T> = Box<dyn FnMut(&RotationEvent<T>)>;

// =============================================================================
// BUILDER
// =============================================================================

/// Configures and constructs a [`Roulette`]. Every option has a default;
/// only the prize source is required.
pub struct RouletteBuilder<T> {
    cells: Option<Vec<PrizeCell<T>>>,
    spacing: f64,
    acceleration: f64,
    fps: u32,
    viewport_width: Option<f64>,
    feedback: Box<dyn TickFeedback>,
    on_start: Vec<EventHandler<T>>,
    on_stop: Vec<EventHandler<T>>,
}

impl<T: Clone> RouletteBuilder<T> {
    fn new() -> Self {
        Self {
            cells: None,
            spacing: 10.0,
            acceleration: 350.0,
            fps: 40,
            viewport_width: None,
            feedback: Box::new(NullFeedback),
            on_start: Vec::new(),
            on_stop: Vec::new(),
        }
    }

    /// The prize source: contents plus their measured sizes, in display
    /// order. Required; the builder fails without it.
    pub fn prizes<I>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = PrizeCell<T>>,
    {
        self.cells = Some(cells.into_iter().collect());
        self
    }

    /// Gap between prizes, in length units. Default 10.
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Deceleration constant `k`. Default 350.
    pub fn acceleration(mut self, acceleration: f64) -> Self {
        self.acceleration = acceleration;
        self
    }

    /// Simulation step rate. Default 40. Clamped to at least 1.
    pub fn fps(mut self, fps: u32) -> Self {
        self.fps = fps.max(1);
        self
    }

    /// Viewport width; the pointer sits at its midpoint. Defaults to one
    /// visible slot: `2·spacing + prize width`.
    pub fn viewport_width(mut self, width: f64) -> Self {
        self.viewport_width = Some(width);
        self
    }

    /// Tick-feedback receiver. Default: none.
    pub fn feedback(mut self, feedback: impl TickFeedback + 'static) -> Self {
        self.feedback = Box::new(feedback);
        self
    }

    /// Register a rotation-started observer. May be called repeatedly;
    /// handlers fire in registration order.
    pub fn on_start(mut self, handler: impl FnMut(&RotationEvent<T>) + 'static) -> Self {
        self.on_start.push(Box::new(handler));
        self
    }

    /// Register a rotation-stopped observer.
    pub fn on_stop(mut self, handler: impl FnMut(&RotationEvent<T>) + 'static) -> Self {
        self.on_stop.push(Box::new(handler));
        self
    }

    /// Measure the source and build the engine.
    ///
    /// Fails with `ContainerUndefined` when no source was attached and
    /// `ItemsNotFound` when the source yielded nothing.
    pub fn build(self) -> SpinResult<Roulette<T>> {
        let cells = self.cells.ok_or(SpinError::ContainerUndefined)?;
        if cells.is_empty() {
            return Err(SpinError::ItemsNotFound);
        }

        // All slots share the largest measured cell, as the original did.
        let width = cells.iter().map(|c| c.width).fold(0.0, f64::max);
        let height = cells.iter().map(|c| c.height).fold(0.0, f64::max);

        let prizes = cells
            .into_iter()
            .enumerate()
            .map(|(index, cell)| Prize {
                index,
                content: cell.content,
                offset: 0.0,
                width,
            })
            .collect();
        let ring = PrizeRing::new(prizes).ok_or(SpinError::ItemsNotFound)?;

        debug!(
            "built strip: {} prizes, slot {}x{}, spacing {}",
            ring.len(),
            width,
            height,
            self.spacing
        );

        Ok(Roulette {
            viewport_width: self
                .viewport_width
                .unwrap_or(2.0 * self.spacing + width),
            ring,
            spacing: self.spacing,
            acceleration: self.acceleration,
            fps: self.fps,
            prize_width: width,
            prize_height: height,
            state: RotationState::Idle,
            rotating: signal(false),
            feedback: self.feedback,
            on_start: self.on_start,
            on_stop: self.on_stop,
        })
    }
}

// =============================================================================
// ENGINE
// =============================================================================

/// The rotation engine: a ring of prizes, one optional active rotation, and
/// the observers watching it.
pub struct Roulette<T> {
    ring: PrizeRing<T>,
    spacing: f64,
    acceleration: f64,
    fps: u32,
    prize_width: f64,
    prize_height: f64,
    viewport_width: f64,
    state: RotationState,
    rotating: Signal<bool>,
    feedback: Box<dyn TickFeedback>,
    on_start: Vec<EventHandler<T>>,
    on_stop: Vec<EventHandler<T>>,
}

impl<T> std::fmt::Debug for Roulette<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Roulette")
            .field("spacing", &self.spacing)
            .field("acceleration", &self.acceleration)
            .field("fps", &self.fps)
            .field("prize_width", &self.prize_width)
            .field("prize_height", &self.prize_height)
            .field("viewport_width", &self.viewport_width)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl<T: Clone> Roulette<T> {
    pub fn builder() -> RouletteBuilder<T> {
        RouletteBuilder::new()
    }

    // -------------------------------------------------------------------------
    // Rotation entry points
    // -------------------------------------------------------------------------

    /// Start a forward rotation of `distance` length units.
    ///
    /// Zero is a no-op; negative distances (backward rotation) fail with
    /// `NotImplemented`; a running rotation fails with
    /// `RotationAlreadyActive` and is left untouched.
    pub fn rotate(&mut self, distance: f64) -> SpinResult<()> {
        if self.is_rotating() {
            return Err(SpinError::RotationAlreadyActive);
        }
        if distance < 0.0 {
            return Err(SpinError::NotImplemented);
        }
        if distance == 0.0 {
            return Ok(());
        }
        self.start_rotation(distance);
        Ok(())
    }

    /// Start a rotation that stops with the target prize centered.
    ///
    /// The target resolves by index or content (§ [`PrizeQuery`]). With a
    /// `duration`, the lap count is derived from the requested time so the
    /// motion still terminates on the target; otherwise `options.laps` full
    /// traversals are added to the base distance. Targeting the prize that
    /// is already selected with no laps and no duration is a no-op.
    pub fn rotate_to(&mut self, query: PrizeQuery<'_, T>, options: RotateTo) -> SpinResult<()>
    where
        T: PartialEq,
    {
        if self.is_rotating() {
            return Err(SpinError::RotationAlreadyActive);
        }
        let target = self.find_prize(query)?.index;
        if options.flags.contains(RotateFlags::BACKWARD) {
            return Err(SpinError::NotImplemented);
        }

        let selected = self.selected_prize().index;
        if selected == target && options.laps == 0 && options.duration.is_none() {
            return Ok(());
        }

        let laps = match options.duration {
            Some(d) => kinematics::laps_for_duration(
                self.acceleration,
                d.as_secs_f64(),
                self.ring_width(),
            ),
            None => options.laps,
        };

        let mut distance = kinematics::travel_distance(
            selected,
            self.left_edge_of(selected),
            target,
            laps,
            &self.travel_geometry(),
        );
        if options.flags.contains(RotateFlags::RANDOMIZE) {
            let jitter = self.prize_width * 0.4;
            if jitter > 0.0 {
                distance += rand::thread_rng().gen_range(-jitter..jitter);
            }
        }

        self.rotate(distance)
    }

    /// Cut the rotation immediately, wherever the ring currently is, and
    /// fire the stopped notification for the prize now centered. No-op
    /// while idle.
    pub fn stop(&mut self) {
        if self.is_rotating() {
            self.finish();
        }
    }

    // -------------------------------------------------------------------------
    // Frame driving
    // -------------------------------------------------------------------------

    /// Advance one simulated frame. Returns `false` when idle, or when this
    /// step exhausted the rotation (the stopped notification has then
    /// already fired).
    pub fn step(&mut self) -> bool {
        let geom = self.ring_geometry();
        let update = match &mut self.state {
            RotationState::Idle => return false,
            RotationState::Active(rot) => rot.advance(&geom),
        };

        if update.finished {
            self.finish();
            return false;
        }

        if update.recycle {
            trace!("recycling front slot (prize {})", self.ring.front().index);
            self.ring.recycle_front();
        }
        self.ring.set_front_offset(update.front_offset);
        if update.tick {
            self.feedback.tick();
        }
        true
    }

    /// Drive frames at the configured fps until the rotation finishes.
    /// Blocks the calling thread; for finer control call [`Self::step`]
    /// from your own loop.
    pub fn run_to_completion(&mut self) {
        let frame = Duration::from_secs_f64(1.0 / f64::from(self.fps));
        while self.step() {
            thread::sleep(frame);
        }
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    pub fn is_rotating(&self) -> bool {
        matches!(self.state, RotationState::Active(_))
    }

    /// Reactive mirror of the rotation state, set `true` on start and
    /// `false` on stop. Cloneable; observe it from reactive code.
    pub fn rotating_signal(&self) -> Signal<bool> {
        self.rotating.clone()
    }

    /// The prize currently centered under the pointer, derived from actual
    /// layout (valid rotating or idle).
    pub fn selected_prize(&self) -> &Prize<T> {
        let lefts = layout::left_edges(self.ring.len(), self.block(), self.ring.front_offset());
        let pos = layout::selected_position(&lefts, self.center());
        self.ring.display(pos)
    }

    /// The prize occupying the first display slot.
    pub fn first_block(&self) -> &Prize<T> {
        self.ring.front()
    }

    /// The prize occupying the last display slot.
    pub fn last_block(&self) -> &Prize<T> {
        self.ring.back()
    }

    /// Look a prize up by index or content.
    ///
    /// Content takes precedence when both are given. A query with neither
    /// fails with `NotEnoughArguments`; an unmatched one with
    /// `PrizeNotFound`.
    pub fn find_prize(&self, query: PrizeQuery<'_, T>) -> SpinResult<&Prize<T>>
    where
        T: PartialEq,
    {
        match (query.index, query.content) {
            (None, None) => Err(SpinError::NotEnoughArguments),
            (_, Some(content)) => self.ring.by_content(content).ok_or(SpinError::PrizeNotFound),
            (Some(index), None) => self.ring.by_index(index).ok_or(SpinError::PrizeNotFound),
        }
    }

    /// Prizes in current display order, front first.
    pub fn prizes(&self) -> impl Iterator<Item = &Prize<T>> {
        self.ring.iter()
    }

    pub fn prize_count(&self) -> usize {
        self.ring.len()
    }

    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    pub fn prize_width(&self) -> f64 {
        self.prize_width
    }

    pub fn prize_height(&self) -> f64 {
        self.prize_height
    }

    /// Total ring width: `count × (width + spacing)`.
    pub fn ring_width(&self) -> f64 {
        self.block() * self.ring.len() as f64
    }

    /// Pointer coordinate: the viewport midpoint.
    pub fn center(&self) -> f64 {
        self.viewport_width / 2.0
    }

    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    // -------------------------------------------------------------------------
    // Internals
    // -------------------------------------------------------------------------

    fn block(&self) -> f64 {
        self.prize_width + self.spacing
    }

    fn ring_geometry(&self) -> RingGeometry {
        RingGeometry {
            block: self.block(),
            half_block: self.spacing + self.prize_width / 2.0,
            ring_width: self.ring_width(),
            count: self.ring.len(),
            dt: 1.0 / f64::from(self.fps),
        }
    }

    fn travel_geometry(&self) -> TravelGeometry {
        TravelGeometry {
            block: self.block(),
            spacing: self.spacing,
            width: self.prize_width,
            center: self.center(),
            ring_width: self.ring_width(),
        }
    }

    /// Current left edge of the prize with the given stable index.
    fn left_edge_of(&self, index: usize) -> f64 {
        let pos = self.ring.iter().position(|p| p.index == index).unwrap_or(0);
        pos as f64 * self.block() + self.ring.front_offset()
    }

    fn selected_event(&self) -> RotationEvent<T> {
        let prize = self.selected_prize();
        RotationEvent {
            index: prize.index,
            content: prize.content.clone(),
        }
    }

    /// Shared start sequence: notify observers with the pre-motion
    /// selection, capture the resume offset, launch.
    fn start_rotation(&mut self, distance: f64) {
        let event = self.selected_event();
        for handler in &mut self.on_start {
            handler(&event);
        }

        let starter = self.ring.front_offset().abs();
        let (v0, total_time) = kinematics::launch(distance, self.acceleration);
        debug!("rotation started: distance={distance:.1} v0={v0:.1} total={total_time:.3}s");

        self.state = RotationState::Active(ActiveRotation::begin(
            starter,
            v0,
            self.acceleration,
            total_time,
        ));
        self.rotating.set(true);
    }

    /// Shared termination sequence for duration exhaustion and `stop()`.
    /// The stopped notification carries the selection derived from layout,
    /// not from simulation bookkeeping.
    fn finish(&mut self) {
        self.state = RotationState::Idle;
        self.rotating.set(false);

        let event = self.selected_event();
        debug!("rotation stopped: selected={}", event.index);
        for handler in &mut self.on_stop {
            handler(&event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::feedback::FnFeedback;

    fn cells(n: usize) -> Vec<PrizeCell<String>> {
        (0..n)
            .map(|i| PrizeCell::new(format!("prize-{i}"), 100.0, 40.0))
            .collect()
    }

    fn wheel(n: usize) -> Roulette<String> {
        Roulette::builder().prizes(cells(n)).build().expect("valid wheel")
    }

    fn drive(wheel: &mut Roulette<String>) -> usize {
        let mut frames = 0;
        while wheel.step() {
            frames += 1;
            assert!(frames < 100_000, "rotation never finished");
        }
        frames
    }

    #[test]
    fn test_builder_requires_source() {
        let err = Roulette::<String>::builder().build().unwrap_err();
        assert_eq!(err, SpinError::ContainerUndefined);
    }

    #[test]
    fn test_builder_rejects_empty_source() {
        let err = Roulette::builder().prizes(cells(0)).build().unwrap_err();
        assert_eq!(err, SpinError::ItemsNotFound);
    }

    #[test]
    fn test_builder_defaults_and_measurement() {
        let wheel = wheel(6);
        assert_eq!(wheel.spacing(), 10.0);
        assert_eq!(wheel.prize_width(), 100.0);
        assert_eq!(wheel.prize_height(), 40.0);
        assert_eq!(wheel.ring_width(), 660.0);
        // Default viewport is one slot: 2·10 + 100.
        assert_eq!(wheel.viewport_width(), 120.0);
        assert_eq!(wheel.center(), 60.0);
        assert!(!wheel.is_rotating());
        assert_eq!(wheel.selected_prize().index, 0);
    }

    #[test]
    fn test_builder_takes_widest_cell() {
        let wheel = Roulette::builder()
            .prizes(vec![
                PrizeCell::new("a", 80.0, 30.0),
                PrizeCell::new("b", 120.0, 50.0),
                PrizeCell::new("c", 60.0, 20.0),
            ])
            .build()
            .expect("valid wheel");
        assert_eq!(wheel.prize_width(), 120.0);
        assert_eq!(wheel.prize_height(), 50.0);
        assert!(wheel.prizes().all(|p| p.width == 120.0));
    }

    #[test]
    fn test_find_prize() {
        let wheel = wheel(4);

        let by_index = wheel.find_prize(PrizeQuery::index(2)).expect("index hit");
        assert_eq!(by_index.content, "prize-2");

        let needle = String::from("prize-1");
        let by_content = wheel
            .find_prize(PrizeQuery::content(&needle))
            .expect("content hit");
        assert_eq!(by_content.index, 1);

        assert_eq!(
            wheel.find_prize(PrizeQuery::index(9)).unwrap_err(),
            SpinError::PrizeNotFound
        );
        assert_eq!(
            wheel.find_prize(PrizeQuery::default()).unwrap_err(),
            SpinError::NotEnoughArguments
        );
    }

    #[test]
    fn test_find_prize_content_precedence() {
        let wheel = wheel(4);
        let needle = String::from("prize-3");
        let query = PrizeQuery {
            index: Some(0),
            content: Some(&needle),
        };
        assert_eq!(wheel.find_prize(query).expect("content wins").index, 3);
    }

    #[test]
    fn test_rotate_backward_not_implemented() {
        let mut wheel = wheel(6);
        assert_eq!(wheel.rotate(-50.0).unwrap_err(), SpinError::NotImplemented);
        assert!(!wheel.is_rotating());
    }

    #[test]
    fn test_rotate_to_backward_not_implemented() {
        let mut wheel = wheel(6);
        let err = wheel
            .rotate_to(
                PrizeQuery::index(2),
                RotateTo::laps(1).with_flags(RotateFlags::BACKWARD),
            )
            .unwrap_err();
        assert_eq!(err, SpinError::NotImplemented);
        assert!(!wheel.is_rotating());
    }

    #[test]
    fn test_rotate_zero_is_noop() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        let mut wheel = Roulette::builder()
            .prizes(cells(6))
            .on_start(move |ev| log.borrow_mut().push(ev.index))
            .build()
            .expect("valid wheel");

        wheel.rotate(0.0).expect("zero distance is fine");
        assert!(!wheel.is_rotating());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_rotate_rejected_while_active() {
        let mut wheel = wheel(6);
        wheel.rotate(500.0).expect("first start");
        assert!(wheel.is_rotating());

        assert_eq!(
            wheel.rotate(100.0).unwrap_err(),
            SpinError::RotationAlreadyActive
        );
        assert_eq!(
            wheel
                .rotate_to(PrizeQuery::index(1), RotateTo::default())
                .unwrap_err(),
            SpinError::RotationAlreadyActive
        );

        // The original rotation is unaffected and still completes.
        assert!(wheel.is_rotating());
        drive(&mut wheel);
        assert!(!wheel.is_rotating());
    }

    #[test]
    fn test_rotate_to_selected_is_noop() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&events);
        let mut wheel = Roulette::builder()
            .prizes(cells(6))
            .on_start(move |ev| log.borrow_mut().push(ev.index))
            .build()
            .expect("valid wheel");

        let selected = wheel.selected_prize().index;
        wheel
            .rotate_to(PrizeQuery::index(selected), RotateTo::default())
            .expect("no-op");
        assert!(!wheel.is_rotating());
        assert!(events.borrow().is_empty());
    }

    #[test]
    fn test_rotate_to_lands_on_target() {
        // Worked example: 6 prizes, width 100, spacing 10, one lap to
        // prize 3 travels 660 + 390 − 60 = 990 units.
        let mut wheel = wheel(6);
        wheel
            .rotate_to(
                PrizeQuery::index(3),
                RotateTo::laps(1).with_flags(RotateFlags::empty()),
            )
            .expect("start");
        drive(&mut wheel);
        assert_eq!(wheel.selected_prize().index, 3);
    }

    #[test]
    fn test_rotate_to_lands_on_every_target() {
        let mut wheel = wheel(6);
        for target in [3, 0, 5, 1, 4, 2] {
            wheel
                .rotate_to(
                    PrizeQuery::index(target),
                    RotateTo::laps(0).with_flags(RotateFlags::empty()),
                )
                .expect("start");
            drive(&mut wheel);
            assert_eq!(wheel.selected_prize().index, target, "target {target}");
        }
    }

    #[test]
    fn test_rotate_to_by_duration_lands_on_target() {
        let mut wheel = wheel(6);
        wheel
            .rotate_to(
                PrizeQuery::index(4),
                RotateTo::duration(Duration::from_secs(3)).with_flags(RotateFlags::empty()),
            )
            .expect("start");
        let frames = drive(&mut wheel);
        assert_eq!(wheel.selected_prize().index, 4);
        // 3 derived laps on a 660 ring is at least 1980 units: the motion
        // runs well past the requested time's distance, never under it.
        assert!(frames > 60, "expected a multi-second spin, got {frames} frames");
    }

    #[test]
    fn test_events_fire_in_order_with_selections() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let start_log = Rc::clone(&events);
        let stop_log = Rc::clone(&events);
        let mut wheel = Roulette::builder()
            .prizes(cells(6))
            .on_start(move |ev| start_log.borrow_mut().push(("start", ev.index)))
            .on_stop(move |ev| stop_log.borrow_mut().push(("stop", ev.index)))
            .build()
            .expect("valid wheel");

        wheel
            .rotate_to(
                PrizeQuery::index(3),
                RotateTo::laps(1).with_flags(RotateFlags::empty()),
            )
            .expect("start");
        drive(&mut wheel);

        assert_eq!(*events.borrow(), vec![("start", 0), ("stop", 3)]);
    }

    #[test]
    fn test_tick_fires_once_per_block() {
        let ticks = Rc::new(RefCell::new(0usize));
        let counter = Rc::clone(&ticks);
        let mut wheel = Roulette::builder()
            .prizes(cells(6))
            .feedback(FnFeedback::new(move || *counter.borrow_mut() += 1))
            .build()
            .expect("valid wheel");

        // 990 units: 8 block crossings plus the final partial block past
        // its midline.
        wheel
            .rotate_to(
                PrizeQuery::index(3),
                RotateTo::laps(1).with_flags(RotateFlags::empty()),
            )
            .expect("start");
        drive(&mut wheel);
        assert_eq!(*ticks.borrow(), 9);
    }

    #[test]
    fn test_stop_cuts_rotation_immediately() {
        let stops = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&stops);
        let mut wheel = Roulette::builder()
            .prizes(cells(6))
            .on_stop(move |ev| log.borrow_mut().push(ev.index))
            .build()
            .expect("valid wheel");

        wheel.rotate(2000.0).expect("start");
        for _ in 0..10 {
            wheel.step();
        }
        assert!(wheel.is_rotating());

        wheel.stop();
        assert!(!wheel.is_rotating());
        assert_eq!(stops.borrow().len(), 1);
        // No pending frame runs afterwards.
        assert!(!wheel.step());
        assert_eq!(stops.borrow().len(), 1);

        // Stopping while idle is a no-op.
        wheel.stop();
        assert_eq!(stops.borrow().len(), 1);
    }

    #[test]
    fn test_rotating_signal_mirrors_state() {
        let mut wheel = wheel(6);
        let rotating = wheel.rotating_signal();
        assert!(!rotating.get());

        wheel.rotate(300.0).expect("start");
        assert!(rotating.get());

        drive(&mut wheel);
        assert!(!rotating.get());
    }

    #[test]
    fn test_ring_invariants_hold_across_rotation() {
        let mut wheel = wheel(6);
        wheel.rotate(1500.0).expect("start");

        let mut identity: Vec<usize> = wheel.prizes().map(|p| p.index).collect();
        identity.sort_unstable();

        while wheel.step() {
            assert_eq!(wheel.prize_count(), 6);
            let mut now: Vec<usize> = wheel.prizes().map(|p| p.index).collect();
            now.sort_unstable();
            assert_eq!(now, identity);
        }
    }

    #[test]
    fn test_first_and_last_block_track_recycling() {
        let mut wheel = wheel(6);
        assert_eq!(wheel.first_block().index, 0);
        assert_eq!(wheel.last_block().index, 5);

        // One full block of travel recycles the front exactly once.
        wheel.rotate(115.0).expect("start");
        drive(&mut wheel);
        assert_eq!(wheel.first_block().index, 1);
        assert_eq!(wheel.last_block().index, 0);
    }

    #[test]
    fn test_consecutive_rotations_resume_from_offset() {
        let mut wheel = wheel(6);
        wheel.rotate(50.0).expect("start");
        drive(&mut wheel);
        let parked = wheel.first_block().offset;
        assert!(parked < 0.0, "strip should rest mid-block");

        // A second spin starts from the parked offset and still lands
        // where asked.
        wheel
            .rotate_to(
                PrizeQuery::index(2),
                RotateTo::laps(1).with_flags(RotateFlags::empty()),
            )
            .expect("second start");
        drive(&mut wheel);
        assert_eq!(wheel.selected_prize().index, 2);
    }
}
