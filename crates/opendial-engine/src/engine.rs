//! The rotation state machine.
//!
//! [`RotationEngine`] turns raw pointer samples into a continuous rotation
//! angle and drives the dial through its lifecycle:
//!
//! ```text
//! Idle ──begin_drag──▶ Dragging ──end_drag──▶ Resting
//!                         │                      ▲
//!                         └──end_drag (fast)──▶ Decelerating ──tick…──┘
//! ```
//!
//! `Resting` accepts the next gesture exactly like `Idle`. `Animating` is
//! the synthesized trajectory of [`rotate_to_angle`](RotationEngine::rotate_to_angle)
//! and, like `Decelerating`, exits only into `Resting` — via tick
//! completion or [`cancel_deceleration`](RotationEngine::cancel_deceleration).

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use opendial_geometry::{
    AngleTracker, Point, SectorCount, SpinDirection, raw_angle, resolve_sector, snap_offset,
};

use crate::config::{ConfigError, DialConfig};
use crate::events::RotationObserver;
use crate::motion::{VELOCITY_STALL_WINDOW, decay_velocity, ease_out};

/// Lifecycle phase of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Phase {
    /// No gesture has run yet.
    #[default]
    Idle,
    /// A drag is being tracked.
    Dragging,
    /// Coasting after release, velocity decaying under friction.
    Decelerating,
    /// Easing toward a programmatic rotation target.
    Animating,
    /// At rest with a resolved sector; accepts the next gesture.
    Resting,
}

/// Pure angle/velocity/deceleration state machine for a rotary dial.
///
/// The engine consumes timestamped pointer samples relative to a fixed
/// pivot and clock ticks for synthesized motion, and reports lifecycle
/// points through a [`RotationObserver`] passed into each operation. It
/// holds no callbacks, no timers, and no platform handles.
///
/// Out-of-contract input is a silent no-op: calls in the wrong phase,
/// samples inside the touch filter, non-increasing timestamps, and
/// non-finite values all leave the state untouched. See the crate docs for
/// the full contract.
#[derive(Debug, Clone)]
pub struct RotationEngine {
    pivot: Point,
    config: DialConfig,
    sectors: SectorCount,
    phase: Phase,
    tracker: AngleTracker,
    velocity: f64,
    last_sample_at: f64,
    coast_elapsed: f64,
    anim_from: f64,
    anim_target: f64,
}

impl RotationEngine {
    /// Create an engine around `pivot` with a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] contract violation; see
    /// [`DialConfig::validate`].
    pub fn new(pivot: Point, config: DialConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let sectors = SectorCount::new(config.number_of_sectors)?;
        Ok(Self {
            pivot,
            config,
            sectors,
            phase: Phase::Idle,
            tracker: AngleTracker::new(),
            velocity: 0.0,
            last_sample_at: 0.0,
            coast_elapsed: 0.0,
            anim_from: 0.0,
            anim_target: 0.0,
        })
    }

    /// Create an engine around `pivot` with [`DialConfig::default`].
    #[must_use]
    pub fn with_defaults(pivot: Point) -> Self {
        Self {
            pivot,
            config: DialConfig::default(),
            sectors: SectorCount::ONE,
            phase: Phase::Idle,
            tracker: AngleTracker::new(),
            velocity: 0.0,
            last_sample_at: 0.0,
            coast_elapsed: 0.0,
            anim_from: 0.0,
            anim_target: 0.0,
        }
    }

    // --- Queries ---

    /// The live continuous angle, radians. Accumulates across revolutions.
    #[must_use]
    pub fn current_angle(&self) -> f64 {
        self.tracker.unwrapped()
    }

    /// The most recent angular velocity estimate, rad/s. Zero at rest.
    #[must_use]
    pub fn angular_velocity(&self) -> f64 {
        self.velocity
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The fixed center of rotation.
    #[must_use]
    pub fn pivot(&self) -> Point {
        self.pivot
    }

    /// The configuration the engine was built with.
    #[must_use]
    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    /// The validated sector count.
    #[must_use]
    pub fn sector_count(&self) -> SectorCount {
        self.sectors
    }

    // --- Drag lifecycle ---

    /// Start tracking a drag.
    ///
    /// No-op unless the engine is `Idle` or `Resting`, and no-op when the
    /// sample sits inside the touch filter — the angle at the pivot is
    /// undefined, so a drag never starts there. Emits *will-begin* on
    /// success. The dial keeps its current angle; the sample only anchors
    /// where on the rim the finger landed.
    pub fn begin_drag<O: RotationObserver + ?Sized>(
        &mut self,
        position: Point,
        timestamp: f64,
        observer: &mut O,
    ) {
        if !matches!(self.phase, Phase::Idle | Phase::Resting) {
            return;
        }
        if !timestamp.is_finite() || self.filtered(position) {
            return;
        }
        self.tracker.begin(raw_angle(self.pivot, position));
        self.velocity = 0.0;
        self.last_sample_at = timestamp;
        self.phase = Phase::Dragging;
        debug!(angle = self.tracker.unwrapped(), "drag began");
        observer.rotation_will_begin();
    }

    /// Track the next drag sample.
    ///
    /// No-op unless `Dragging`. Samples inside the touch filter are
    /// discarded with the last valid angle retained, and samples whose
    /// timestamp does not increase are discarded — velocity is undefined
    /// for them. Emits *rotated-by* once per accepted sample.
    pub fn continue_drag<O: RotationObserver + ?Sized>(
        &mut self,
        position: Point,
        timestamp: f64,
        observer: &mut O,
    ) {
        if self.phase != Phase::Dragging {
            return;
        }
        if self.filtered(position) {
            return;
        }
        let elapsed = timestamp - self.last_sample_at;
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return;
        }
        let delta = self.tracker.advance(raw_angle(self.pivot, position));
        self.velocity = delta / elapsed;
        self.last_sample_at = timestamp;
        trace!(delta, velocity = self.velocity, "drag sample");
        observer.rotated_by(delta);
    }

    /// Release the drag.
    ///
    /// No-op unless `Dragging`. Emits *ended*, then either enters
    /// `Decelerating` (deceleration enabled and the release was fast) or
    /// resolves the rest sector immediately. A release that comes more
    /// than [`VELOCITY_STALL_WINDOW`] after the last accepted sample is a
    /// standstill release: the stale velocity is treated as zero.
    pub fn end_drag<O: RotationObserver + ?Sized>(&mut self, timestamp: f64, observer: &mut O) {
        if self.phase != Phase::Dragging {
            return;
        }
        if timestamp.is_finite() && timestamp - self.last_sample_at > VELOCITY_STALL_WINDOW {
            self.velocity = 0.0;
        }
        observer.rotation_ended();
        let tuning = self.config.deceleration;
        if self.config.should_decelerate && self.velocity.abs() >= tuning.rest_epsilon {
            self.coast_elapsed = 0.0;
            self.phase = Phase::Decelerating;
            debug!(velocity = self.velocity, "coasting");
        } else {
            self.come_to_rest(SpinDirection::from_velocity(self.velocity), observer);
        }
    }

    // --- Synthesized motion ---

    /// Advance coasting or animated motion by `elapsed` seconds.
    ///
    /// The host's clock drives all post-release motion through this single
    /// entry point. No-op unless `Decelerating` or `Animating`; non-finite
    /// or non-positive elapsed times are discarded.
    pub fn deceleration_tick<O: RotationObserver + ?Sized>(
        &mut self,
        elapsed: f64,
        observer: &mut O,
    ) {
        if !elapsed.is_finite() || elapsed <= 0.0 {
            return;
        }
        match self.phase {
            Phase::Decelerating => self.coast_step(elapsed, observer),
            Phase::Animating => self.animation_step(elapsed, observer),
            _ => {}
        }
    }

    /// Force an immediate stop of any coasting or animated motion.
    ///
    /// From `Decelerating`, emits *did-end-decelerating* and resolves the
    /// rest sector at the current angle; from `Animating`, resolves where
    /// the animation happens to be. No-op in every other phase.
    pub fn cancel_deceleration<O: RotationObserver + ?Sized>(&mut self, observer: &mut O) {
        match self.phase {
            Phase::Decelerating => {
                debug!(velocity = self.velocity, "coast cancelled");
                observer.deceleration_ended();
                self.come_to_rest(SpinDirection::from_velocity(self.velocity), observer);
            }
            Phase::Animating => {
                debug!("animation cancelled");
                let direction = SpinDirection::from_velocity(self.anim_target - self.anim_from);
                self.come_to_rest(direction, observer);
            }
            _ => {}
        }
    }

    /// Rotate to `angle` (radians, any finite real; no wraparound applied).
    ///
    /// No-op unless `Idle` or `Resting` — a live gesture or coast is never
    /// hijacked; cancel it first. With `animated` false the angle is set
    /// immediately: one *rotated-by* carries the full delta and the sector
    /// is reported (multi-sector dials) without adjusting the angle. With
    /// `animated` true the dial eases to the target over the configured
    /// duration, driven by [`deceleration_tick`](Self::deceleration_tick),
    /// and ends with full rest resolution, snap included.
    pub fn rotate_to_angle<O: RotationObserver + ?Sized>(
        &mut self,
        angle: f64,
        animated: bool,
        observer: &mut O,
    ) {
        if !matches!(self.phase, Phase::Idle | Phase::Resting) {
            return;
        }
        if !angle.is_finite() {
            return;
        }
        if animated {
            self.anim_from = self.tracker.unwrapped();
            self.anim_target = angle;
            self.coast_elapsed = 0.0;
            self.velocity = 0.0;
            self.phase = Phase::Animating;
            debug!(from = self.anim_from, target = angle, "animating to angle");
        } else {
            let delta = angle - self.tracker.unwrapped();
            self.tracker.set(angle);
            self.velocity = 0.0;
            debug!(angle, "rotated to angle");
            observer.rotated_by(delta);
            if !self.sectors.is_single() {
                let direction = SpinDirection::from_velocity(delta);
                observer.stopped_at_sector(resolve_sector(angle, self.sectors, direction));
            }
            self.phase = Phase::Resting;
        }
    }

    /// Property-style write of the live angle.
    ///
    /// Exactly `rotate_to_angle(angle, false, observer)`; pairs with
    /// [`current_angle`](Self::current_angle).
    pub fn set_angle<O: RotationObserver + ?Sized>(&mut self, angle: f64, observer: &mut O) {
        self.rotate_to_angle(angle, false, observer);
    }

    // --- Internals ---

    /// Whether a sample is rejected by the touch filter.
    fn filtered(&self, position: Point) -> bool {
        let distance = self.pivot.distance_to(position);
        !distance.is_finite() || distance < self.config.filter_touch_distance
    }

    /// One coasting step: integrate, decay, check termination.
    fn coast_step<O: RotationObserver + ?Sized>(&mut self, elapsed: f64, observer: &mut O) {
        let step = self.velocity * elapsed;
        self.tracker.shift(step);
        observer.rotated_by(step);
        let tuning = self.config.deceleration;
        self.velocity = decay_velocity(self.velocity, tuning.friction, elapsed);
        self.coast_elapsed += elapsed;
        trace!(
            velocity = self.velocity,
            elapsed = self.coast_elapsed,
            "coast step"
        );
        if self.velocity.abs() < tuning.rest_epsilon || self.coast_elapsed >= tuning.timeout {
            observer.deceleration_ended();
            self.come_to_rest(SpinDirection::from_velocity(self.velocity), observer);
        }
    }

    /// One animation step: ease toward the target, land exactly on it.
    fn animation_step<O: RotationObserver + ?Sized>(&mut self, elapsed: f64, observer: &mut O) {
        self.coast_elapsed += elapsed;
        let progress = self.coast_elapsed / self.config.animation_duration;
        let next = if progress >= 1.0 {
            self.anim_target
        } else {
            self.anim_from + (self.anim_target - self.anim_from) * ease_out(progress)
        };
        let step = next - self.tracker.unwrapped();
        self.tracker.set(next);
        self.velocity = step / elapsed;
        observer.rotated_by(step);
        if progress >= 1.0 {
            let direction = SpinDirection::from_velocity(self.anim_target - self.anim_from);
            self.come_to_rest(direction, observer);
        }
    }

    /// Shared rest resolution: snap (multi-sector dials), report, rest.
    fn come_to_rest<O: RotationObserver + ?Sized>(
        &mut self,
        direction: SpinDirection,
        observer: &mut O,
    ) {
        let sector = if self.sectors.is_single() {
            0
        } else {
            let offset = snap_offset(self.tracker.unwrapped(), self.sectors, direction);
            if offset.abs() > 0.0 {
                self.tracker.shift(offset);
                observer.rotated_by(offset);
            }
            resolve_sector(self.tracker.unwrapped(), self.sectors, direction)
        };
        self.velocity = 0.0;
        self.phase = Phase::Resting;
        debug!(angle = self.tracker.unwrapped(), sector, "rest");
        observer.stopped_at_sector(sector);
    }
}
