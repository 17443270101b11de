//! Raw angle measurement and continuous-angle unwrapping.
//!
//! A raw `atan2` measurement lives in `[-π, π]` and jumps when the pointer
//! crosses the negative x-axis. The tracker in this module folds consecutive
//! raw measurements into a continuous angle by accumulating shortest wrapped
//! deltas, so a drag through several revolutions grows monotonically in the
//! drag direction instead of jumping by ±2π.

use std::f64::consts::{PI, TAU};

use crate::point::Point;

/// Measure the raw angle of `sample` around `pivot`, in radians.
///
/// The result is `atan2(dy, dx)` and lies in `[-π, π]`. Callers are expected
/// to have filtered samples near the pivot already; at the pivot itself the
/// angle is the `atan2(0, 0)` convention of the platform (zero).
#[inline]
#[must_use]
pub fn raw_angle(pivot: Point, sample: Point) -> f64 {
    (sample.y - pivot.y).atan2(sample.x - pivot.x)
}

/// Wrap an angular delta to the shortest equivalent step in `(-π, π]`.
///
/// A small step across the ±π boundary comes out as a small step, never as a
/// near-2π jump in the opposite direction.
///
/// # Example
///
/// ```
/// use std::f64::consts::PI;
/// use opendial_geometry::wrap_delta;
///
/// // crossing the boundary: 3.0 rad -> -3.0 rad is a +0.28.. rad step
/// let delta = wrap_delta(-3.0 - 3.0);
/// assert!((delta - (2.0 * PI - 6.0)).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn wrap_delta(delta: f64) -> f64 {
    let wrapped = (delta + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { wrapped + TAU } else { wrapped }
}

/// Accumulates a continuous (unwrapped) rotation angle from raw samples.
///
/// The tracker keeps the last raw measurement and the running continuous
/// angle. [`advance`](Self::advance) folds the next raw sample in through
/// [`wrap_delta`], so the continuous angle is free to exceed ±2π.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleTracker {
    last_raw: f64,
    unwrapped: f64,
}

impl AngleTracker {
    /// A tracker at angle zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-anchor on a fresh gesture.
    ///
    /// Records `raw` as the reference for the next [`advance`](Self::advance)
    /// without disturbing the accumulated angle — the dial keeps its position
    /// between gestures.
    pub fn begin(&mut self, raw: f64) {
        self.last_raw = raw;
    }

    /// Fold the next raw measurement in; returns the wrapped increment.
    pub fn advance(&mut self, raw: f64) -> f64 {
        let delta = wrap_delta(raw - self.last_raw);
        self.last_raw = raw;
        self.unwrapped += delta;
        delta
    }

    /// Shift the accumulated angle directly, bypassing raw measurement.
    ///
    /// Used for deceleration integration and snap adjustment, where motion is
    /// synthesized rather than measured.
    pub fn shift(&mut self, delta: f64) {
        self.unwrapped += delta;
    }

    /// Assign the accumulated angle directly.
    pub fn set(&mut self, angle: f64) {
        self.unwrapped = angle;
        self.last_raw = wrap_delta(angle);
    }

    /// The continuous angle accumulated so far.
    #[must_use]
    pub fn unwrapped(&self) -> f64 {
        self.unwrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_raw_angle_cardinal_directions() {
        let pivot = Point::new(0.0, 0.0);
        assert_relative_eq!(raw_angle(pivot, Point::new(10.0, 0.0)), 0.0);
        assert_relative_eq!(raw_angle(pivot, Point::new(0.0, 10.0)), FRAC_PI_2);
        assert_relative_eq!(raw_angle(pivot, Point::new(-10.0, 0.0)), PI);
        assert_relative_eq!(raw_angle(pivot, Point::new(0.0, -10.0)), -FRAC_PI_2);
    }

    #[test]
    fn test_raw_angle_offset_pivot() {
        let pivot = Point::new(50.0, 50.0);
        assert_relative_eq!(raw_angle(pivot, Point::new(50.0, 150.0)), FRAC_PI_2);
    }

    #[test]
    fn test_wrap_delta_identity_for_small_steps() {
        assert_relative_eq!(wrap_delta(0.3), 0.3);
        assert_relative_eq!(wrap_delta(-0.3), -0.3);
        assert_relative_eq!(wrap_delta(0.0), 0.0);
    }

    #[test]
    fn test_wrap_delta_boundary_crossing() {
        // 3.0 -> -3.0 crosses +π; true motion is a small positive step
        assert_relative_eq!(wrap_delta(-6.0), TAU - 6.0, epsilon = 1e-12);
        // -3.0 -> 3.0 crosses -π; true motion is a small negative step
        assert_relative_eq!(wrap_delta(6.0), 6.0 - TAU, epsilon = 1e-12);
    }

    #[test]
    fn test_wrap_delta_half_turn_is_positive() {
        // (-π, π]: exactly half a turn wraps to +π, not -π
        assert_relative_eq!(wrap_delta(PI), PI);
        assert_relative_eq!(wrap_delta(-PI), PI);
    }

    #[test]
    fn test_tracker_accumulates_across_boundary() {
        let mut tracker = AngleTracker::new();
        tracker.begin(3.0);
        tracker.shift(3.0);
        let delta = tracker.advance(-3.0);
        assert_relative_eq!(delta, TAU - 6.0, epsilon = 1e-12);
        assert_relative_eq!(tracker.unwrapped(), 3.0 + (TAU - 6.0), epsilon = 1e-12);
    }

    #[test]
    fn test_tracker_multi_revolution() {
        let pivot = Point::new(0.0, 0.0);
        let mut tracker = AngleTracker::new();
        tracker.begin(raw_angle(pivot, Point::new(100.0, 0.0)));

        // three full turns, eighth-turn steps
        let step = TAU / 8.0;
        for i in 1..=24 {
            let theta = step * f64::from(i);
            let sample = Point::new(100.0 * theta.cos(), 100.0 * theta.sin());
            tracker.advance(raw_angle(pivot, sample));
        }
        assert_relative_eq!(tracker.unwrapped(), 3.0 * TAU, epsilon = 1e-9);
    }

    #[test]
    fn test_tracker_begin_keeps_position() {
        let mut tracker = AngleTracker::new();
        tracker.begin(0.0);
        tracker.advance(1.0);
        tracker.begin(-2.0);
        assert_relative_eq!(tracker.unwrapped(), 1.0);
        // next advance measures from the new anchor
        let delta = tracker.advance(-1.5);
        assert_relative_eq!(delta, 0.5);
    }

    #[test]
    fn test_tracker_set_overrides() {
        let mut tracker = AngleTracker::new();
        tracker.shift(5.0);
        tracker.set(-12.0);
        assert_relative_eq!(tracker.unwrapped(), -12.0);
    }

    use proptest::prelude::*;

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(256))]

        #[test]
        fn prop_wrap_delta_stays_in_half_open_turn(delta in -100.0f64..100.0f64) {
            let wrapped = wrap_delta(delta);
            prop_assert!(wrapped > -PI);
            prop_assert!(wrapped <= PI);
        }

        #[test]
        fn prop_wrap_delta_preserves_small_steps(delta in -3.1f64..=3.1f64) {
            prop_assert!((wrap_delta(delta) - delta).abs() < 1e-12);
        }

        #[test]
        fn prop_tracker_sums_small_steps(steps in proptest::collection::vec(-3.0f64..3.0f64, 1..64)) {
            let mut tracker = AngleTracker::new();
            tracker.begin(0.0);
            let mut raw = 0.0f64;
            let mut expected = 0.0f64;
            for step in steps {
                raw = wrap_delta(raw + step);
                expected += tracker.advance(raw);
            }
            prop_assert!((tracker.unwrapped() - expected).abs() < 1e-9);
        }
    }
}
