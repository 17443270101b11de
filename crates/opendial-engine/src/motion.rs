//! Friction decay and eased trajectories.
//!
//! Two kinds of synthesized motion drive the dial after the finger lifts:
//! natural coasting, where the release velocity decays exponentially under a
//! friction coefficient, and programmatic rotation, where an ease-out curve
//! carries the dial to a requested angle over a fixed duration. Both are
//! stepped by the host's clock ticks; nothing here keeps time of its own.

use serde::{Deserialize, Serialize};

/// Default exponential friction coefficient, 1/s.
pub const DEFAULT_FRICTION: f64 = 3.0;

/// Default velocity magnitude treated as rest, rad/s.
pub const DEFAULT_REST_EPSILON: f64 = 0.01;

/// Default safety cap on a coast's duration, seconds.
///
/// Exponential decay never reaches zero on its own; the cap bounds the run
/// when the rest epsilon is configured very small.
pub const DEFAULT_DECELERATION_TIMEOUT: f64 = 4.0;

/// Default duration of a programmatic eased rotation, seconds.
pub const DEFAULT_ANIMATION_DURATION: f64 = 0.35;

/// Gap after the last accepted sample beyond which the measured release
/// velocity is stale, seconds.
///
/// A finger that halts and then lifts reads as a zero-velocity release, not
/// as a fling at whatever speed the last movement happened to have.
pub const VELOCITY_STALL_WINDOW: f64 = 0.1;

/// Tuning for the post-release coast.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecelerationTuning {
    /// Exponential decay rate, 1/s. Higher stops the dial sooner.
    pub friction: f64,
    /// Velocity magnitude below which the dial is considered at rest, rad/s.
    pub rest_epsilon: f64,
    /// Hard cap on the coast duration, seconds.
    pub timeout: f64,
}

impl Default for DecelerationTuning {
    fn default() -> Self {
        Self {
            friction: DEFAULT_FRICTION,
            rest_epsilon: DEFAULT_REST_EPSILON,
            timeout: DEFAULT_DECELERATION_TIMEOUT,
        }
    }
}

/// Decay a signed angular velocity over `elapsed` seconds.
///
/// `v * exp(-friction * elapsed)`: the magnitude strictly decreases for any
/// positive elapsed time and the sign is preserved — decay alone can never
/// reverse the dial.
#[inline]
#[must_use]
pub fn decay_velocity(velocity: f64, friction: f64, elapsed: f64) -> f64 {
    velocity * (-friction * elapsed).exp()
}

/// Cubic ease-out, clamped to `[0, 1]` progress.
///
/// Fast at the start, asymptotically flat at the end — the same feel as a
/// natural coast, which is why programmatic rotation uses it.
#[inline]
#[must_use]
pub fn ease_out(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}
