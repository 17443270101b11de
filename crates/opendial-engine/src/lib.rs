//! Rotation Engine for OpenDial
//!
//! This crate implements the state machine at the heart of a touch-driven
//! rotary dial: it consumes timestamped pointer samples around a fixed
//! pivot, tracks a continuous rotation angle and angular velocity, coasts
//! under friction after release, and resolves a rest sector, notifying an
//! observer at each lifecycle point.
//!
//! # Overview
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`RotationEngine`] — drag lifecycle, coasting, rest resolution |
//! | [`config`] | [`DialConfig`] — recognized options, validated at construction |
//! | [`events`] | [`RotationObserver`] seam and the [`EventLog`] recorder |
//! | [`motion`] | Friction decay, eased trajectories, tuning defaults |
//!
//! # Contract
//!
//! The engine is single-threaded and cooperative. It owns no timers and
//! spawns no work: drags advance when the host delivers samples, and
//! coasting advances when the host delivers clock ticks. Every operation is
//! a synchronous, terminating computation, and every out-of-contract input
//! (out-of-state call, sample inside the touch filter, non-increasing
//! timestamp, non-finite value) is a silent no-op that mutates nothing.
//! Errors exist only at construction.
//!
//! # Example
//!
//! ```
//! use opendial_engine::prelude::*;
//!
//! let mut engine = RotationEngine::with_defaults(Point::new(0.0, 0.0));
//! let mut log = EventLog::new();
//!
//! engine.begin_drag(Point::new(100.0, 0.0), 0.0, &mut log);
//! engine.continue_drag(Point::new(0.0, 100.0), 0.1, &mut log);
//! engine.end_drag(0.1, &mut log);
//!
//! // the release was fast, so the dial coasts; drive it with clock ticks
//! while engine.phase() == Phase::Decelerating {
//!     engine.deceleration_tick(0.016, &mut log);
//! }
//! assert_eq!(engine.phase(), Phase::Resting);
//! assert_eq!(log.last_sector(), Some(0));
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod config;
pub mod engine;
pub mod events;
pub mod motion;
pub mod prelude;

pub use config::{ConfigError, DialConfig};
pub use engine::{Phase, RotationEngine};
pub use events::{EventLog, RotationEvent, RotationObserver};
pub use motion::DecelerationTuning;
