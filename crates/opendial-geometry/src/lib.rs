//! Angle and Sector Math for OpenDial
//!
//! This crate provides the pure geometry underneath the rotary dial control:
//! measuring pointer samples as angles around a fixed pivot, unwrapping those
//! measurements into a continuous rotation angle, and resolving rest angles
//! against a set of equally spaced snap sectors.
//!
//! # Overview
//!
//! The geometry layer supports:
//! - **Measurement**: [`raw_angle`] converts a pivot-relative sample into a
//!   raw angle via `atan2`
//! - **Unwrapping**: [`wrap_delta`] and [`AngleTracker`] accumulate shortest
//!   wrapped deltas so multi-revolution drags never jump at the ±π boundary
//! - **Sectors**: [`SectorCount`] divides the circle into N equal arcs;
//!   [`resolve_sector`] and [`snap_offset`] pick the boundary nearest a rest
//!   angle, breaking exact midpoints toward the final [`SpinDirection`]
//!
//! # Contract
//!
//! Every function here is a synchronous, terminating computation:
//! - No heap allocations
//! - O(1) time complexity
//! - No syscalls or I/O
//! - Never panics on finite input
//!
//! Continuous angles are never reduced modulo 2π in place; wrapping happens
//! on a copy at the moment a sector is resolved.
//!
//! # Example
//!
//! ```
//! use opendial_geometry::{AngleTracker, Point, SectorCount, SpinDirection, raw_angle, resolve_sector};
//!
//! let pivot = Point::new(0.0, 0.0);
//! let mut tracker = AngleTracker::new();
//!
//! tracker.begin(raw_angle(pivot, Point::new(100.0, 0.0)));
//! let delta = tracker.advance(raw_angle(pivot, Point::new(0.0, 100.0)));
//! assert!((delta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//!
//! let sectors = SectorCount::new(4)?;
//! let sector = resolve_sector(tracker.unwrapped(), sectors, SpinDirection::CounterClockwise);
//! assert_eq!(sector, 1);
//! # Ok::<(), opendial_geometry::GeometryError>(())
//! ```

#![deny(unsafe_op_in_unsafe_fn, clippy::unwrap_used)]
#![deny(static_mut_refs)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod angle;
pub mod error;
pub mod point;
pub mod prelude;
pub mod sector;

pub use angle::{AngleTracker, raw_angle, wrap_delta};
pub use error::GeometryError;
pub use point::Point;
pub use sector::{SectorCount, SpinDirection, resolve_sector, snap_offset};
