//! Prelude for the geometry crate.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//!
//! ```
//! use opendial_geometry::prelude::*;
//!
//! let pivot = Point::new(0.0, 0.0);
//! let raw = raw_angle(pivot, Point::new(0.0, 50.0));
//! assert!((raw - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
//! ```

pub use crate::angle::{AngleTracker, raw_angle, wrap_delta};
pub use crate::error::GeometryError;
pub use crate::point::Point;
pub use crate::sector::{SectorCount, SpinDirection, resolve_sector, snap_offset};
