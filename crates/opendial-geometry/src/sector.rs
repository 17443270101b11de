//! Sector arithmetic for snap-to-position dials.
//!
//! A dial with N sectors has boundaries at every `2π/N` radians, measured
//! from angle zero. Rest resolution finds the boundary nearest an arbitrary
//! continuous angle; exact midpoints between two boundaries are broken
//! toward the direction the dial was last moving.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// Validated count of equal angular sectors (N ≥ 1).
///
/// `1` means the whole circle is a single sector and snapping is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct SectorCount(u32);

impl SectorCount {
    /// The whole circle as one sector; snapping disabled.
    pub const ONE: Self = Self(1);

    /// Create a sector count, rejecting zero.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidSectorCount`] when `count` is zero —
    /// downstream modulo-by-sector-width arithmetic needs a positive divisor.
    pub fn new(count: u32) -> Result<Self, GeometryError> {
        if count == 0 {
            return Err(GeometryError::InvalidSectorCount(count));
        }
        Ok(Self(count))
    }

    /// The number of sectors.
    #[must_use]
    pub fn get(self) -> u32 {
        self.0
    }

    /// Arc width of one sector, in radians.
    #[must_use]
    pub fn width(self) -> f64 {
        TAU / f64::from(self.0)
    }

    /// Whether the whole circle is one sector (snapping disabled).
    #[must_use]
    pub fn is_single(self) -> bool {
        self.0 == 1
    }
}

impl Default for SectorCount {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u32> for SectorCount {
    type Error = GeometryError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<SectorCount> for u32 {
    fn from(count: SectorCount) -> Self {
        count.get()
    }
}

/// Direction of rotation: counter-clockwise is the direction of increasing
/// angle under the `atan2` convention of the measurement plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpinDirection {
    /// Increasing angle.
    CounterClockwise,
    /// Decreasing angle.
    Clockwise,
}

impl SpinDirection {
    /// Direction implied by a signed angular velocity; zero maps
    /// counter-clockwise.
    #[must_use]
    pub fn from_velocity(velocity: f64) -> Self {
        if velocity < 0.0 {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// Index of the sector boundary nearest to `angle`.
///
/// The continuous angle is wrapped into `[0, 2π)` for the measurement only;
/// the caller's stored angle is untouched. An angle exactly midway between
/// two boundaries resolves toward `direction`. The result is always below
/// the sector count.
///
/// # Example
///
/// ```
/// use opendial_geometry::{SectorCount, SpinDirection, resolve_sector};
///
/// let quarters = SectorCount::new(4)?;
/// assert_eq!(resolve_sector(0.1, quarters, SpinDirection::CounterClockwise), 0);
/// // exact midpoint breaks toward the direction of motion
/// let mid = std::f64::consts::FRAC_PI_4;
/// assert_eq!(resolve_sector(mid, quarters, SpinDirection::CounterClockwise), 1);
/// assert_eq!(resolve_sector(mid, quarters, SpinDirection::Clockwise), 0);
/// # Ok::<(), opendial_geometry::GeometryError>(())
/// ```
#[must_use]
pub fn resolve_sector(angle: f64, count: SectorCount, direction: SpinDirection) -> u32 {
    let k = nearest_boundary_index(angle, count, direction);
    (k % u64::from(count.get())) as u32
}

/// Signed offset from `angle` to its nearest sector boundary.
///
/// The offset lies in `[-width/2, width/2]` and is zero for a single-sector
/// dial. Adding it to the continuous angle moves the dial onto the boundary
/// that [`resolve_sector`] reports, without collapsing accumulated
/// revolutions.
#[must_use]
pub fn snap_offset(angle: f64, count: SectorCount, direction: SpinDirection) -> f64 {
    if count.is_single() {
        return 0.0;
    }
    let k = nearest_boundary_index(angle, count, direction);
    (k as f64) * count.width() - angle.rem_euclid(TAU)
}

/// Unwrapped boundary index in `[0, N]` nearest to the wrapped angle.
fn nearest_boundary_index(angle: f64, count: SectorCount, direction: SpinDirection) -> u64 {
    let width = count.width();
    let position = angle.rem_euclid(TAU) / width;
    let lower = position.floor();
    let fraction = position - lower;
    let round_up = match fraction.partial_cmp(&0.5) {
        Some(Ordering::Greater) => true,
        Some(Ordering::Equal) => direction == SpinDirection::CounterClockwise,
        _ => false,
    };
    lower as u64 + u64::from(round_up)
}
