//! Engine configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use opendial_geometry::GeometryError;

use crate::motion::{DEFAULT_ANIMATION_DURATION, DecelerationTuning};

/// Default minimum pivot distance for a sample to be accepted.
pub const DEFAULT_FILTER_TOUCH_DISTANCE: f64 = 30.0;

/// Recognized options for a [`RotationEngine`](crate::RotationEngine).
///
/// Serde-friendly; unspecified fields take their defaults. Validation runs
/// at engine construction, not at deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialConfig {
    /// Minimum distance from the pivot for a sample to be accepted.
    ///
    /// Samples closer than this are rejected outright: near the pivot,
    /// positional noise of a few points swings the measured angle wildly.
    pub filter_touch_distance: f64,
    /// Whether a fast release coasts under friction before resting.
    pub should_decelerate: bool,
    /// Number of equal snap sectors; `1` disables snapping.
    pub number_of_sectors: u32,
    /// Duration of a `rotate_to_angle` animated trajectory, seconds.
    pub animation_duration: f64,
    /// Post-release coast tuning.
    pub deceleration: DecelerationTuning,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            filter_touch_distance: DEFAULT_FILTER_TOUCH_DISTANCE,
            should_decelerate: true,
            number_of_sectors: 1,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            deceleration: DecelerationTuning::default(),
        }
    }
}

impl DialConfig {
    /// Check every option against its contract.
    ///
    /// # Errors
    ///
    /// Returns the first violated contract: a zero sector count, a
    /// non-finite or negative filter distance, or non-positive friction,
    /// rest epsilon, timeout, or animation duration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.number_of_sectors == 0 {
            return Err(ConfigError::InvalidSectorCount(self.number_of_sectors));
        }
        if !self.filter_touch_distance.is_finite() || self.filter_touch_distance < 0.0 {
            return Err(ConfigError::InvalidFilterDistance(self.filter_touch_distance));
        }
        let tuning = self.deceleration;
        if !tuning.friction.is_finite() || tuning.friction <= 0.0 {
            return Err(ConfigError::InvalidFriction(tuning.friction));
        }
        if !tuning.rest_epsilon.is_finite() || tuning.rest_epsilon <= 0.0 {
            return Err(ConfigError::InvalidRestEpsilon(tuning.rest_epsilon));
        }
        if !tuning.timeout.is_finite() || tuning.timeout <= 0.0 {
            return Err(ConfigError::InvalidTimeout(tuning.timeout));
        }
        if !self.animation_duration.is_finite() || self.animation_duration <= 0.0 {
            return Err(ConfigError::InvalidAnimationDuration(self.animation_duration));
        }
        Ok(())
    }
}

/// Contract violations rejected at engine construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A dial needs at least one sector.
    #[error("invalid sector count: {0} (a dial needs at least one sector)")]
    InvalidSectorCount(u32),

    /// The touch filter distance must be finite and non-negative.
    #[error("filter distance must be finite and non-negative, got {0}")]
    InvalidFilterDistance(f64),

    /// Friction must be finite and positive.
    #[error("deceleration friction must be finite and positive, got {0}")]
    InvalidFriction(f64),

    /// The rest epsilon must be finite and positive.
    #[error("rest epsilon must be finite and positive, got {0}")]
    InvalidRestEpsilon(f64),

    /// The deceleration timeout must be finite and positive.
    #[error("deceleration timeout must be finite and positive, got {0}")]
    InvalidTimeout(f64),

    /// The animation duration must be finite and positive.
    #[error("animation duration must be finite and positive, got {0}")]
    InvalidAnimationDuration(f64),
}

impl From<GeometryError> for ConfigError {
    fn from(err: GeometryError) -> Self {
        match err {
            GeometryError::InvalidSectorCount(count) => Self::InvalidSectorCount(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(DialConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_sectors_rejected() {
        let config = DialConfig {
            number_of_sectors: 0,
            ..DialConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::InvalidSectorCount(0)));
    }

    #[test]
    fn test_negative_filter_distance_rejected() {
        let config = DialConfig {
            filter_touch_distance: -1.0,
            ..DialConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFilterDistance(_))
        ));
    }

    #[test]
    fn test_zero_filter_distance_is_valid() {
        let config = DialConfig {
            filter_touch_distance: 0.0,
            ..DialConfig::default()
        };
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_non_finite_filter_distance_rejected() {
        let config = DialConfig {
            filter_touch_distance: f64::NAN,
            ..DialConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_friction_rejected() {
        let mut config = DialConfig::default();
        config.deceleration.friction = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidFriction(_))
        ));
    }

    #[test]
    fn test_bad_rest_epsilon_rejected() {
        let mut config = DialConfig::default();
        config.deceleration.rest_epsilon = -0.5;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidRestEpsilon(_))
        ));
    }

    #[test]
    fn test_bad_timeout_rejected() {
        let mut config = DialConfig::default();
        config.deceleration.timeout = f64::INFINITY;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidTimeout(_))));
    }

    #[test]
    fn test_bad_animation_duration_rejected() {
        let config = DialConfig {
            animation_duration: 0.0,
            ..DialConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidAnimationDuration(_))
        ));
    }

    #[test]
    fn test_serde_partial_config_fills_defaults() -> Result<(), serde_json::Error> {
        let config: DialConfig = serde_json::from_str(r#"{"number_of_sectors": 8}"#)?;
        assert_eq!(config.number_of_sectors, 8);
        assert!(config.should_decelerate);
        assert_eq!(config.validate(), Ok(()));
        Ok(())
    }

    #[test]
    fn test_serde_round_trip() -> Result<(), serde_json::Error> {
        let config = DialConfig {
            filter_touch_distance: 12.0,
            should_decelerate: false,
            number_of_sectors: 6,
            ..DialConfig::default()
        };
        let json = serde_json::to_string(&config)?;
        let back: DialConfig = serde_json::from_str(&json)?;
        assert_eq!(config, back);
        Ok(())
    }
}
