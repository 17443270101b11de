//! Prelude for the engine crate.
//!
//! This module re-exports the most commonly used types, plus the geometry
//! types that appear in the engine's public signatures.
//!
//! # Example
//!
//! ```
//! use opendial_engine::prelude::*;
//!
//! let mut engine = RotationEngine::with_defaults(Point::new(160.0, 160.0));
//! engine.begin_drag(Point::new(260.0, 160.0), 0.0, &mut ());
//! assert_eq!(engine.phase(), Phase::Dragging);
//! ```

pub use crate::config::{ConfigError, DialConfig};
pub use crate::engine::{Phase, RotationEngine};
pub use crate::events::{EventLog, RotationEvent, RotationObserver};
pub use crate::motion::DecelerationTuning;

pub use opendial_geometry::{Point, SectorCount, SpinDirection};
