//! Observer seam between the engine and its host toolkit.
//!
//! The engine never calls out to the platform; it reports lifecycle points
//! through [`RotationObserver`], and the host decides what a "rotated by"
//! or "stopped at sector" means on screen. Every method has a no-op
//! default, so hosts implement only the notifications they care about —
//! the same shape as a delegate with optional methods.

use serde::{Deserialize, Serialize};

/// Lifecycle notifications emitted by [`RotationEngine`](crate::RotationEngine).
///
/// All methods are optional. Notifications are invoked synchronously,
/// inside the engine operation that caused them.
pub trait RotationObserver {
    /// A drag passed the touch filter and is about to start tracking.
    fn rotation_will_begin(&mut self) {}

    /// The dial rotated by `delta` radians — incremental and signed, once
    /// per accepted sample or synthesized motion step.
    fn rotated_by(&mut self, delta: f64) {
        let _ = delta;
    }

    /// The drag was released.
    fn rotation_ended(&mut self) {}

    /// A post-release coast finished or was cancelled.
    fn deceleration_ended(&mut self) {}

    /// The dial came to rest on `sector`.
    fn stopped_at_sector(&mut self, sector: u32) {
        let _ = sector;
    }
}

/// The null observer: every notification is dropped.
impl RotationObserver for () {}

/// A single recorded notification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum RotationEvent {
    /// `rotation_will_begin` fired.
    WillBegin,
    /// `rotated_by` fired with this delta.
    RotatedBy(f64),
    /// `rotation_ended` fired.
    Ended,
    /// `deceleration_ended` fired.
    DecelerationEnded,
    /// `stopped_at_sector` fired with this sector.
    StoppedAtSector(u32),
}

/// Records every notification in order.
///
/// The capture observer for tests and hosts that replay event streams.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<RotationEvent>,
}

impl EventLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything recorded so far, in emission order.
    #[must_use]
    pub fn events(&self) -> &[RotationEvent] {
        &self.events
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Sum of every `RotatedBy` delta — the rotation an observer that
    /// integrates deltas would have accumulated.
    #[must_use]
    pub fn integrated_delta(&self) -> f64 {
        self.events
            .iter()
            .filter_map(|event| match event {
                RotationEvent::RotatedBy(delta) => Some(*delta),
                _ => None,
            })
            .sum()
    }

    /// The sector from the most recent `StoppedAtSector`, if any.
    #[must_use]
    pub fn last_sector(&self) -> Option<u32> {
        self.events.iter().rev().find_map(|event| match event {
            RotationEvent::StoppedAtSector(sector) => Some(*sector),
            _ => None,
        })
    }

    /// Whether a notification of the same variant as `event` was recorded.
    #[must_use]
    pub fn saw(&self, event: &RotationEvent) -> bool {
        self.events
            .iter()
            .any(|recorded| std::mem::discriminant(recorded) == std::mem::discriminant(event))
    }
}

impl RotationObserver for EventLog {
    fn rotation_will_begin(&mut self) {
        self.events.push(RotationEvent::WillBegin);
    }

    fn rotated_by(&mut self, delta: f64) {
        self.events.push(RotationEvent::RotatedBy(delta));
    }

    fn rotation_ended(&mut self) {
        self.events.push(RotationEvent::Ended);
    }

    fn deceleration_ended(&mut self) {
        self.events.push(RotationEvent::DecelerationEnded);
    }

    fn stopped_at_sector(&mut self, sector: u32) {
        self.events.push(RotationEvent::StoppedAtSector(sector));
    }
}
