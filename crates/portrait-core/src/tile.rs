//! Per-tile state machines.
//!
//! Each mounted tile owns one of these exclusively. Event handlers feed
//! samples in through the update methods and read the resulting
//! [`TransformState`] back out to render.

use crate::input::{Bounds, OrientationSample, PointerSample};
use crate::state::TransformState;
use crate::transform::{from_orientation, from_pointer, CalibrationProfile};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    /// Neutral transform, glare hidden.
    #[default]
    Idle,
    /// Transform follows live input.
    Active,
}

/// Hover-driven tile (desktop and rainbow variants).
#[derive(Clone, Debug, Default)]
pub struct PointerTile {
    state: TransformState,
    phase: Phase,
}

impl PointerTile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transform(&self) -> TransformState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Apply a pointer move. Returns `false` (and leaves the tile untouched)
    /// when the bounds are unusable.
    pub fn pointer_move(&mut self, sample: PointerSample, bounds: Bounds) -> bool {
        let Some(next) = from_pointer(sample, bounds) else {
            return false;
        };
        if self.phase == Phase::Idle {
            log::debug!("[tile] pointer enter at ({}, {})", next.glare_x, next.glare_y);
        }
        self.state = next;
        self.phase = Phase::Active;
        true
    }

    /// Pointer left the tile: snap back to neutral.
    pub fn pointer_leave(&mut self) {
        if self.phase == Phase::Active {
            log::debug!("[tile] pointer leave");
        }
        self.state = TransformState::NEUTRAL;
        self.phase = Phase::Idle;
    }
}

/// Raw angles of the most recent orientation event, for the on-tile readout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DebugReadout {
    pub beta: f64,
    pub gamma: f64,
}

impl DebugReadout {
    /// Missing angles read as 0.
    pub fn from_sample(sample: OrientationSample) -> Self {
        Self {
            beta: sample.beta.unwrap_or(0.0),
            gamma: sample.gamma.unwrap_or(0.0),
        }
    }
}

/// Tilt-driven tile (mobile variant).
///
/// There is no "leave" for a sensor, so once active the tile stays active.
/// Without sensor access it simply stays idle at the neutral transform.
#[derive(Clone, Debug, Default)]
pub struct OrientationTile {
    profile: CalibrationProfile,
    state: TransformState,
    phase: Phase,
    debug: DebugReadout,
}

impl OrientationTile {
    pub fn new(profile: CalibrationProfile) -> Self {
        Self {
            profile,
            ..Self::default()
        }
    }

    pub fn profile(&self) -> &CalibrationProfile {
        &self.profile
    }

    pub fn transform(&self) -> TransformState {
        self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn debug(&self) -> DebugReadout {
        self.debug
    }

    /// Apply an orientation reading. The debug readout is always refreshed;
    /// the transform only changes when both angles are present.
    pub fn orientation(&mut self, sample: OrientationSample) -> bool {
        self.debug = DebugReadout::from_sample(sample);
        let Some(next) = from_orientation(sample, &self.profile) else {
            log::trace!("[tile] incomplete orientation sample {:?}", sample);
            return false;
        };
        if self.phase == Phase::Idle {
            log::debug!("[tile] first orientation sample, activating");
        }
        self.state = next;
        self.phase = Phase::Active;
        true
    }
}
