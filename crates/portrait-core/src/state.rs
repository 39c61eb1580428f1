//! Transform state shared by every portrait variant.
//!
//! A `TransformState` is the full set of numbers a tile needs to draw itself:
//! the 3D tilt of the card and where (and how strongly) the glare sits on it.

use crate::constants::{MASKED_GLARE_OPACITY_GAIN, PERCENT_CENTER};
use crate::math::{clamp, clamp_percent, pointer_from_center};

/// Tilt and glare parameters for one tile.
///
/// Rotations are in degrees. `glare_x`/`glare_y` are percent of the tile and
/// always lie in \[0, 100\]; `glare_opacity` always lies in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub glare_x: f64,
    pub glare_y: f64,
    pub glare_opacity: f64,
}

impl TransformState {
    /// Resting state: flat card, glare centred and invisible.
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glare_x: PERCENT_CENTER,
        glare_y: PERCENT_CENTER,
        glare_opacity: 0.0,
    };

    /// Build a state, enforcing the glare range invariants.
    pub fn new(rotate_x: f64, rotate_y: f64, glare_x: f64, glare_y: f64, glare_opacity: f64) -> Self {
        Self {
            rotate_x,
            rotate_y,
            glare_x: clamp_percent(glare_x),
            glare_y: clamp_percent(glare_y),
            glare_opacity: clamp(glare_opacity, 0.0, 1.0),
        }
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// Normalized distance of the glare from the tile centre, in \[0, 1\].
    #[inline]
    pub fn pointer_from_center(&self) -> f64 {
        pointer_from_center(self.glare_x, self.glare_y)
    }

    /// Opacity of the masked glare layer.
    ///
    /// Not clamped: values below 0 or above 1 are clipped by the compositor,
    /// which is what produces the darkened cutoff toward the tile edges.
    #[inline]
    pub fn masked_glare_opacity(&self) -> f64 {
        MASKED_GLARE_OPACITY_GAIN * self.glare_opacity - self.pointer_from_center()
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
