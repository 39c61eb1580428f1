//! Input-to-transform mapping.
//!
//! Two pure entry points cover every variant: [`from_pointer`] for hover-driven
//! tiles and [`from_orientation`] for tilt-driven ones. Orientation behaviour
//! is selected by a [`CalibrationProfile`] value rather than per-component code.

use crate::constants::*;
use crate::input::{Bounds, OrientationSample, PointerSample};
use crate::math::{clamp, clamp_percent, round};
use crate::state::TransformState;

/// Degrees of card rotation per percent of normalized tilt away from centre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationGains {
    pub x: f64,
    pub y: f64,
}

/// How raw beta/gamma angles map onto glare position and card rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CalibrationProfile {
    pub beta_range: (f64, f64),
    pub gamma_range: (f64, f64),
    /// `None` keeps the card flat; only the glare follows the tilt.
    pub rotation: Option<RotationGains>,
}

impl CalibrationProfile {
    /// Full sensor range, card rotates with the device.
    pub const WIDE: Self = Self {
        beta_range: WIDE_BETA_RANGE,
        gamma_range: WIDE_GAMMA_RANGE,
        rotation: Some(RotationGains {
            x: WIDE_ROTATE_X_GAIN,
            y: WIDE_ROTATE_Y_GAIN,
        }),
    };

    /// Small hand-held range, rotation suppressed.
    pub const NARROW: Self = Self {
        beta_range: NARROW_BETA_RANGE,
        gamma_range: NARROW_GAMMA_RANGE,
        rotation: None,
    };

    /// Map `beta` into percent of this profile's beta range.
    #[inline]
    pub fn normalize_beta(&self, beta: f64) -> f64 {
        normalize(beta, self.beta_range)
    }

    /// Map `gamma` into percent of this profile's gamma range.
    #[inline]
    pub fn normalize_gamma(&self, gamma: f64) -> f64 {
        normalize(gamma, self.gamma_range)
    }
}

impl Default for CalibrationProfile {
    fn default() -> Self {
        Self::NARROW
    }
}

#[inline]
fn normalize(value: f64, (min, max): (f64, f64)) -> f64 {
    let span = max - min;
    if span <= 0.0 {
        return PERCENT_CENTER;
    }
    clamp_percent((clamp(value, min, max) - min) / span * PERCENT_MAX)
}

/// Map a pointer position over a tile to its transform.
///
/// Returns `None` when the tile has no usable size, so no NaN ever reaches
/// the tile state.
pub fn from_pointer(sample: PointerSample, bounds: Bounds) -> Option<TransformState> {
    if !bounds.has_area() {
        log::trace!("[pointer] ignoring sample over unsized tile {:?}", bounds);
        return None;
    }
    let mouse_x = sample.client_x - bounds.left;
    let mouse_y = sample.client_y - bounds.top;

    let percent_x = clamp_percent(round((PERCENT_MAX / bounds.width) * mouse_x));
    let percent_y = clamp_percent(round((PERCENT_MAX / bounds.height) * mouse_y));

    let center_x = percent_x - PERCENT_CENTER;
    let center_y = percent_y - PERCENT_CENTER;

    Some(TransformState::new(
        center_y * POINTER_ROTATE_X_GAIN,
        center_x * POINTER_ROTATE_Y_GAIN,
        percent_x,
        percent_y,
        POINTER_GLARE_OPACITY,
    ))
}

/// Map a device orientation reading to a transform.
///
/// Returns `None` when either angle is missing; the tile then keeps whatever
/// state it already had.
pub fn from_orientation(
    sample: OrientationSample,
    profile: &CalibrationProfile,
) -> Option<TransformState> {
    let (beta, gamma) = sample.angles()?;

    let normalized_beta = profile.normalize_beta(beta);
    let normalized_gamma = profile.normalize_gamma(gamma);

    let (rotate_x, rotate_y) = match profile.rotation {
        Some(gains) => (
            (normalized_beta - PERCENT_CENTER) * gains.x,
            (normalized_gamma - PERCENT_CENTER) * gains.y,
        ),
        None => (0.0, 0.0),
    };

    Some(TransformState::new(
        rotate_x,
        rotate_y,
        normalized_gamma,
        normalized_beta,
        ORIENTATION_GLARE_OPACITY,
    ))
}
