//! Small numeric helpers used by the transform engine.

use crate::constants::{PERCENT_CENTER, PERCENT_MAX, PERCENT_MIN};
use glam::DVec2;

/// Restrict `value` to `[min, max]`.
///
/// A NaN `value` collapses to `min`.
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Restrict `value` to the percent range `[0, 100]`.
#[inline]
pub fn clamp_percent(value: f64) -> f64 {
    clamp(value, PERCENT_MIN, PERCENT_MAX)
}

/// Nearest integral value, halfway cases rounded away from zero.
#[inline]
pub fn round(value: f64) -> f64 {
    value.round()
}

/// Distance of a glare position from the tile centre, normalized so that any
/// point 50 percent or further away saturates at 1.
#[inline]
pub fn pointer_from_center(x: f64, y: f64) -> f64 {
    let offset = DVec2::new(x, y) - DVec2::splat(PERCENT_CENTER);
    clamp(offset.length() / PERCENT_CENTER, 0.0, 1.0)
}
