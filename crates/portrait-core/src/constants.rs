// Tilt and glare tuning constants shared by every portrait variant.

// Pointer mapping gains (degrees per percent away from centre)
pub const POINTER_ROTATE_X_GAIN: f64 = 0.5;
pub const POINTER_ROTATE_Y_GAIN: f64 = -0.3; // inverted so the card tilts toward the pointer

// Glare opacity while the tile is being driven
pub const POINTER_GLARE_OPACITY: f64 = 1.0;
pub const ORIENTATION_GLARE_OPACITY: f64 = 0.8; // constant, independent of tilt magnitude

// Masked glare: opacity = GAIN * glare_opacity - pointer_from_center
pub const MASKED_GLARE_OPACITY_GAIN: f64 = 1.5;

// Glare coordinates live in percent of the tile
pub const PERCENT_MIN: f64 = 0.0;
pub const PERCENT_MAX: f64 = 100.0;
pub const PERCENT_CENTER: f64 = 50.0;

// Wide orientation profile (full sensor range)
pub const WIDE_BETA_RANGE: (f64, f64) = (-180.0, 180.0);
pub const WIDE_GAMMA_RANGE: (f64, f64) = (-90.0, 90.0);
pub const WIDE_ROTATE_X_GAIN: f64 = 0.3;
pub const WIDE_ROTATE_Y_GAIN: f64 = -0.5;

// Narrow orientation profile (comfortable hand-held range, glare only)
pub const NARROW_BETA_RANGE: (f64, f64) = (-30.0, 30.0);
pub const NARROW_GAMMA_RANGE: (f64, f64) = (-20.0, 20.0);

// Spring transitions (unit mass)
pub const DESKTOP_SPRING_STIFFNESS: f64 = 700.0;
pub const DESKTOP_SPRING_DAMPING: f64 = 30.0;
pub const MOBILE_SPRING_STIFFNESS: f64 = 400.0;
pub const MOBILE_SPRING_DAMPING: f64 = 40.0;

// Viewport width at or below which the gallery switches to the mobile layout
pub const MOBILE_MAX_VIEWPORT_PX: f64 = 768.0;
