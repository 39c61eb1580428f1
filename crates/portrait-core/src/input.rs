//! Raw input samples consumed by the transform engine.
//!
//! Samples are plain values copied out of browser events so the mapping can
//! run (and be tested) without any platform API.

/// Pointer position in client (viewport) coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSample {
    pub client_x: f64,
    pub client_y: f64,
}

impl PointerSample {
    pub fn new(client_x: f64, client_y: f64) -> Self {
        Self { client_x, client_y }
    }
}

/// Bounding box of a tile in client coordinates, as reported by layout.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// A tile that has not been laid out yet reports a zero (or garbage) size.
    #[inline]
    pub fn has_area(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// One device-orientation reading. Either angle may be missing when the
/// sensor has not produced a value yet.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    /// Front-back tilt in degrees, nominally -180..180.
    pub beta: Option<f64>,
    /// Left-right tilt in degrees, nominally -90..90.
    pub gamma: Option<f64>,
}

impl OrientationSample {
    pub fn new(beta: Option<f64>, gamma: Option<f64>) -> Self {
        Self { beta, gamma }
    }

    /// Both angles, if both are present and finite.
    #[inline]
    pub fn angles(&self) -> Option<(f64, f64)> {
        match (self.beta, self.gamma) {
            (Some(b), Some(g)) if b.is_finite() && g.is_finite() => Some((b, g)),
            _ => None,
        }
    }
}
