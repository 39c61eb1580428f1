//! Single-item carousel used by the mobile gallery.
//!
//! Navigation is deliberately minimal: tapping the left or right half of the
//! view steps backward or forward, wrapping at either end.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavZone {
    Left,
    Right,
}

/// Which half of a view of width `width` the x offset `x` falls in.
/// The exact midpoint counts as right.
#[inline]
pub fn zone_for(x: f64, width: f64) -> NavZone {
    if x < width / 2.0 {
        NavZone::Left
    } else {
        NavZone::Right
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, index: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    /// Jump to `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> usize {
        if index < self.len {
            self.index = index;
        }
        self.index
    }

    pub fn navigate(&mut self, zone: NavZone) -> usize {
        match zone {
            NavZone::Left => self.prev(),
            NavZone::Right => self.next(),
        }
    }
}
