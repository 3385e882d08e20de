#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// A sampled location in surface coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface.
///
/// `width` / `height` are in CSS pixels.
/// `dpr` is the device pixel ratio (1.0 = no density correction).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    /// Build a viewport, treating a non-positive or non-finite `dpr` as 1.0
    /// and negative sizes as empty.
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self { width: width.max(0.0), height: height.max(0.0), dpr }
    }

    /// Backing-store size in device pixels, `(width, height)`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.width * self.dpr).round() as u32,
            (self.height * self.dpr).round() as u32,
        )
    }

    /// The `setTransform` matrix that maps CSS pixels onto the backing store.
    #[must_use]
    pub fn transform(&self) -> [f64; 6] {
        [self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0]
    }

    /// Returns `true` if the surface has no drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
