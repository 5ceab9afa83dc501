#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

/// A point in either screen or normalized space.
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

/// Where the overlay canvas sits on screen and how many pixels back it.
///
/// `left` / `top` / `width` / `height` describe the displayed bounding box in
/// CSS pixels, as measured by the host. `backing_w` / `backing_h` are the
/// canvas backing-store dimensions, which track the image's natural pixel
/// size once it has loaded.
#[derive(Debug, Clone, Copy, Default)]
pub struct Surface {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub backing_w: f64,
    pub backing_h: f64,
}

impl Surface {
    /// Update the displayed bounding box from a layout measurement.
    ///
    /// Dimensions are floored at one CSS pixel so later divisions stay finite.
    pub fn set_layout(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.left = left;
        self.top = top;
        self.width = width.max(1.0);
        self.height = height.max(1.0);
    }

    /// Update the backing resolution once the image's natural size is known.
    pub fn set_backing(&mut self, width: f64, height: f64) {
        self.backing_w = width.max(1.0);
        self.backing_h = height.max(1.0);
    }

    /// Whether the backing resolution is known yet.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.backing_w > 0.0 && self.backing_h > 0.0
    }

    /// Convert a screen-space point (CSS pixels) to normalized coordinates.
    ///
    /// The pointer offset within the displayed box is scaled up to backing
    /// pixels, then divided by the backing resolution, correcting for any
    /// difference between displayed size and backing size. Points outside
    /// the box map outside [0, 1]; clamping happens at the rectangle level.
    #[must_use]
    pub fn screen_to_norm(&self, screen: Point) -> Point {
        let scale_x = self.backing_w / self.width;
        let scale_y = self.backing_h / self.height;
        Point {
            x: ((screen.x - self.left) * scale_x) / self.backing_w,
            y: ((screen.y - self.top) * scale_y) / self.backing_h,
        }
    }
}
