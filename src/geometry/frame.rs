//! Frame structure for defining extraction areas
//!
//! A frame is a rectangle in surface-local, resolution-independent units.
//! Its top-left corner is `(x, y)`, with `y` growing downwards.

use super::scaling::{scale_dimension, scale_floor};

/// Rectangle in logical units
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Frame {
    /// X-coordinate of the top-left corner
    pub x: f64,

    /// Y-coordinate of the top-left corner
    pub y: f64,

    /// Width in logical units
    pub width: f64,

    /// Height in logical units
    pub height: f64,
}

impl Frame {
    /// Create a new frame
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width in logical units
    /// * `height` - Height in logical units
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Frame { x, y, width, height }
    }

    /// Create a frame anchored at the origin
    pub fn sized(width: f64, height: f64) -> Self {
        Frame::new(0.0, 0.0, width, height)
    }

    /// Get the rightmost X coordinate (exclusive)
    pub fn end_x(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> f64 {
        self.y + self.height
    }

    /// Whether the frame covers no area
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Map this frame to physical pixels
    ///
    /// Origin and extent are both scaled and floored with the shared
    /// epsilon bias.
    ///
    /// # Arguments
    /// * `resolution` - Scale factor between logical and physical pixels
    ///
    /// # Returns
    /// The physical pixel rectangle covered by this frame
    pub fn to_pixels(&self, resolution: f64) -> PixelRect {
        PixelRect {
            x: scale_floor(self.x, resolution),
            y: scale_floor(self.y, resolution),
            width: scale_dimension(self.width, resolution),
            height: scale_dimension(self.height, resolution),
        }
    }
}

/// Rectangle in physical pixels
///
/// The origin may lie outside the surface it addresses; reads treat the
/// uncovered part as transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i64, y: i64, width: u32, height: u32) -> Self {
        PixelRect { x, y, width, height }
    }

    /// Number of bytes an RGBA read of this rectangle produces
    pub fn byte_len(&self) -> usize {
        self.width as usize * self.height as usize * 4
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}
