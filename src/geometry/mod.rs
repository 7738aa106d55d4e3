//! Geometry for extraction regions
//!
//! Logical frames are expressed in resolution-independent units and are
//! mapped to physical pixel rectangles through a resolution factor.

mod frame;
mod scaling;

#[cfg(test)]
mod tests;

pub use frame::{Frame, PixelRect};
pub use scaling::{scale_dimension, scale_floor, SCALE_EPSILON};
