//! Pixel-bearing values produced by extraction
//!
//! This module defines the raw pixel buffer, the canvas surface handle,
//! the fill colour used for transparent texels and the image handle
//! returned by `image()`.

mod pixel_buffer;
mod fill_color;
mod canvas;
mod image_handle;

#[cfg(test)]
mod tests;

pub use pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};
pub use fill_color::FillColor;
pub use canvas::Canvas;
pub(crate) use canvas::{blend_over, copy_region};
pub use image_handle::ExtractedImage;
