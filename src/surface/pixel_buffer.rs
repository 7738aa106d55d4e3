//! Raw RGBA pixel buffers
//!
//! A `PixelBuffer` is the canonical output of a readback: four bytes per
//! pixel in R, G, B, A order, rows stored top to bottom.

use crate::errors::{ExtractError, ExtractResult};

/// Number of bytes per RGBA texel
pub const BYTES_PER_PIXEL: usize = 4;

/// Flat RGBA pixel data with known dimensions
///
/// The length of `data` always equals `width * height * 4`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zeroed (transparent black) buffer
    pub fn new(width: u32, height: u32) -> Self {
        PixelBuffer {
            width,
            height,
            data: vec![0; Self::expected_len(width, height)],
        }
    }

    /// Wrap existing bytes
    ///
    /// # Arguments
    /// * `width` - Width in pixels
    /// * `height` - Height in pixels
    /// * `data` - RGBA bytes, row-major, top to bottom
    ///
    /// # Returns
    /// The buffer, or an error if the byte count does not match the dimensions
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> ExtractResult<Self> {
        let expected = Self::expected_len(width, height);
        if data.len() != expected {
            return Err(ExtractError::GenericError(format!(
                "Pixel data holds {} bytes, {}x{} RGBA needs {}",
                data.len(), width, height, expected
            )));
        }
        Ok(PixelBuffer { width, height, data })
    }

    fn expected_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * BYTES_PER_PIXEL
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Get the RGBA value at a position, or None if out of bounds
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let texel = &self.data[idx..idx + BYTES_PER_PIXEL];
        Some([texel[0], texel[1], texel[2], texel[3]])
    }

    /// Get one row of bytes
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let stride = self.width as usize * BYTES_PER_PIXEL;
        let start = y as usize * stride;
        Some(&self.data[start..start + stride])
    }

    /// Iterate over texels as 4-byte slices
    pub fn texels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(BYTES_PER_PIXEL)
    }

    /// Iterate mutably over texels as 4-byte slices
    pub fn texels_mut(&mut self) -> impl Iterator<Item = &mut [u8]> {
        self.data.chunks_exact_mut(BYTES_PER_PIXEL)
    }
}
