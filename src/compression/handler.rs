//! Compression handler trait definition

use crate::errors::ExtractResult;

/// Strategy trait for pixel payload compression
pub trait CompressionHandler: Send + Sync {
    /// Decompress a stored payload
    fn decompress(&self, data: &[u8]) -> ExtractResult<Vec<u8>>;

    /// Compress a pixel payload
    fn compress(&self, data: &[u8]) -> ExtractResult<Vec<u8>>;

    /// Name used on the command line and in configuration
    fn name(&self) -> &'static str;

    /// Code stored in the raw dump header
    fn code(&self) -> u8;
}
