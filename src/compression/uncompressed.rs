//! Pass-through handler

use crate::errors::ExtractResult;
use super::handler::CompressionHandler;

/// Stores pixels as-is (code 0)
pub struct UncompressedHandler;

impl CompressionHandler for UncompressedHandler {
    fn decompress(&self, data: &[u8]) -> ExtractResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn compress(&self, data: &[u8]) -> ExtractResult<Vec<u8>> {
        Ok(data.to_vec())
    }

    fn name(&self) -> &'static str {
        "none"
    }

    fn code(&self) -> u8 {
        0
    }
}
