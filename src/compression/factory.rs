//! Factory for creating compression handlers

use crate::errors::{ExtractError, ExtractResult};
use super::handler::CompressionHandler;
use super::uncompressed::UncompressedHandler;
use super::deflate::DeflateHandler;
use super::zstd::ZstdHandler;

/// Factory for creating compression handlers
pub struct CompressionFactory;

impl CompressionFactory {
    /// Create the handler for a code read from a dump header
    pub fn create_handler(code: u8) -> ExtractResult<Box<dyn CompressionHandler>> {
        match code {
            0 => Ok(Box::new(UncompressedHandler)),
            1 => Ok(Box::new(DeflateHandler::new())),
            2 => Ok(Box::new(ZstdHandler::new())),
            _ => Err(ExtractError::UnsupportedCompression(format!("code {}", code)))
        }
    }

    /// Get a handler by name
    pub fn get_handler_by_name(name: &str) -> ExtractResult<Box<dyn CompressionHandler>> {
        match name.trim().to_lowercase().as_str() {
            "uncompressed" | "none" | "raw" => Ok(Box::new(UncompressedHandler)),
            "deflate" | "zlib" | "zip" => Ok(Box::new(DeflateHandler::new())),
            "zstd" => Ok(Box::new(ZstdHandler::new())),
            _ => Err(ExtractError::UnsupportedCompression(name.to_string()))
        }
    }

    /// Get all available compression handlers
    pub fn get_available_handlers() -> Vec<Box<dyn CompressionHandler>> {
        vec![
            Box::new(UncompressedHandler),
            Box::new(DeflateHandler::new()),
            Box::new(ZstdHandler::new())
        ]
    }
}
