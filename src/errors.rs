//! Custom error types for pixel extraction

use std::fmt;
use std::io;

/// Extraction-specific error types
#[derive(Debug)]
pub enum ExtractError {
    /// I/O error
    IoError(io::Error),
    /// Image encoding or decoding error
    ImageError(image::ImageError),
    /// The extractor was destroyed or its renderer no longer exists
    Detached,
    /// The renderer is busy with another borrow (re-entrant call)
    RendererBusy,
    /// The host refused to allocate an offscreen render target
    Allocation { width: u32, height: u32 },
    /// A texture handle does not belong to the renderer
    UnknownTexture(u32),
    /// Invalid fill colour
    InvalidColor(String),
    /// Invalid region or size string
    InvalidRegion(String),
    /// Invalid configuration value
    ConfigError(String),
    /// Unsupported raw dump compression
    UnsupportedCompression(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractError::IoError(e) => write!(f, "I/O error: {}", e),
            ExtractError::ImageError(e) => write!(f, "Image error: {}", e),
            ExtractError::Detached => write!(f, "Extractor is not attached to a renderer"),
            ExtractError::RendererBusy => write!(f, "Renderer is already borrowed"),
            ExtractError::Allocation { width, height } =>
                write!(f, "Failed to allocate {}x{} render target", width, height),
            ExtractError::UnknownTexture(id) => write!(f, "Unknown texture: {}", id),
            ExtractError::InvalidColor(s) => write!(f, "Invalid fill color: {}", s),
            ExtractError::InvalidRegion(s) => write!(f, "Invalid region: {}", s),
            ExtractError::ConfigError(s) => write!(f, "Invalid configuration: {}", s),
            ExtractError::UnsupportedCompression(s) => write!(f, "Unsupported compression: {}", s),
            ExtractError::GenericError(msg) => write!(f, "Extract error: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ExtractError::IoError(e) => Some(e),
            ExtractError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for ExtractError {
    fn from(error: io::Error) -> Self {
        ExtractError::IoError(error)
    }
}

impl From<image::ImageError> for ExtractError {
    fn from(error: image::ImageError) -> Self {
        ExtractError::ImageError(error)
    }
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;
