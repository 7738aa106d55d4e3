//! Image handle returned by `image()`

use base64::Engine;
use image::DynamicImage;

use crate::errors::{ExtractError, ExtractResult};

/// Image whose source is a data URL
///
/// Construction never decodes; call `decode` when the pixels are needed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedImage {
    src: String,
}

impl ExtractedImage {
    pub fn new(src: String) -> Self {
        ExtractedImage { src }
    }

    /// The data URL this image was created from
    pub fn src(&self) -> &str {
        &self.src
    }

    /// MIME type declared by the data URL, if any
    pub fn mime_type(&self) -> Option<&str> {
        let header = self.src.strip_prefix("data:")?.split(',').next()?;
        let mime = header.split(';').next()?;
        if mime.is_empty() {
            None
        } else {
            Some(mime)
        }
    }

    /// Decode the embedded image
    pub fn decode(&self) -> ExtractResult<DynamicImage> {
        let (header, payload) = self.src
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .ok_or_else(|| ExtractError::GenericError("Image source is not a data URL".to_string()))?;

        if !header.ends_with(";base64") || payload.is_empty() {
            return Err(ExtractError::GenericError("Image source holds no base64 payload".to_string()));
        }

        let bytes = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .map_err(|e| ExtractError::GenericError(format!("Invalid base64 data URL: {}", e)))?;

        Ok(image::load_from_memory(&bytes)?)
    }
}
