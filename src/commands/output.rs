//! Output writers for extracted canvases

use std::fs;
use std::str::FromStr;

use image::ImageFormat;
use log::info;

use crate::errors::{ExtractError, ExtractResult};
use crate::surface::Canvas;

/// What to write for an extracted canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Encoded image file
    Image(ImageFormat),
    /// Text file holding a data URL of the given encoding
    DataUrl(ImageFormat),
}

impl OutputFormat {
    /// Encode `canvas` and write it to `path`
    pub fn write(&self, canvas: &Canvas, path: &str) -> ExtractResult<()> {
        match self {
            OutputFormat::Image(format) => {
                let bytes = canvas.encode(*format)?;
                fs::write(path, &bytes)?;
                info!("Wrote {}x{} {:?} to {} ({} bytes)",
                      canvas.width(), canvas.height(), format, path, bytes.len());
            },
            OutputFormat::DataUrl(format) => {
                let url = canvas.to_data_url_with(*format)?;
                fs::write(path, &url)?;
                info!("Wrote {}x{} data URL to {} ({} chars)",
                      canvas.width(), canvas.height(), path, url.len());
            },
        }
        Ok(())
    }
}

impl FromStr for OutputFormat {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Image(ImageFormat::Png)),
            "jpeg" | "jpg" => Ok(OutputFormat::Image(ImageFormat::Jpeg)),
            "dataurl" | "base64" | "dataurl-png" => Ok(OutputFormat::DataUrl(ImageFormat::Png)),
            "dataurl-jpeg" | "dataurl-jpg" => Ok(OutputFormat::DataUrl(ImageFormat::Jpeg)),
            other => Err(ExtractError::ConfigError(format!("Unknown output format: {}", other))),
        }
    }
}

/// Output path for item `index` of a batch of `count`
///
/// Single outputs keep the path; batches get `_<index>` before the extension.
pub fn indexed_path(path: &str, index: usize, count: usize) -> String {
    if count <= 1 {
        return path.to_string();
    }

    let file_start = path.rfind(['/', '\\']).map(|i| i + 1).unwrap_or(0);
    match path[file_start..].rfind('.') {
        Some(dot) if dot > 0 => {
            let split = file_start + dot;
            format!("{}_{}{}", &path[..split], index, &path[split..])
        },
        _ => format!("{}_{}", path, index),
    }
}
