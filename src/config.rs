//! Runtime configuration
//!
//! Settings are read from TOML. The built-in defaults ship as
//! `extract_defaults.toml` and are parsed once on first use; a user file only
//! has to name the keys it changes.

use std::fs;

use lazy_static::lazy_static;
use log::debug;

use crate::compression::CompressionFactory;
use crate::errors::{ExtractError, ExtractResult};
use crate::host::BackendKind;
use crate::surface::FillColor;
use crate::utils::logger;

lazy_static! {
    static ref DEFAULT_CONFIG: ExtractConfig = {
        let content = include_str!("../extract_defaults.toml");
        ExtractConfig::base().merged_with(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse built-in defaults: {}", e);
            ExtractConfig::base()
        })
    };
}

/// Extraction settings
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractConfig {
    /// Backend the reference renderer emulates
    pub backend: BackendKind,
    /// Physical pixels per logical unit
    pub resolution: f64,
    /// Logical screen size, or None to use the input image size
    pub screen: Option<(u32, u32)>,
    /// Margin colour for letterbox scaling
    pub scale_fill: FillColor,
    /// Default output format name
    pub output_format: String,
    /// Compression name for raw dumps
    pub compression: String,
    /// Log level name
    pub log_level: String,
}

impl ExtractConfig {
    /// Built-in defaults
    pub fn defaults() -> &'static ExtractConfig {
        &DEFAULT_CONFIG
    }

    /// Parse a configuration on top of the built-in defaults
    pub fn from_str(content: &str) -> ExtractResult<Self> {
        Self::defaults().clone().merged_with(content)
    }

    /// Load a configuration file on top of the built-in defaults
    pub fn from_file(path: &str) -> ExtractResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Hard-coded values used if the shipped defaults cannot be parsed
    fn base() -> Self {
        ExtractConfig {
            backend: BackendKind::WebGL,
            resolution: 1.0,
            screen: None,
            scale_fill: FillColor::WHITE,
            output_format: "png".to_string(),
            compression: "none".to_string(),
            log_level: "info".to_string(),
        }
    }

    /// Override fields with the keys present in `content`
    fn merged_with(mut self, content: &str) -> ExtractResult<Self> {
        let value: toml::Value = content.parse()
            .map_err(|e| ExtractError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        if let Some(renderer) = value.get("renderer") {
            if let Some(backend) = renderer.get("backend").and_then(|v| v.as_str()) {
                self.backend = backend.parse()?;
            }
            if let Some(resolution) = renderer.get("resolution") {
                self.resolution = number(resolution, "renderer.resolution")?;
                if !(self.resolution > 0.0 && self.resolution.is_finite()) {
                    return Err(ExtractError::ConfigError(format!(
                        "renderer.resolution must be positive, got {}", self.resolution
                    )));
                }
            }
            let width = renderer.get("width").and_then(|v| v.as_integer());
            let height = renderer.get("height").and_then(|v| v.as_integer());
            match (width, height) {
                (Some(w), Some(h)) => {
                    let to_u32 = |v: i64| u32::try_from(v).map_err(|_| ExtractError::ConfigError(
                        format!("renderer size {} out of range", v)));
                    self.screen = Some((to_u32(w)?, to_u32(h)?));
                },
                (None, None) => {},
                _ => return Err(ExtractError::ConfigError(
                    "renderer.width and renderer.height must be set together".to_string())),
            }
        }

        if let Some(fill) = value.get("scale").and_then(|s| s.get("fill")) {
            self.scale_fill = match fill {
                toml::Value::Integer(i) => FillColor::new(u32::try_from(*i).map_err(|_| {
                    ExtractError::InvalidColor(i.to_string())
                })?),
                toml::Value::String(s) => s.parse()?,
                other => return Err(ExtractError::InvalidColor(other.to_string())),
            };
        }

        if let Some(output) = value.get("output") {
            if let Some(format) = output.get("format").and_then(|v| v.as_str()) {
                self.output_format = format.to_lowercase();
            }
            if let Some(compression) = output.get("compression").and_then(|v| v.as_str()) {
                CompressionFactory::get_handler_by_name(compression)?;
                self.compression = compression.to_lowercase();
            }
        }

        if let Some(level) = value.get("logging").and_then(|l| l.get("level")).and_then(|v| v.as_str()) {
            if logger::parse_level(level).is_none() {
                return Err(ExtractError::ConfigError(format!("Unknown log level '{}'", level)));
            }
            self.log_level = level.to_lowercase();
        }

        debug!("Loaded configuration: {:?}", self);
        Ok(self)
    }
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self::defaults().clone()
    }
}

fn number(value: &toml::Value, key: &str) -> ExtractResult<f64> {
    value.as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
        .ok_or_else(|| ExtractError::ConfigError(format!("{} must be a number", key)))
}
