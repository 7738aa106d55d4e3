//! Tests for configuration loading

extern crate std;

use crate::config::ExtractConfig;
use crate::errors::ExtractError;
use crate::host::BackendKind;
use crate::surface::FillColor;

#[test]
fn test_shipped_defaults() {
    let config = ExtractConfig::default();
    std::assert_eq!(config.backend, BackendKind::WebGL);
    std::assert_eq!(config.resolution, 1.0);
    std::assert_eq!(config.screen, None);
    std::assert_eq!(config.scale_fill, FillColor::WHITE);
    std::assert_eq!(config.compression, "none");
    std::assert_eq!(config.log_level, "info");
}

#[test]
fn test_partial_override() {
    let config = ExtractConfig::from_str(r#"
        [renderer]
        backend = "canvas"
        resolution = 2
        width = 320
        height = 240

        [scale]
        fill = 0x000000
    "#).unwrap();

    std::assert_eq!(config.backend, BackendKind::Canvas);
    std::assert_eq!(config.resolution, 2.0);
    std::assert_eq!(config.screen, Some((320, 240)));
    std::assert_eq!(config.scale_fill, FillColor::new(0));
    std::assert_eq!(config.output_format, "png");
}

#[test]
fn test_string_fill() {
    let config = ExtractConfig::from_str("[scale]\nfill = \"#ff0\"").unwrap();
    std::assert_eq!(config.scale_fill, FillColor::new(0xffff00));
}

#[test]
fn test_invalid_values() {
    std::assert!(matches!(ExtractConfig::from_str("[renderer]\nresolution = 0"),
                     Err(ExtractError::ConfigError(_))));
    std::assert!(matches!(ExtractConfig::from_str("[renderer]\nwidth = 10"),
                     Err(ExtractError::ConfigError(_))));
    std::assert!(matches!(ExtractConfig::from_str("[output]\ncompression = \"lzw\""),
                     Err(ExtractError::UnsupportedCompression(_))));
    std::assert!(matches!(ExtractConfig::from_str("[logging]\nlevel = \"loud\""),
                     Err(ExtractError::ConfigError(_))));
    std::assert!(ExtractConfig::from_str("not toml [").is_err());
}
