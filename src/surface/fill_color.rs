//! Fill colour for transparent texels

use std::fmt;
use std::str::FromStr;

use image::Rgba;

use crate::errors::ExtractError;
use crate::utils::color_utils;

/// 24-bit RGB colour written into fully transparent texels
///
/// Stored as `0xRRGGBB`; any higher bits are discarded on construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FillColor(u32);

impl FillColor {
    /// Default margin colour of the letterbox scaler
    pub const WHITE: FillColor = FillColor(0xffffff);

    pub fn new(rgb: u32) -> Self {
        FillColor(rgb & 0x00ff_ffff)
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Split into `[r, g, b]`
    ///
    /// Every fill path in the crate goes through this method, so the
    /// canvas and WebGL backends cannot disagree on channel order.
    pub fn channels(&self) -> [u8; 3] {
        [
            ((self.0 >> 16) & 0xff) as u8,
            ((self.0 >> 8) & 0xff) as u8,
            (self.0 & 0xff) as u8,
        ]
    }

    /// Opaque RGBA texel of this colour
    pub fn to_rgba(&self) -> Rgba<u8> {
        let [r, g, b] = self.channels();
        Rgba([r, g, b, 255])
    }
}

impl Default for FillColor {
    fn default() -> Self {
        FillColor::WHITE
    }
}

impl From<u32> for FillColor {
    fn from(rgb: u32) -> Self {
        FillColor::new(rgb)
    }
}

impl FromStr for FillColor {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        color_utils::parse_color(s).map(FillColor::new)
    }
}

impl fmt::Display for FillColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&color_utils::hex_to_string(self.0))
    }
}
