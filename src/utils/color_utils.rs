//! Colour parsing utilities
//!
//! Fill colours arrive either as numbers (`16776960`, `0xffff00`) or as
//! CSS-style hex strings (`#ffff00`, `#ff0`).

use lazy_static::lazy_static;
use regex::Regex;

use crate::errors::{ExtractError, ExtractResult};

lazy_static! {
    static ref HEX_COLOR: Regex =
        Regex::new(r"^(?:#|0[xX])([0-9a-fA-F]{6}|[0-9a-fA-F]{3})$").expect("valid hex colour pattern");
}

/// Parse a colour string into a `0xRRGGBB` value
///
/// # Arguments
/// * `color_str` - `#rrggbb`, `#rgb`, `0xrrggbb` or a decimal number
///
/// # Returns
/// The 24-bit colour value or an error if the string is not a colour
pub fn parse_color(color_str: &str) -> ExtractResult<u32> {
    let trimmed = color_str.trim();

    if let Some(captures) = HEX_COLOR.captures(trimmed) {
        let digits = &captures[1];
        let expanded = if digits.len() == 3 {
            digits.chars().flat_map(|c| [c, c]).collect::<String>()
        } else {
            digits.to_string()
        };
        return u32::from_str_radix(&expanded, 16)
            .map_err(|_| ExtractError::InvalidColor(color_str.to_string()));
    }

    match trimmed.parse::<u32>() {
        Ok(value) if value <= 0xff_ffff => Ok(value),
        _ => Err(ExtractError::InvalidColor(color_str.to_string())),
    }
}

/// Format a colour value as `#rrggbb`
pub fn hex_to_string(color: u32) -> String {
    format!("#{:06x}", color & 0xff_ffff)
}
