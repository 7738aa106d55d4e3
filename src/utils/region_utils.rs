//! Region parsing utilities

use crate::errors::{ExtractError, ExtractResult};
use crate::geometry::Frame;

/// Parse a region string in the format "x,y,width,height"
///
/// Values are logical units and may be fractional.
///
/// # Arguments
/// * `region_str` - String such as "0,0,50,50"
///
/// # Returns
/// The parsed frame or an error if parsing fails
pub fn parse_region(region_str: &str) -> ExtractResult<Frame> {
    let parts: Vec<&str> = region_str.split(',').map(str::trim).collect();

    if parts.len() != 4 {
        return Err(ExtractError::InvalidRegion(format!(
            "'{}', expected 'x,y,width,height'", region_str
        )));
    }

    let mut values = [0.0f64; 4];
    for (slot, part) in values.iter_mut().zip(&parts) {
        *slot = part.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ExtractError::InvalidRegion(format!("'{}' is not a number", part)))?;
    }

    if values[2] < 0.0 || values[3] < 0.0 {
        return Err(ExtractError::InvalidRegion(format!(
            "'{}' has a negative size", region_str
        )));
    }

    Ok(Frame::new(values[0], values[1], values[2], values[3]))
}

/// Parse a list of regions separated by ';'
pub fn parse_regions(list: &str) -> ExtractResult<Vec<Frame>> {
    list.split(';')
        .filter(|s| !s.trim().is_empty())
        .map(parse_region)
        .collect()
}

/// Parse a size string in the format "widthxheight"
pub fn parse_size(size_str: &str) -> ExtractResult<(u32, u32)> {
    let (w, h) = size_str
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| ExtractError::InvalidRegion(format!("'{}', expected 'WIDTHxHEIGHT'", size_str)))?;

    let parse = |s: &str| s.trim().parse::<u32>()
        .map_err(|_| ExtractError::InvalidRegion(format!("'{}' is not a pixel count", s)));

    Ok((parse(w)?, parse(h)?))
}
