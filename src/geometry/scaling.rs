//! Resolution scaling helpers
//!
//! Multiplying logical coordinates by a device-pixel ratio produces values
//! such as `99.99999999` for what should be `100`. Every conversion from
//! logical to physical units goes through these helpers so that the same
//! epsilon-biased floor is applied everywhere.

/// Bias added before flooring a scaled coordinate
pub const SCALE_EPSILON: f64 = 1e-4;

/// Scale a logical coordinate to physical pixels, rounding down
///
/// # Arguments
/// * `value` - Logical coordinate
/// * `resolution` - Scale factor between logical and physical pixels
///
/// # Returns
/// The floored physical coordinate. Non-finite input maps to 0.
pub fn scale_floor(value: f64, resolution: f64) -> i64 {
    let scaled = (value * resolution + SCALE_EPSILON).floor();
    if scaled.is_finite() {
        scaled as i64
    } else {
        0
    }
}

/// Scale a logical extent to a physical pixel count
///
/// Negative extents clamp to zero, so a malformed frame yields an empty
/// read instead of an error.
pub fn scale_dimension(value: f64, resolution: f64) -> u32 {
    scale_floor(value, resolution).clamp(0, u32::MAX as i64) as u32
}
