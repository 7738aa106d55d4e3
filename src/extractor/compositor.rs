//! Region compositing
//!
//! Post-processing shared by both extractors: cropping a physical region out
//! of a read-back buffer, writing a fill colour into fully transparent
//! texels, and letterbox scaling of finished canvases.

use image::imageops::{self, FilterType};
use log::{debug, info};

use crate::geometry::PixelRect;
use crate::surface::{copy_region, Canvas, FillColor, PixelBuffer};

/// Replace every texel with zero alpha by the opaque fill colour
///
/// Texels with any non-zero alpha are left untouched.
pub fn apply_fill(buffer: &mut PixelBuffer, fill: FillColor) {
    let [r, g, b] = fill.channels();
    let mut replaced = 0usize;

    for texel in buffer.texels_mut() {
        if texel[3] == 0 {
            texel.copy_from_slice(&[r, g, b, 255]);
            replaced += 1;
        }
    }

    debug!("Filled {} transparent texels with {}", replaced, fill);
}

/// Crop a region out of a buffer and optionally fill transparent texels
///
/// # Arguments
/// * `buffer` - Source pixels
/// * `rect` - Region to keep, in physical pixels; parts outside `buffer`
///   come out transparent before the fill is applied
/// * `fill` - Optional colour for texels with zero alpha
///
/// # Returns
/// A new buffer of exactly `rect.width * rect.height` texels
pub fn crop_and_fill(buffer: &PixelBuffer, rect: PixelRect, fill: Option<FillColor>) -> PixelBuffer {
    let mut cropped = copy_region(buffer.as_bytes(), buffer.width(), buffer.height(), rect);
    if let Some(fill) = fill {
        apply_fill(&mut cropped, fill);
    }
    cropped
}

/// Apply the fill colour to a whole canvas
pub fn fill_canvas(canvas: Canvas, fill: FillColor) -> Canvas {
    let mut buffer = canvas.into_pixel_buffer();
    apply_fill(&mut buffer, fill);
    Canvas::from_buffer(buffer)
}

/// Scale a canvas to fit a target size, preserving aspect ratio
///
/// The source is scaled uniformly by `min(width / ow, height / oh)`, centred,
/// and drawn over a canvas filled with `fill`. Margins keep the exact fill
/// colour.
///
/// # Arguments
/// * `source` - Canvas to scale
/// * `width` - Target width in pixels
/// * `height` - Target height in pixels
/// * `fill` - Margin colour
pub fn letterbox_scale(source: &Canvas, width: u32, height: u32, fill: FillColor) -> Canvas {
    let mut target = Canvas::filled(width, height, fill);
    let (ow, oh) = (source.width(), source.height());

    if ow == 0 || oh == 0 || width == 0 || height == 0 {
        debug!("Degenerate letterbox {}x{} -> {}x{}", ow, oh, width, height);
        return target;
    }

    let s = (width as f64 / ow as f64).min(height as f64 / oh as f64);
    let scaled_width = ((ow as f64 * s).round() as u32).min(width);
    let scaled_height = ((oh as f64 * s).round() as u32).min(height);
    if scaled_width == 0 || scaled_height == 0 {
        return target;
    }

    let x = (width - scaled_width) / 2;
    let y = (height - scaled_height) / 2;
    info!("Letterboxing {}x{} into {}x{} (scale {:.4}, offset {},{})",
          ow, oh, width, height, s, x, y);

    let scaled = if (scaled_width, scaled_height) == (ow, oh) {
        source.clone()
    } else {
        Canvas::from_image(imageops::resize(source.as_image(), scaled_width, scaled_height, FilterType::Triangle))
    };

    target.draw_canvas(&scaled, x as i64, y as i64);
    target
}

/// Standalone letterbox utility
///
/// Works on any canvas, independent of a renderer. The fill colour
/// defaults to white.
pub fn scale(source: &Canvas, width: u32, height: u32, fill: Option<FillColor>) -> Canvas {
    letterbox_scale(source, width, height, fill.unwrap_or_default())
}
