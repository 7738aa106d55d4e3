//! Canvas surface handle
//!
//! `Canvas` is the owned drawing surface returned by `canvas()` and by the
//! letterbox scaler. It supports the handful of 2D-context operations the
//! extractors need: raw image-data transfer, fills, composited draws,
//! vertical mirroring and encoding to a data URL.

use std::io::Cursor;

use base64::Engine;
use image::{imageops, DynamicImage, ImageFormat, Pixel, Rgba, RgbaImage};
use log::debug;

use crate::errors::{ExtractError, ExtractResult};
use crate::geometry::PixelRect;

use super::fill_color::FillColor;
use super::pixel_buffer::{PixelBuffer, BYTES_PER_PIXEL};

/// Owned RGBA drawing surface
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a fully transparent canvas
    pub fn new(width: u32, height: u32) -> Self {
        Canvas {
            image: RgbaImage::new(width, height),
        }
    }

    /// Create a canvas filled with an opaque colour
    pub fn filled(width: u32, height: u32, color: FillColor) -> Self {
        Canvas {
            image: RgbaImage::from_pixel(width, height, color.to_rgba()),
        }
    }

    pub fn from_image(image: RgbaImage) -> Self {
        Canvas { image }
    }

    /// Create a canvas holding exactly the given pixels
    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        let (width, height) = (buffer.width(), buffer.height());
        match RgbaImage::from_raw(width, height, buffer.into_bytes()) {
            Some(image) => Canvas { image },
            // PixelBuffer guarantees the length, so this only guards overflow
            None => Canvas::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Copy all pixels out into a buffer
    pub fn to_pixel_buffer(&self) -> PixelBuffer {
        PixelBuffer::from_raw(self.width(), self.height(), self.image.as_raw().clone())
            .unwrap_or_else(|_| PixelBuffer::new(self.width(), self.height()))
    }

    pub fn into_pixel_buffer(self) -> PixelBuffer {
        let (width, height) = (self.width(), self.height());
        PixelBuffer::from_raw(width, height, self.image.into_raw())
            .unwrap_or_else(|_| PixelBuffer::new(width, height))
    }

    /// Read a rectangle of raw pixels
    ///
    /// Parts of `rect` outside the canvas read as transparent black, the
    /// same way a 2D context's `getImageData` behaves.
    pub fn get_image_data(&self, rect: PixelRect) -> PixelBuffer {
        copy_region(self.image.as_raw(), self.width(), self.height(), rect)
    }

    /// Write raw pixels at an offset, replacing what was there
    ///
    /// No compositing takes place; texels falling outside are clipped.
    pub fn put_image_data(&mut self, data: &PixelBuffer, dx: i64, dy: i64) {
        let canvas_width = self.width() as i64;
        let canvas_height = self.height() as i64;
        let src_stride = data.width() as usize * BYTES_PER_PIXEL;
        let dst_stride = self.width() as usize * BYTES_PER_PIXEL;

        let x0 = dx.max(0);
        let x1 = dx.saturating_add(data.width() as i64).min(canvas_width);
        if x0 >= x1 {
            return;
        }
        let span = (x1 - x0) as usize * BYTES_PER_PIXEL;
        let src_col = (x0 - dx) as usize * BYTES_PER_PIXEL;

        let raw = data.as_bytes();
        let dst = &mut *self.image;
        for row in 0..data.height() as i64 {
            let y = dy.saturating_add(row);
            if y < 0 || y >= canvas_height {
                continue;
            }
            let src_start = row as usize * src_stride + src_col;
            let dst_start = y as usize * dst_stride + x0 as usize * BYTES_PER_PIXEL;
            dst[dst_start..dst_start + span].copy_from_slice(&raw[src_start..src_start + span]);
        }
    }

    /// Draw another canvas on top with source-over compositing
    ///
    /// Texels falling outside this canvas are clipped.
    pub fn draw_canvas(&mut self, source: &Canvas, x: i64, y: i64) {
        let (width, height) = (self.width() as i64, self.height() as i64);
        for (sx, sy, texel) in source.image.enumerate_pixels() {
            let (dx, dy) = (x.saturating_add(sx as i64), y.saturating_add(sy as i64));
            if dx < 0 || dy < 0 || dx >= width || dy >= height {
                continue;
            }
            blend_over(self.image.get_pixel_mut(dx as u32, dy as u32), texel);
        }
    }

    /// Mirror the canvas vertically in place
    pub fn flip_vertical(&mut self) {
        imageops::flip_vertical_in_place(&mut self.image);
    }

    /// Encode the canvas in the given format
    ///
    /// JPEG has no alpha channel, so the canvas is flattened to RGB first.
    pub fn encode(&self, format: ImageFormat) -> ExtractResult<Vec<u8>> {
        let mut cursor = Cursor::new(Vec::new());
        match format {
            ImageFormat::Jpeg => {
                let rgb = DynamicImage::ImageRgba8(self.image.clone()).to_rgb8();
                DynamicImage::ImageRgb8(rgb).write_to(&mut cursor, format)?;
            },
            _ => {
                self.image.write_to(&mut cursor, format)?;
            }
        }
        Ok(cursor.into_inner())
    }

    /// Encode the canvas as a PNG data URL
    pub fn to_data_url(&self) -> ExtractResult<String> {
        self.to_data_url_with(ImageFormat::Png)
    }

    /// Encode the canvas as a data URL in the given format
    ///
    /// A canvas with no area encodes as `data:,`.
    pub fn to_data_url_with(&self, format: ImageFormat) -> ExtractResult<String> {
        if self.width() == 0 || self.height() == 0 {
            return Ok("data:,".to_string());
        }

        let mime = match format {
            ImageFormat::Png => "image/png",
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Bmp => "image/bmp",
            other => {
                return Err(ExtractError::GenericError(format!(
                    "Unsupported data URL format: {:?}", other
                )));
            }
        };

        let bytes = self.encode(format)?;
        debug!("Encoded {}x{} canvas as {} ({} bytes)", self.width(), self.height(), mime, bytes.len());

        Ok(format!(
            "data:{};base64,{}",
            mime,
            base64::engine::general_purpose::STANDARD.encode(&bytes)
        ))
    }
}

/// Source-over composite `src` onto `dst`
///
/// Opaque and fully transparent sources skip the floating point blend so
/// that solid colours come through bit-exact.
pub(crate) fn blend_over(dst: &mut Rgba<u8>, src: &Rgba<u8>) {
    match src.0[3] {
        255 => *dst = *src,
        0 => {},
        _ => dst.blend(src),
    }
}

/// Copy a possibly out-of-bounds rectangle out of a row-major RGBA slice
pub(crate) fn copy_region(raw: &[u8], width: u32, height: u32, rect: PixelRect) -> PixelBuffer {
    let mut out = PixelBuffer::new(rect.width, rect.height);
    if rect.is_empty() {
        return out;
    }

    let x0 = rect.x.max(0);
    let x1 = rect.x.saturating_add(rect.width as i64).min(width as i64);
    if x0 >= x1 {
        return out;
    }

    let span = (x1 - x0) as usize * BYTES_PER_PIXEL;
    let src_stride = width as usize * BYTES_PER_PIXEL;
    let dst_stride = rect.width as usize * BYTES_PER_PIXEL;
    let dst_col = (x0 - rect.x) as usize * BYTES_PER_PIXEL;
    let dst = out.as_bytes_mut();

    for row in 0..rect.height as i64 {
        let y = rect.y.saturating_add(row);
        if y < 0 || y >= height as i64 {
            continue;
        }
        let src_start = y as usize * src_stride + x0 as usize * BYTES_PER_PIXEL;
        let dst_start = row as usize * dst_stride + dst_col;
        dst[dst_start..dst_start + span].copy_from_slice(&raw[src_start..src_start + span]);
    }

    out
}
