//! Tests for region cropping, fill and letterbox scaling

extern crate std;

use image::{Rgba, RgbaImage};

use crate::extractor::compositor::{apply_fill, crop_and_fill, fill_canvas, scale};
use crate::geometry::PixelRect;
use crate::surface::{Canvas, FillColor, PixelBuffer};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[test]
fn test_fill_replaces_only_transparent() {
    let mut buffer = PixelBuffer::from_raw(3, 1, std::vec![
        0, 0, 0, 0,
        10, 20, 30, 1,
        40, 50, 60, 255,
    ]).unwrap();

    apply_fill(&mut buffer, FillColor::new(0xffffff));
    std::assert_eq!(buffer.pixel(0, 0), Some([255, 255, 255, 255]));
    std::assert_eq!(buffer.pixel(1, 0), Some([10, 20, 30, 1]));
    std::assert_eq!(buffer.pixel(2, 0), Some([40, 50, 60, 255]));
}

#[test]
fn test_fill_uses_every_channel() {
    let mut buffer = PixelBuffer::new(1, 1);
    apply_fill(&mut buffer, FillColor::new(0x123456));
    std::assert_eq!(buffer.pixel(0, 0), Some([0x12, 0x34, 0x56, 255]));
}

#[test]
fn test_crop_and_fill_out_of_bounds() {
    let buffer = PixelBuffer::from_raw(1, 1, std::vec![200, 0, 0, 255]).unwrap();
    let cropped = crop_and_fill(&buffer, PixelRect::new(0, 0, 2, 1), Some(FillColor::new(0x0000ff)));

    std::assert_eq!((cropped.width(), cropped.height()), (2, 1));
    std::assert_eq!(cropped.pixel(0, 0), Some([200, 0, 0, 255]));
    std::assert_eq!(cropped.pixel(1, 0), Some([0, 0, 255, 255]));
}

#[test]
fn test_crop_far_outside_is_all_fill() {
    let buffer = PixelBuffer::from_raw(1, 1, std::vec![200, 0, 0, 255]).unwrap();
    for rect in [PixelRect::new(i64::MAX, 0, 2, 2), PixelRect::new(i64::MIN, i64::MAX, 2, 2)] {
        let cropped = crop_and_fill(&buffer, rect, Some(FillColor::new(0x00ff00)));
        std::assert_eq!(cropped.len(), 16);
        std::assert!(cropped.texels().all(|t| t == [0, 255, 0, 255]), "rect {:?}", rect);
    }
}

#[test]
fn test_crop_without_fill_passes_through() {
    let buffer = PixelBuffer::from_raw(2, 1, std::vec![1, 2, 3, 4, 0, 0, 0, 0]).unwrap();
    let cropped = crop_and_fill(&buffer, PixelRect::new(0, 0, 2, 1), None);
    std::assert_eq!(cropped, buffer);
}

#[test]
fn test_fill_canvas_keeps_opaque_texels() {
    let mut image = RgbaImage::new(2, 1);
    image.put_pixel(0, 0, Rgba([1, 2, 3, 255]));
    let canvas = fill_canvas(Canvas::from_image(image), FillColor::new(0xff0000));

    std::assert_eq!(canvas.as_image().get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
    std::assert_eq!(canvas.as_image().get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
}

#[test]
fn test_letterbox_wide_source() {
    let source = Canvas::filled(200, 100, FillColor::new(0xff0000));
    let scaled = scale(&source, 100, 100, None);
    std::assert_eq!((scaled.width(), scaled.height()), (100, 100));

    let image = scaled.as_image();
    for y in (0..25).chain(75..100) {
        std::assert_eq!(image.get_pixel(50, y), &WHITE, "margin row {}", y);
    }
    for y in 25..75 {
        let Rgba([r, g, b, a]) = *image.get_pixel(50, y);
        std::assert_eq!(a, 255);
        std::assert!(r >= 254 && g <= 1 && b <= 1, "row {} is {:?}", y, (r, g, b));
    }
}

#[test]
fn test_letterbox_tall_source_custom_fill() {
    let source = Canvas::filled(10, 40, FillColor::new(0x0000ff));
    let scaled = scale(&source, 40, 40, Some(FillColor::new(0x000000)));
    let image = scaled.as_image();

    std::assert_eq!(image.get_pixel(14, 20), &Rgba([0, 0, 0, 255]));
    std::assert_eq!(image.get_pixel(15, 20), &Rgba([0, 0, 255, 255]));
    std::assert_eq!(image.get_pixel(24, 0), &Rgba([0, 0, 255, 255]));
    std::assert_eq!(image.get_pixel(25, 39), &Rgba([0, 0, 0, 255]));
}

#[test]
fn test_letterbox_degenerate_source() {
    let scaled = scale(&Canvas::new(0, 10), 4, 4, Some(FillColor::new(0xff00ff)));
    std::assert_eq!((scaled.width(), scaled.height()), (4, 4));
    std::assert!(scaled.to_pixel_buffer().texels().all(|t| t == [255, 0, 255, 255]));
}
