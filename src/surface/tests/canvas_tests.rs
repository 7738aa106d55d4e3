//! Tests for the canvas surface and its image handle

extern crate std;

use image::{GenericImageView, ImageFormat, Rgba, RgbaImage};

use crate::geometry::PixelRect;
use crate::surface::{Canvas, ExtractedImage, FillColor, PixelBuffer};

fn gradient(width: u32, height: u32) -> Canvas {
    Canvas::from_image(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([x as u8, y as u8, 0, 255])
    }))
}

#[test]
fn test_get_image_data_inside() {
    let canvas = gradient(4, 4);
    let data = canvas.get_image_data(PixelRect::new(1, 2, 2, 2));
    std::assert_eq!(data.pixel(0, 0), Some([1, 2, 0, 255]));
    std::assert_eq!(data.pixel(1, 1), Some([2, 3, 0, 255]));
}

#[test]
fn test_get_image_data_out_of_bounds_is_transparent() {
    let canvas = gradient(2, 2);
    let data = canvas.get_image_data(PixelRect::new(-1, -1, 4, 4));
    std::assert_eq!(data.len(), 64);
    std::assert_eq!(data.pixel(0, 0), Some([0, 0, 0, 0]));
    std::assert_eq!(data.pixel(1, 1), Some([0, 0, 0, 255]));
    std::assert_eq!(data.pixel(2, 2), Some([1, 1, 0, 255]));
    std::assert_eq!(data.pixel(3, 3), Some([0, 0, 0, 0]));
}

#[test]
fn test_get_image_data_at_extreme_origin() {
    let canvas = gradient(2, 2);
    for rect in [
        PixelRect::new(i64::MAX, 0, 2, 2),
        PixelRect::new(0, i64::MAX, 2, 2),
        PixelRect::new(i64::MIN, i64::MIN, 2, 2),
    ] {
        let data = canvas.get_image_data(rect);
        std::assert_eq!(data.len(), 16);
        std::assert!(data.as_bytes().iter().all(|&b| b == 0), "rect {:?}", rect);
    }
}

#[test]
fn test_put_image_data_clips() {
    let mut canvas = Canvas::new(2, 2);
    let data = PixelBuffer::from_raw(2, 1, vec![9, 9, 9, 9, 7, 7, 7, 7]).unwrap();
    canvas.put_image_data(&data, 1, 1);
    std::assert_eq!(canvas.as_image().get_pixel(1, 1), &Rgba([9, 9, 9, 9]));
    std::assert_eq!(canvas.as_image().get_pixel(0, 1), &Rgba([0, 0, 0, 0]));
}

#[test]
fn test_put_image_data_at_extreme_offset() {
    let mut canvas = gradient(2, 2);
    let before = canvas.to_pixel_buffer();
    let data = PixelBuffer::from_raw(1, 1, vec![9, 9, 9, 9]).unwrap();

    canvas.put_image_data(&data, i64::MAX, i64::MAX);
    canvas.put_image_data(&data, 0, i64::MAX);
    canvas.put_image_data(&data, i64::MIN, 0);
    std::assert_eq!(canvas.to_pixel_buffer(), before);
}

#[test]
fn test_draw_canvas_composites() {
    let mut target = Canvas::filled(3, 1, FillColor::new(0x0000ff));
    let mut source = Canvas::new(2, 1);
    source.put_image_data(&PixelBuffer::from_raw(2, 1, vec![255, 0, 0, 255, 0, 0, 0, 0]).unwrap(), 0, 0);

    target.draw_canvas(&source, 1, 0);
    std::assert_eq!(target.as_image().get_pixel(0, 0), &Rgba([0, 0, 255, 255]));
    std::assert_eq!(target.as_image().get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
    std::assert_eq!(target.as_image().get_pixel(2, 0), &Rgba([0, 0, 255, 255]));
}

#[test]
fn test_flip_vertical() {
    let mut canvas = gradient(1, 3);
    canvas.flip_vertical();
    std::assert_eq!(canvas.as_image().get_pixel(0, 0), &Rgba([0, 2, 0, 255]));
    std::assert_eq!(canvas.as_image().get_pixel(0, 2), &Rgba([0, 0, 0, 255]));
}

#[test]
fn test_data_url_prefix() {
    let canvas = Canvas::filled(2, 2, FillColor::new(0xff0000));
    let url = canvas.to_data_url().unwrap();
    std::assert!(url.starts_with("data:image/png;base64,"));

    let jpeg = canvas.to_data_url_with(ImageFormat::Jpeg).unwrap();
    std::assert!(jpeg.starts_with("data:image/jpeg;base64,"));

    std::assert_eq!(Canvas::new(0, 3).to_data_url().unwrap(), "data:,");
}

#[test]
fn test_decode_round_trips_pixels() {
    let canvas = Canvas::filled(3, 2, FillColor::new(0x00ff00));
    let image = ExtractedImage::new(canvas.to_data_url().unwrap());
    std::assert_eq!(image.mime_type(), Some("image/png"));

    let decoded = image.decode().unwrap();
    std::assert_eq!(decoded.dimensions(), (3, 2));
    std::assert_eq!(decoded.get_pixel(2, 1).0, [0, 255, 0, 255]);
}

#[test]
fn test_empty_data_url() {
    let image = ExtractedImage::new("data:,".to_string());
    std::assert_eq!(image.mime_type(), None);
    std::assert!(image.decode().is_err());
}
