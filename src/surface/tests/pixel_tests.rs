//! Tests for pixel buffers and fill colours

extern crate std;

use image::Rgba;

use crate::surface::{FillColor, PixelBuffer};

#[test]
fn test_new_buffer_is_transparent() {
    let buffer = PixelBuffer::new(3, 2);
    std::assert_eq!(buffer.len(), 24);
    std::assert!(buffer.as_bytes().iter().all(|&b| b == 0));
}

#[test]
fn test_from_raw_rejects_mismatched_length() {
    std::assert!(PixelBuffer::from_raw(2, 2, vec![0; 15]).is_err());
    std::assert!(PixelBuffer::from_raw(2, 2, vec![0; 16]).is_ok());
    std::assert!(PixelBuffer::from_raw(0, 5, Vec::new()).is_ok());
}

#[test]
fn test_pixel_and_row_access() {
    let data: Vec<u8> = (0..16).collect();
    let buffer = PixelBuffer::from_raw(2, 2, data).unwrap();
    std::assert_eq!(buffer.pixel(1, 0), Some([4, 5, 6, 7]));
    std::assert_eq!(buffer.pixel(0, 1), Some([8, 9, 10, 11]));
    std::assert_eq!(buffer.pixel(2, 0), None);
    std::assert_eq!(buffer.row(1), Some(&[8, 9, 10, 11, 12, 13, 14, 15][..]));
    std::assert_eq!(buffer.row(2), None);
}

#[test]
fn test_channel_extraction_formula() {
    // Each channel comes from its own byte; a green mask without a shift
    // used to leak into blue
    let color = FillColor::new(0x12_34_56);
    std::assert_eq!(color.channels(), [0x12, 0x34, 0x56]);
    std::assert_eq!(FillColor::new(0x00ff00).channels(), [0, 255, 0]);
    std::assert_eq!(FillColor::new(0x0000ff).channels(), [0, 0, 255]);
    std::assert_eq!(FillColor::new(0xff0000).channels(), [255, 0, 0]);
}

#[test]
fn test_high_bits_are_dropped() {
    std::assert_eq!(FillColor::new(0xff_00ff00).value(), 0x00ff00);
}

#[test]
fn test_display_and_parse() {
    let color: FillColor = "#ffff00".parse().unwrap();
    std::assert_eq!(color.value(), 0xffff00);
    std::assert_eq!(color.to_string(), "#ffff00");
    std::assert_eq!(FillColor::new(0xff).to_string(), "#0000ff");
    std::assert_eq!(color.to_rgba(), Rgba([255, 255, 0, 255]));
}
