//! Tests for the deflate and zstd payload handlers

extern crate std;

use crate::compression::{CompressionHandler, DeflateHandler, ZstdHandler};

#[test]
fn test_deflate_solid_payload_shrinks() {
    let data = vec![255u8; 4096];
    let handler = DeflateHandler::new();
    let compressed = handler.compress(&data).unwrap();
    std::assert!(compressed.len() < data.len());
    std::assert_eq!(handler.decompress(&compressed).unwrap(), data);
}

#[test]
fn test_deflate_garbage_is_rejected() {
    let handler = DeflateHandler::new();
    std::assert!(handler.decompress(&[1, 2, 3, 4]).is_err());
}

#[test]
fn test_zstd_empty_payload() {
    let handler = ZstdHandler::new();
    std::assert_eq!(handler.compress(&[]).unwrap(), Vec::<u8>::new());
    std::assert_eq!(handler.decompress(&[]).unwrap(), Vec::<u8>::new());
}

#[test]
fn test_zstd_pixels_survive() {
    let data: Vec<u8> = (0..1024u32).map(|i| (i % 7) as u8).collect();
    let handler = ZstdHandler::new();
    let compressed = handler.compress(&data).unwrap();
    std::assert_eq!(handler.decompress(&compressed).unwrap(), data);
}
