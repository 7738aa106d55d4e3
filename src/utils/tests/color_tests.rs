//! Tests for colour string parsing

extern crate std;

use crate::utils::color_utils::{hex_to_string, parse_color};

#[test]
fn test_parse_hex_forms() {
    std::assert_eq!(parse_color("#ffff00").unwrap(), 0xffff00);
    std::assert_eq!(parse_color("0x00FF00").unwrap(), 0x00ff00);
    std::assert_eq!(parse_color("#f0a").unwrap(), 0xff00aa);
}

#[test]
fn test_parse_decimal() {
    std::assert_eq!(parse_color("16777215").unwrap(), 0xffffff);
    std::assert!(parse_color("16777216").is_err());
}

#[test]
fn test_rejects_garbage() {
    std::assert!(parse_color("red").is_err());
    std::assert!(parse_color("#12345").is_err());
    std::assert!(parse_color("").is_err());
}

#[test]
fn test_hex_to_string() {
    std::assert_eq!(hex_to_string(0xff), "#0000ff");
}
