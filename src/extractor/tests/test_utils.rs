use std::cell::RefCell;
use std::rc::Rc;

use image::{Rgba, RgbaImage};

use crate::host::{BackendKind, SoftwareRenderer};

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

/// Renderer whose stage is a single solid image
pub fn solid_renderer(kind: BackendKind, width: u32, height: u32, color: Rgba<u8>, resolution: f64)
    -> Rc<RefCell<SoftwareRenderer>>
{
    let image = RgbaImage::from_pixel(width, height, color);
    Rc::new(RefCell::new(SoftwareRenderer::with_image(kind, image, resolution)))
}

/// Renderer whose stage has a red top half and a blue bottom half
pub fn split_renderer(kind: BackendKind, width: u32, height: u32) -> Rc<RefCell<SoftwareRenderer>> {
    let image = RgbaImage::from_fn(width, height, |_, y| if y < height / 2 { RED } else { BLUE });
    Rc::new(RefCell::new(SoftwareRenderer::with_image(kind, image, 1.0)))
}

/// Renderer with a fully transparent stage
pub fn transparent_renderer(kind: BackendKind, width: u32, height: u32) -> Rc<RefCell<SoftwareRenderer>> {
    let image = RgbaImage::new(width, height);
    Rc::new(RefCell::new(SoftwareRenderer::with_image(kind, image, 1.0)))
}
