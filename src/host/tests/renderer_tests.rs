//! Tests for the software renderer

extern crate std;

use image::{Rgba, RgbaImage};

use crate::errors::ExtractError;
use crate::geometry::{Frame, PixelRect};
use crate::host::{
    BackendKind, CanvasHost, FramebufferContext, FramebufferTarget, HostRenderer, PixelContext, RenderSource,
    RenderTexture, SceneNode, SoftwareRenderer,
};

const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

#[test]
fn test_backend_kind_parse() {
    std::assert_eq!("canvas".parse::<BackendKind>().unwrap(), BackendKind::Canvas);
    std::assert_eq!("WebGL".parse::<BackendKind>().unwrap(), BackendKind::WebGL);
    std::assert_eq!("gl".parse::<BackendKind>().unwrap(), BackendKind::WebGL);
    std::assert!("metal".parse::<BackendKind>().is_err());
    std::assert_eq!(BackendKind::WebGL.to_string(), "webgl");
}

#[test]
fn test_render_scales_by_resolution() {
    let mut renderer = SoftwareRenderer::new(BackendKind::Canvas, 10.0, 5.0, 2.0);
    renderer.add_child(SceneNode::solid(Frame::new(0.0, 0.0, 5.0, 5.0), RED));
    renderer.render();

    let root = renderer.root_image();
    std::assert_eq!(root.dimensions(), (20, 10));
    std::assert_eq!(root.get_pixel(9, 9), &RED);
    std::assert_eq!(root.get_pixel(10, 0), &Rgba([0, 0, 0, 0]));
}

#[test]
fn test_later_nodes_draw_on_top() {
    let mut renderer = SoftwareRenderer::new(BackendKind::Canvas, 4.0, 4.0, 1.0);
    renderer.add_child(SceneNode::solid(Frame::sized(4.0, 4.0), RED));
    renderer.add_child(SceneNode::solid(Frame::new(2.0, 2.0, 2.0, 2.0), BLUE));
    renderer.render();

    std::assert_eq!(renderer.root_image().get_pixel(0, 0), &RED);
    std::assert_eq!(renderer.root_image().get_pixel(3, 3), &BLUE);
}

#[test]
fn test_generated_texture_uses_node_bounds() {
    let mut renderer = SoftwareRenderer::new(BackendKind::WebGL, 10.0, 10.0, 1.0);
    let node = SceneNode::solid(Frame::new(3.0, 4.0, 2.0, 6.0), RED);
    let texture = renderer.generate_texture(RenderSource::Node(&node), None, Some(2.0)).unwrap();

    std::assert_eq!(texture.frame(), Frame::sized(2.0, 6.0));
    std::assert_eq!(texture.resolution(), 2.0);
    std::assert_eq!(renderer.live_textures(), 1);

    let data = renderer.texture_context(&texture).unwrap().get_image_data(PixelRect::new(0, 0, 4, 12));
    std::assert!(data.texels().all(|t| t == [255, 0, 0, 255]));

    renderer.destroy_texture(texture, true);
    std::assert_eq!(renderer.live_textures(), 0);
}

#[test]
fn test_allocation_limit() {
    let mut renderer = SoftwareRenderer::new(BackendKind::Canvas, 10.0, 10.0, 1.0);
    renderer.set_max_texture_pixels(Some(50));
    let result = renderer.generate_texture(RenderSource::Stage, None, None);
    std::assert!(matches!(result, Err(ExtractError::Allocation { width: 10, height: 10 })));
    std::assert_eq!(renderer.live_textures(), 0);
}

#[test]
fn test_root_readback_is_bottom_up() {
    let mut image = RgbaImage::new(1, 2);
    image.put_pixel(0, 0, RED);
    image.put_pixel(0, 1, BLUE);
    let mut renderer = SoftwareRenderer::with_image(BackendKind::WebGL, image, 1.0);

    renderer.bind_target(Some(FramebufferTarget::Root));
    let raw = renderer.read_pixels(PixelRect::new(0, 0, 1, 2));
    std::assert_eq!(&raw[0..4], &BLUE.0);
    std::assert_eq!(&raw[4..8], &RED.0);
}

#[test]
fn test_root_readback_far_outside_is_blank() {
    let mut renderer = SoftwareRenderer::with_image(BackendKind::WebGL, RgbaImage::from_pixel(2, 2, RED), 1.0);
    renderer.bind_target(Some(FramebufferTarget::Root));

    for rect in [
        PixelRect::new(0, i64::MAX, 2, 2),
        PixelRect::new(0, i64::MIN, 2, 2),
        PixelRect::new(i64::MAX, 0, 2, 2),
    ] {
        let raw = renderer.read_pixels(rect);
        std::assert_eq!(raw.len(), 16);
        std::assert!(raw.iter().all(|b| *b == 0), "rect {:?}", rect);
    }
}

#[test]
fn test_texture_without_storage_is_unknown() {
    let mut renderer = SoftwareRenderer::new(BackendKind::Canvas, 2.0, 2.0, 1.0);
    let texture = renderer.generate_texture(RenderSource::Stage, None, None).unwrap();
    renderer.discard_texture_storage(&texture);

    let result = renderer.generate_texture(RenderSource::Texture(&texture), None, None);
    std::assert!(matches!(result, Err(ExtractError::UnknownTexture(id)) if id == texture.id()));
}
