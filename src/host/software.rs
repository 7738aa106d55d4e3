//! CPU reference renderer
//!
//! `SoftwareRenderer` rasterizes a flat list of sprites with nearest-neighbour
//! sampling and source-over compositing. It implements both the canvas and the
//! GPU host interfaces so that either extractor can be driven without a real
//! graphics context. In WebGL mode the root framebuffer is read back bottom
//! row first, the way a GL default framebuffer is.

use std::collections::HashMap;

use image::{Rgba, RgbaImage};
use log::{debug, info, warn};

use crate::errors::{ExtractError, ExtractResult};
use crate::geometry::{Frame, PixelRect};
use crate::surface::{PixelBuffer, BYTES_PER_PIXEL};
use crate::surface::{blend_over, copy_region};

use super::binding::{FramebufferContext, FramebufferTarget};
use super::{
    BackendKind, CanvasHost, GlHost, HostRenderer, PixelContext, RenderSource, RenderTargetInfo,
    RenderTexture,
};

/// Resolution used for textures generated without an explicit one
const DEFAULT_TEXTURE_RESOLUTION: f64 = 1.0;

/// Sprite on the stage: an image stretched over a logical frame
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    frame: Frame,
    image: RgbaImage,
}

impl SceneNode {
    /// Create a node drawing `image` over `frame`
    pub fn new(frame: Frame, image: RgbaImage) -> Self {
        SceneNode { frame, image }
    }

    /// Image placed at `(x, y)` with one logical unit per source pixel
    pub fn sprite(x: f64, y: f64, image: RgbaImage) -> Self {
        let frame = Frame::new(x, y, image.width() as f64, image.height() as f64);
        SceneNode { frame, image }
    }

    /// Rectangle of a single colour
    pub fn solid(frame: Frame, color: Rgba<u8>) -> Self {
        SceneNode {
            frame,
            image: RgbaImage::from_pixel(1, 1, color),
        }
    }

    /// Bounds of the node in stage coordinates
    pub fn bounds(&self) -> Frame {
        self.frame
    }

    /// Texel covering a logical point, if the node covers it
    fn sample(&self, lx: f64, ly: f64) -> Option<Rgba<u8>> {
        let frame = &self.frame;
        if self.image.width() == 0 || self.image.height() == 0 {
            return None;
        }
        if lx < frame.x || ly < frame.y || lx >= frame.end_x() || ly >= frame.end_y() {
            return None;
        }
        let u = (lx - frame.x) / frame.width;
        let v = (ly - frame.y) / frame.height;
        let sx = ((u * self.image.width() as f64) as u32).min(self.image.width() - 1);
        let sy = ((v * self.image.height() as f64) as u32).min(self.image.height() - 1);
        Some(*self.image.get_pixel(sx, sy))
    }
}

/// Handle to a texture owned by a `SoftwareRenderer`
#[derive(Debug, PartialEq)]
pub struct SoftwareTexture {
    id: u32,
    frame: Frame,
    resolution: f64,
}

impl SoftwareTexture {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl RenderTexture for SoftwareTexture {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }
}

/// Backing store of a texture
struct TextureStore {
    image: RgbaImage,
}

/// CPU renderer implementing both host backends
pub struct SoftwareRenderer {
    kind: BackendKind,
    resolution: f64,
    width: f64,
    height: f64,
    stage: Vec<SceneNode>,
    root: RgbaImage,
    textures: HashMap<u32, TextureStore>,
    next_texture_id: u32,
    bound: Option<FramebufferTarget>,
    extract: Option<BackendKind>,
    max_texture_pixels: Option<u64>,
}

impl SoftwareRenderer {
    /// Create a renderer with an empty stage
    ///
    /// # Arguments
    /// * `kind` - Backend whose behaviour the renderer reproduces
    /// * `width` - Logical screen width
    /// * `height` - Logical screen height
    /// * `resolution` - Physical pixels per logical unit
    pub fn new(kind: BackendKind, width: f64, height: f64, resolution: f64) -> Self {
        let resolution = if resolution > 0.0 && resolution.is_finite() {
            resolution
        } else {
            warn!("Invalid resolution {}, using 1", resolution);
            1.0
        };
        let physical = Frame::sized(width, height).to_pixels(resolution);

        SoftwareRenderer {
            kind,
            resolution,
            width,
            height,
            stage: Vec::new(),
            root: RgbaImage::new(physical.width, physical.height),
            textures: HashMap::new(),
            next_texture_id: 1,
            bound: None,
            extract: None,
            max_texture_pixels: None,
        }
    }

    /// Create a renderer whose stage shows a single image at the origin
    ///
    /// The screen takes the image's size in logical units and the stage is
    /// rendered immediately.
    pub fn with_image(kind: BackendKind, image: RgbaImage, resolution: f64) -> Self {
        let mut renderer = SoftwareRenderer::new(
            kind, image.width() as f64, image.height() as f64, resolution);
        renderer.add_child(SceneNode::sprite(0.0, 0.0, image));
        renderer.render();
        renderer
    }

    /// Append a node to the stage
    pub fn add_child(&mut self, node: SceneNode) {
        self.stage.push(node);
    }

    /// Rasterize the stage into the root surface
    pub fn render(&mut self) {
        let screen = Frame::sized(self.width, self.height);
        self.root = rasterize(&self.stage, screen, self.resolution);
        debug!("Rendered stage of {} nodes to {}x{} root",
               self.stage.len(), self.root.width(), self.root.height());
    }

    /// Rendered root surface, top row first
    pub fn root_image(&self) -> &RgbaImage {
        &self.root
    }

    /// Refuse textures larger than `pixels` physical pixels
    pub fn set_max_texture_pixels(&mut self, pixels: Option<u64>) {
        self.max_texture_pixels = pixels;
    }

    /// Number of textures that have not been destroyed
    pub fn live_textures(&self) -> usize {
        self.textures.len()
    }

    /// Backend of the attached extract plugin, if any
    pub fn attached_extract(&self) -> Option<BackendKind> {
        self.extract
    }

    /// Drop a texture's backing store while keeping the handle valid
    pub fn discard_texture_storage(&mut self, texture: &SoftwareTexture) {
        self.textures.remove(&texture.id);
    }

    fn check_allocation(&self, bounds: Frame, resolution: f64) -> ExtractResult<()> {
        let physical = bounds.to_pixels(resolution);
        let pixels = physical.width as u64 * physical.height as u64;
        match self.max_texture_pixels {
            Some(limit) if pixels > limit => {
                warn!("Refusing {}x{} texture (limit {} pixels)", physical.width, physical.height, limit);
                Err(ExtractError::Allocation { width: physical.width, height: physical.height })
            },
            _ => Ok(()),
        }
    }

    fn store_texture(&mut self, bounds: Frame, resolution: f64, image: RgbaImage) -> SoftwareTexture {
        let id = self.next_texture_id;
        self.next_texture_id += 1;
        debug!("Allocated texture {} ({}x{} @ {})", id, image.width(), image.height(), resolution);
        self.textures.insert(id, TextureStore { image });

        SoftwareTexture {
            id,
            frame: Frame::sized(bounds.width, bounds.height),
            resolution,
        }
    }

    /// Stage-space node equivalent of an existing texture
    fn texture_layer(&self, texture: &SoftwareTexture) -> ExtractResult<SceneNode> {
        let store = self.textures.get(&texture.id)
            .ok_or(ExtractError::UnknownTexture(texture.id))?;
        Ok(SceneNode::new(Frame::sized(texture.frame.width, texture.frame.height), store.image.clone()))
    }
}

/// Rasterize nodes into a surface covering `bounds`
fn rasterize(nodes: &[SceneNode], bounds: Frame, resolution: f64) -> RgbaImage {
    let physical = bounds.to_pixels(resolution);
    let mut image = RgbaImage::new(physical.width, physical.height);

    for (px, py, pixel) in image.enumerate_pixels_mut() {
        let lx = bounds.x + (px as f64 + 0.5) / resolution;
        let ly = bounds.y + (py as f64 + 0.5) / resolution;
        for node in nodes {
            if let Some(texel) = node.sample(lx, ly) {
                blend_over(pixel, &texel);
            }
        }
    }

    image
}

/// Bottom-up read of a top-down image, as a GL default framebuffer returns it
fn read_bottom_up(image: &RgbaImage, rect: PixelRect) -> Vec<u8> {
    let height = image.height() as i64;
    let stride = rect.width as usize * BYTES_PER_PIXEL;
    let mut out = vec![0u8; rect.byte_len()];

    for row in 0..rect.height as i64 {
        // GL row (rect.y + row), counted from the bottom
        let image_row = (height - 1).saturating_sub(rect.y.saturating_add(row));
        let line = copy_region(image.as_raw(), image.width(), image.height(),
                               PixelRect::new(rect.x, image_row, rect.width, 1));
        let start = row as usize * stride;
        out[start..start + stride].copy_from_slice(line.as_bytes());
    }

    out
}

impl PixelContext for RgbaImage {
    fn get_image_data(&self, rect: PixelRect) -> PixelBuffer {
        copy_region(self.as_raw(), self.width(), self.height(), rect)
    }
}

impl HostRenderer for SoftwareRenderer {
    type Node = SceneNode;
    type Texture = SoftwareTexture;

    fn backend_kind(&self) -> BackendKind {
        self.kind
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }

    fn screen_width(&self) -> f64 {
        self.width
    }

    fn screen_height(&self) -> f64 {
        self.height
    }

    fn generate_texture(
        &mut self,
        source: RenderSource<'_, SceneNode, SoftwareTexture>,
        region: Option<Frame>,
        resolution: Option<f64>,
    ) -> ExtractResult<SoftwareTexture> {
        let resolution = resolution
            .filter(|r| *r > 0.0 && r.is_finite())
            .unwrap_or(DEFAULT_TEXTURE_RESOLUTION);

        let (bounds, image) = match source {
            RenderSource::Stage => {
                let bounds = region.unwrap_or_else(|| self.screen());
                self.check_allocation(bounds, resolution)?;
                (bounds, rasterize(&self.stage, bounds, resolution))
            },
            RenderSource::Node(node) => {
                let bounds = region.unwrap_or_else(|| node.bounds());
                self.check_allocation(bounds, resolution)?;
                (bounds, rasterize(std::slice::from_ref(node), bounds, resolution))
            },
            RenderSource::Texture(texture) => {
                let layer = self.texture_layer(texture)?;
                let bounds = region.unwrap_or_else(|| layer.bounds());
                self.check_allocation(bounds, resolution)?;
                (bounds, rasterize(std::slice::from_ref(&layer), bounds, resolution))
            }
        };

        Ok(self.store_texture(bounds, resolution, image))
    }

    fn destroy_texture(&mut self, texture: SoftwareTexture, force: bool) {
        if self.bound == Some(FramebufferTarget::Texture(texture.id)) {
            self.bound = None;
        }
        if self.textures.remove(&texture.id).is_some() {
            debug!("Destroyed texture {} (force={})", texture.id, force);
        }
    }

    fn attach_extract(&mut self, kind: BackendKind) {
        info!("Attaching {} extract plugin", kind);
        self.extract = Some(kind);
    }

    fn detach_extract(&mut self) {
        info!("Detaching extract plugin");
        self.extract = None;
    }
}

impl CanvasHost for SoftwareRenderer {
    fn root_context(&self) -> &dyn PixelContext {
        &self.root
    }

    fn texture_context(&self, texture: &SoftwareTexture) -> Option<&dyn PixelContext> {
        self.textures.get(&texture.id).map(|store| &store.image as &dyn PixelContext)
    }
}

impl FramebufferContext for SoftwareRenderer {
    fn bound_target(&self) -> Option<FramebufferTarget> {
        self.bound
    }

    fn bind_target(&mut self, target: Option<FramebufferTarget>) {
        self.bound = target;
    }

    fn read_pixels(&self, rect: PixelRect) -> Vec<u8> {
        match self.bound {
            Some(FramebufferTarget::Root) => read_bottom_up(&self.root, rect),
            Some(FramebufferTarget::Texture(id)) => match self.textures.get(&id) {
                Some(store) => store.image.get_image_data(rect).into_bytes(),
                None => vec![0; rect.byte_len()],
            },
            None => vec![0; rect.byte_len()],
        }
    }
}

impl GlHost for SoftwareRenderer {
    fn root_target(&self) -> Option<RenderTargetInfo> {
        Some(RenderTargetInfo {
            target: FramebufferTarget::Root,
            frame: self.screen(),
            resolution: self.resolution,
        })
    }

    fn texture_target(&self, texture: &SoftwareTexture) -> Option<RenderTargetInfo> {
        self.textures.get(&texture.id).map(|_| RenderTargetInfo {
            target: FramebufferTarget::Texture(texture.id),
            frame: texture.frame,
            resolution: texture.resolution,
        })
    }
}
