//! Host renderer interfaces
//!
//! The extractors never render anything themselves. They talk to the host
//! engine through the traits in this module: `HostRenderer` for geometry,
//! offscreen generation and plugin attachment, `CanvasHost` for hosts with
//! 2D pixel contexts and `GlHost` for hosts with readable framebuffers.
//!
//! `SoftwareRenderer` is a CPU implementation of both backends used by the
//! command line tool and the tests.

mod binding;
mod software;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use crate::errors::{ExtractError, ExtractResult};
use crate::geometry::{Frame, PixelRect};
use crate::surface::PixelBuffer;

pub use binding::{BoundFramebuffer, FramebufferContext, FramebufferTarget};
pub use software::{SceneNode, SoftwareRenderer, SoftwareTexture};

/// Which extraction backend a renderer drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    Canvas,
    WebGL,
}

impl BackendKind {
    pub fn name(&self) -> &'static str {
        match self {
            BackendKind::Canvas => "canvas",
            BackendKind::WebGL => "webgl",
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BackendKind {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "canvas" | "2d" => Ok(BackendKind::Canvas),
            "webgl" | "gl" => Ok(BackendKind::WebGL),
            other => Err(ExtractError::ConfigError(format!("Unknown backend: {}", other))),
        }
    }
}

/// Content a host can render into an offscreen texture
pub enum RenderSource<'a, N: ?Sized, T> {
    /// Everything currently on the renderer's stage
    Stage,
    /// A single scene node
    Node(&'a N),
    /// An existing texture, drawn as a sprite
    Texture(&'a T),
}

/// Handle to an offscreen render target owned by the host
pub trait RenderTexture {
    /// Visible area of the texture in logical units
    fn frame(&self) -> Frame;

    /// Physical pixels per logical unit
    fn resolution(&self) -> f64;
}

/// Operations every host renderer offers the extract plugin
pub trait HostRenderer {
    /// Scene node type rendered by `generate_texture`
    type Node: ?Sized;
    /// Offscreen texture handle
    type Texture: RenderTexture;

    /// Backend this renderer drives
    fn backend_kind(&self) -> BackendKind;

    /// Resolution of the root surface
    fn resolution(&self) -> f64;

    /// Logical width of the root surface
    fn screen_width(&self) -> f64;

    /// Logical height of the root surface
    fn screen_height(&self) -> f64;

    /// Full extent of the root surface
    fn screen(&self) -> Frame {
        Frame::sized(self.screen_width(), self.screen_height())
    }

    /// Render content into a new offscreen texture
    ///
    /// # Arguments
    /// * `source` - What to render
    /// * `region` - Area to capture; defaults to the bounds of `source`
    /// * `resolution` - Texture resolution; defaults to the host default
    ///
    /// # Returns
    /// The new texture, or an allocation error if the host cannot create it
    fn generate_texture(
        &mut self,
        source: RenderSource<'_, Self::Node, Self::Texture>,
        region: Option<Frame>,
        resolution: Option<f64>,
    ) -> ExtractResult<Self::Texture>;

    /// Release a texture and its backing store
    fn destroy_texture(&mut self, texture: Self::Texture, force: bool);

    /// Record that an extract plugin is attached
    fn attach_extract(&mut self, kind: BackendKind);

    /// Clear the extract plugin slot
    fn detach_extract(&mut self);
}

/// 2D pixel context of a canvas-backed surface
pub trait PixelContext {
    /// Read a physical rectangle, top row first
    ///
    /// Texels outside the surface read as transparent black.
    fn get_image_data(&self, rect: PixelRect) -> PixelBuffer;
}

/// Host whose surfaces are 2D canvases
pub trait CanvasHost: HostRenderer {
    /// Context of the root canvas
    fn root_context(&self) -> &dyn PixelContext;

    /// Context backing a texture, or None if it has no canvas yet
    fn texture_context(&self, texture: &Self::Texture) -> Option<&dyn PixelContext>;
}

/// Geometry and binding of a readable framebuffer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTargetInfo {
    pub target: FramebufferTarget,
    pub frame: Frame,
    pub resolution: f64,
}

/// Host whose surfaces are GPU framebuffers
pub trait GlHost: HostRenderer + FramebufferContext {
    /// The default framebuffer
    fn root_target(&self) -> Option<RenderTargetInfo>;

    /// Framebuffer backing a texture, or None if it was never uploaded
    fn texture_target(&self, texture: &Self::Texture) -> Option<RenderTargetInfo>;
}
