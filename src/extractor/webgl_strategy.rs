//! WebGL extractor strategy implementation
//!
//! Reads pixels back from framebuffers. The root framebuffer stores rows
//! bottom-up, so its reads are mirrored afterwards; texture framebuffers are
//! already top-down. Region and fill requests render the target again at
//! the requested region instead of cropping after the read.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use crate::errors::ExtractResult;
use crate::geometry::Frame;
use crate::host::{BackendKind, GlHost, RenderTexture};
use crate::surface::{Canvas, FillColor, PixelBuffer};

use super::compositor;
use super::extractor_strategy::{render_source, ExtractorStrategy, RendererLink, Target};
use super::pixel_source::{read_canvas, EmptySource, FramebufferSource};
use super::scoped_texture::ScopedTexture;

/// Extractor for GPU-backed renderers
pub struct WebGLExtract<H: GlHost> {
    link: RendererLink<H>,
}

impl<H: GlHost> WebGLExtract<H> {
    /// Attach a WebGL extractor to a renderer
    pub fn new(renderer: &Rc<RefCell<H>>) -> ExtractResult<Self> {
        Ok(WebGLExtract {
            link: RendererLink::attach(renderer, BackendKind::WebGL)?,
        })
    }
}

/// Read back the resolved framebuffer at its native frame and resolution
fn read_surface<H: GlHost>(scope: &mut ScopedTexture<'_, '_, H>) -> ExtractResult<Canvas> {
    let (host, texture) = scope.parts();

    let info = match texture {
        Some(texture) => host.texture_target(texture).ok_or((texture.frame(), texture.resolution())),
        None => host.root_target().ok_or((host.screen(), host.resolution())),
    };

    match info {
        Ok(info) => read_canvas(&mut FramebufferSource::new(host, info)),
        Err((frame, resolution)) => {
            warn!("No framebuffer behind the target, returning blank pixels");
            read_canvas(&mut EmptySource::new(frame, resolution))
        }
    }
}

impl<H: GlHost> ExtractorStrategy for WebGLExtract<H> {
    type Host = H;

    fn kind(&self) -> BackendKind {
        BackendKind::WebGL
    }

    fn pixels(&self, target: Option<Target<'_, H>>) -> ExtractResult<PixelBuffer> {
        self.link.with_host(|host| {
            let mut scope = ScopedTexture::resolve(host, target)?;
            Ok(read_surface(&mut scope)?.into_pixel_buffer())
        })
    }

    fn canvas(
        &self,
        target: Option<Target<'_, H>>,
        region: Option<Frame>,
        fill: Option<FillColor>,
    ) -> ExtractResult<Canvas> {
        self.link.with_host(|host| {
            if region.is_none() && fill.is_none() {
                let mut scope = ScopedTexture::resolve(host, target)?;
                return read_surface(&mut scope);
            }

            let resolution = host.resolution();
            info!("WebGL extraction with region {:?} and fill {:?} at resolution {}",
                  region, fill, resolution);

            let canvas = {
                let mut scope = ScopedTexture::generate(
                    host, render_source::<H>(target), region, Some(resolution))?;
                read_surface(&mut scope)?
            };

            Ok(match fill {
                Some(fill) => compositor::fill_canvas(canvas, fill),
                None => canvas,
            })
        })
    }

    fn destroy(&mut self) {
        self.link.detach();
    }
}
