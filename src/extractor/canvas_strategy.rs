//! Canvas extractor strategy implementation
//!
//! Reads pixels straight out of 2D drawing contexts. Region and fill
//! requests first render the target into a full-screen intermediate texture
//! at the renderer's resolution and crop from there.

use std::cell::RefCell;
use std::rc::Rc;

use log::{info, warn};

use crate::errors::ExtractResult;
use crate::geometry::Frame;
use crate::host::{BackendKind, CanvasHost, RenderTexture};
use crate::surface::{Canvas, FillColor, PixelBuffer};

use super::compositor;
use super::extractor_strategy::{render_source, ExtractorStrategy, RendererLink, Target};
use super::pixel_source::{read_canvas, ContextSource, EmptySource};
use super::scoped_texture::ScopedTexture;

/// Extractor for canvas-backed renderers
pub struct CanvasExtract<H: CanvasHost> {
    link: RendererLink<H>,
}

impl<H: CanvasHost> CanvasExtract<H> {
    /// Attach a canvas extractor to a renderer
    pub fn new(renderer: &Rc<RefCell<H>>) -> ExtractResult<Self> {
        Ok(CanvasExtract {
            link: RendererLink::attach(renderer, BackendKind::Canvas)?,
        })
    }
}

/// Read the resolved surface at its native frame and resolution
fn read_surface<H: CanvasHost>(scope: &mut ScopedTexture<'_, '_, H>) -> ExtractResult<Canvas> {
    let (host, texture) = scope.parts();

    match texture {
        Some(texture) => match host.texture_context(texture) {
            Some(context) => read_canvas(&mut ContextSource::new(context, texture.frame(), texture.resolution())),
            None => {
                warn!("Texture has no canvas backing, returning blank pixels");
                read_canvas(&mut EmptySource::new(texture.frame(), texture.resolution()))
            }
        },
        None => {
            let (frame, resolution) = (host.screen(), host.resolution());
            read_canvas(&mut ContextSource::new(host.root_context(), frame, resolution))
        }
    }
}

impl<H: CanvasHost> ExtractorStrategy for CanvasExtract<H> {
    type Host = H;

    fn kind(&self) -> BackendKind {
        BackendKind::Canvas
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
            let full = host.screen();
            info!("Canvas extraction with region {:?} and fill {:?} at resolution {}",
                  region, fill, resolution);

            let rendered = {
                let mut scope = ScopedTexture::generate(
                    host, render_source::<H>(target), Some(full), Some(resolution))?;
                read_surface(&mut scope)?
            };

            let rect = region.unwrap_or(full).to_pixels(resolution);
            let buffer = compositor::crop_and_fill(&rendered.into_pixel_buffer(), rect, fill);

            let mut canvas = Canvas::new(rect.width, rect.height);
            canvas.put_image_data(&buffer, 0, 0);
            Ok(canvas)
        })
    }

    fn destroy(&mut self) {
        self.link.detach();
    }
}
