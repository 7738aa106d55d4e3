//! Readable pixel sources
//!
//! A `PixelSource` is one resolved surface: it knows its geometry, whether
//! its rows are stored bottom-up, and how to read a physical rectangle.
//! Canvas contexts and GPU framebuffers each get one implementation, and
//! `read_canvas` turns any of them into a top-down canvas.

use log::{debug, warn};

use crate::errors::ExtractResult;
use crate::geometry::{Frame, PixelRect};
use crate::host::{BoundFramebuffer, FramebufferContext, FramebufferTarget, PixelContext, RenderTargetInfo};
use crate::surface::{Canvas, PixelBuffer};

/// A surface that supports pixel readback
pub trait PixelSource {
    /// Area of the surface to read, in logical units
    fn frame(&self) -> Frame;

    /// Physical pixels per logical unit
    fn resolution(&self) -> f64;

    /// Whether rows come back bottom to top
    fn needs_flip(&self) -> bool;

    /// Read a physical rectangle in the source's own row order
    fn read_region(&mut self, rect: PixelRect) -> ExtractResult<PixelBuffer>;
}

/// Read the full frame of a source into a top-down canvas
///
/// The frame is scaled by the source resolution and floored with the shared
/// epsilon. Bottom-up sources are mirrored after the read.
pub fn read_canvas(source: &mut dyn PixelSource) -> ExtractResult<Canvas> {
    let rect = source.frame().to_pixels(source.resolution());
    debug!("Reading {}x{} at ({}, {}), flip={}", rect.width, rect.height, rect.x, rect.y, source.needs_flip());

    let buffer = source.read_region(rect)?;
    let mut canvas = Canvas::from_buffer(buffer);

    if source.needs_flip() {
        canvas.flip_vertical();
    }

    Ok(canvas)
}

/// Source backed by a 2D pixel context
pub struct ContextSource<'a> {
    context: &'a dyn PixelContext,
    frame: Frame,
    resolution: f64,
}

impl<'a> ContextSource<'a> {
    pub fn new(context: &'a dyn PixelContext, frame: Frame, resolution: f64) -> Self {
        ContextSource { context, frame, resolution }
    }
}

impl PixelSource for ContextSource<'_> {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }

    fn needs_flip(&self) -> bool {
        false
    }

    fn read_region(&mut self, rect: PixelRect) -> ExtractResult<PixelBuffer> {
        Ok(self.context.get_image_data(rect))
    }
}

/// Source backed by a bindable framebuffer
pub struct FramebufferSource<'a, C: FramebufferContext + ?Sized> {
    context: &'a mut C,
    info: RenderTargetInfo,
}

impl<'a, C: FramebufferContext + ?Sized> FramebufferSource<'a, C> {
    pub fn new(context: &'a mut C, info: RenderTargetInfo) -> Self {
        FramebufferSource { context, info }
    }
}

impl<C: FramebufferContext + ?Sized> PixelSource for FramebufferSource<'_, C> {
    fn frame(&self) -> Frame {
        self.info.frame
    }

    fn resolution(&self) -> f64 {
        self.info.resolution
    }

    fn needs_flip(&self) -> bool {
        self.info.target == FramebufferTarget::Root
    }

    fn read_region(&mut self, rect: PixelRect) -> ExtractResult<PixelBuffer> {
        let mut raw = {
            let bound = BoundFramebuffer::bind(&mut *self.context, self.info.target);
            bound.read_pixels(rect)
        };

        if raw.len() != rect.byte_len() {
            warn!("Readback returned {} bytes, expected {}", raw.len(), rect.byte_len());
            raw.resize(rect.byte_len(), 0);
        }

        PixelBuffer::from_raw(rect.width, rect.height, raw)
    }
}

/// Source with no backing store
///
/// Reads produce a zeroed buffer of the size the frame implies.
pub struct EmptySource {
    frame: Frame,
    resolution: f64,
}

impl EmptySource {
    pub fn new(frame: Frame, resolution: f64) -> Self {
        EmptySource { frame, resolution }
    }
}

impl PixelSource for EmptySource {
    fn frame(&self) -> Frame {
        self.frame
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }

    fn needs_flip(&self) -> bool {
        false
    }

    fn read_region(&mut self, rect: PixelRect) -> ExtractResult<PixelBuffer> {
        Ok(PixelBuffer::new(rect.width, rect.height))
    }
}
