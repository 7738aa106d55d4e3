//! Extractor strategy definitions
//!
//! This module defines the contract shared by the canvas and WebGL
//! extractors, the renderer back-reference they hold, and the factory that
//! picks an implementation from the renderer's backend kind.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};

use crate::errors::{ExtractError, ExtractResult};
use crate::geometry::Frame;
use crate::host::{BackendKind, CanvasHost, GlHost, HostRenderer, RenderSource};
use crate::surface::{Canvas, ExtractedImage, FillColor, PixelBuffer};

use super::canvas_strategy::CanvasExtract;
use super::webgl_strategy::WebGLExtract;

/// What to extract when not reading the whole root surface
pub enum ExtractTarget<'a, N: ?Sized, T> {
    /// A pre-rendered offscreen texture, read as-is
    Texture(&'a T),
    /// A scene node, rendered to a temporary texture first
    Node(&'a N),
}

impl<N: ?Sized, T> Clone for ExtractTarget<'_, N, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<N: ?Sized, T> Copy for ExtractTarget<'_, N, T> {}

/// Extraction target for a given host
pub type Target<'a, H> = ExtractTarget<'a, <H as HostRenderer>::Node, <H as HostRenderer>::Texture>;

/// Map an optional extraction target to the content a host renders
pub(crate) fn render_source<'a, H: HostRenderer>(
    target: Option<Target<'a, H>>,
) -> RenderSource<'a, H::Node, H::Texture> {
    match target {
        None => RenderSource::Stage,
        Some(ExtractTarget::Texture(texture)) => RenderSource::Texture(texture),
        Some(ExtractTarget::Node(node)) => RenderSource::Node(node),
    }
}

/// Pixel extraction contract
///
/// Both backends expose exactly this surface. A `None` target means the
/// renderer's root surface.
pub trait ExtractorStrategy {
    /// Host renderer type this extractor reads from
    type Host: HostRenderer;

    /// Backend implemented by this extractor
    fn kind(&self) -> BackendKind;

    /// Read raw RGBA pixels, rows top to bottom
    ///
    /// # Arguments
    /// * `target` - Texture or node to read; None reads the root surface
    ///
    /// # Returns
    /// A buffer of `4 * width * height` bytes, or an error if the extractor
    /// is detached or the host cannot allocate a temporary texture
    fn pixels(&self, target: Option<Target<'_, Self::Host>>) -> ExtractResult<PixelBuffer>;

    /// Render the target into a new canvas
    ///
    /// # Arguments
    /// * `target` - Texture or node to read; None reads the root surface
    /// * `region` - Optional area of the target, in logical units
    /// * `fill` - Optional colour written into fully transparent texels
    ///
    /// # Returns
    /// A canvas sized to the region (or the whole target) at the renderer
    /// resolution
    fn canvas(
        &self,
        target: Option<Target<'_, Self::Host>>,
        region: Option<Frame>,
        fill: Option<FillColor>,
    ) -> ExtractResult<Canvas>;

    /// PNG data URL of `canvas(target)`
    fn base64(&self, target: Option<Target<'_, Self::Host>>) -> ExtractResult<String> {
        self.canvas(target, None, None)?.to_data_url()
    }

    /// Image handle whose source is `base64(target)`
    fn image(&self, target: Option<Target<'_, Self::Host>>) -> ExtractResult<ExtractedImage> {
        Ok(ExtractedImage::new(self.base64(target)?))
    }

    /// Detach from the renderer
    ///
    /// Every extraction call made afterwards fails with `Detached`.
    fn destroy(&mut self);
}

/// Non-owning link between an extractor and its renderer
pub(crate) struct RendererLink<H> {
    renderer: Weak<RefCell<H>>,
}

impl<H: HostRenderer> RendererLink<H> {
    /// Register an extractor of `kind` on the renderer
    pub(crate) fn attach(renderer: &Rc<RefCell<H>>, kind: BackendKind) -> ExtractResult<Self> {
        renderer.try_borrow_mut()
            .map_err(|_| ExtractError::RendererBusy)?
            .attach_extract(kind);

        Ok(RendererLink {
            renderer: Rc::downgrade(renderer),
        })
    }

    /// Run `f` with exclusive access to the renderer for one call
    pub(crate) fn with_host<R>(&self, f: impl FnOnce(&mut H) -> ExtractResult<R>) -> ExtractResult<R> {
        let renderer = self.renderer.upgrade().ok_or(ExtractError::Detached)?;
        let mut host = renderer.try_borrow_mut().map_err(|_| ExtractError::RendererBusy)?;
        f(&mut *host)
    }

    /// Clear both directions of the back-reference
    pub(crate) fn detach(&mut self) {
        if let Some(renderer) = self.renderer.upgrade() {
            match renderer.try_borrow_mut() {
                Ok(mut host) => host.detach_extract(),
                Err(_) => warn!("Renderer busy while detaching extract plugin"),
            }
        } else {
            debug!("Renderer already gone, nothing to detach");
        }
        self.renderer = Weak::new();
    }
}

/// Factory for creating extractors
///
/// The backend is chosen from the renderer's surface kind, so callers never
/// inspect the concrete extractor type.
pub struct ExtractorStrategyFactory;

impl ExtractorStrategyFactory {
    /// Create the extractor matching the renderer's backend
    ///
    /// # Arguments
    /// * `renderer` - Renderer to attach to
    ///
    /// # Returns
    /// An attached extractor, or an error if the renderer is busy
    pub fn create_strategy<H>(renderer: &Rc<RefCell<H>>) -> ExtractResult<Box<dyn ExtractorStrategy<Host = H>>>
    where
        H: CanvasHost + GlHost + 'static,
    {
        let kind = renderer.try_borrow()
            .map_err(|_| ExtractError::RendererBusy)?
            .backend_kind();
        Self::create_for_kind(kind, renderer)
    }

    /// Create an extractor for an explicit backend
    pub fn create_for_kind<H>(kind: BackendKind, renderer: &Rc<RefCell<H>>) -> ExtractResult<Box<dyn ExtractorStrategy<Host = H>>>
    where
        H: CanvasHost + GlHost + 'static,
    {
        info!("Creating {} extractor", kind);
        match kind {
            BackendKind::Canvas => Ok(Box::new(CanvasExtract::new(renderer)?)),
            BackendKind::WebGL => Ok(Box::new(WebGLExtract::new(renderer)?)),
        }
    }
}
