//! Plugin attachment entry points
//!
//! Hosts register the extract plugin with one of these calls. The returned
//! extractor holds only a weak reference to the renderer; `destroy` clears
//! the registration on both sides.

use std::cell::RefCell;
use std::rc::Rc;

use crate::errors::ExtractResult;
use crate::extractor::{CanvasExtract, ExtractorStrategy, ExtractorStrategyFactory, WebGLExtract};
use crate::host::{CanvasHost, GlHost};

/// Attach the canvas extractor to a 2D renderer
pub fn attach_canvas<H: CanvasHost>(renderer: &Rc<RefCell<H>>) -> ExtractResult<CanvasExtract<H>> {
    CanvasExtract::new(renderer)
}

/// Attach the WebGL extractor to a GPU renderer
pub fn attach_webgl<H: GlHost>(renderer: &Rc<RefCell<H>>) -> ExtractResult<WebGLExtract<H>> {
    WebGLExtract::new(renderer)
}

/// Attach whichever extractor matches the renderer's backend
pub fn attach<H>(renderer: &Rc<RefCell<H>>) -> ExtractResult<Box<dyn ExtractorStrategy<Host = H>>>
where
    H: CanvasHost + GlHost + 'static,
{
    ExtractorStrategyFactory::create_strategy(renderer)
}
