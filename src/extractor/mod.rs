//! Pixel extraction from renderers
//!
//! This module provides the extract plugin: two backend strategies behind
//! one `ExtractorStrategy` contract, the shared readback pipeline and the
//! region compositor.

mod extractor_strategy;
mod pixel_source;
mod scoped_texture;
mod canvas_strategy;
mod webgl_strategy;
pub mod compositor;

#[cfg(test)]
mod tests;

// Public exports
pub use extractor_strategy::{ExtractTarget, ExtractorStrategy, ExtractorStrategyFactory, Target};
pub use pixel_source::{read_canvas, ContextSource, EmptySource, FramebufferSource, PixelSource};
pub use scoped_texture::ScopedTexture;
pub use canvas_strategy::CanvasExtract;
pub use webgl_strategy::WebGLExtract;

// Standalone letterbox utility
pub use compositor::scale;
