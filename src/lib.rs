pub mod errors;
pub mod geometry;
pub mod surface;
pub mod host;
pub mod extractor;
pub mod compression;
pub mod config;
pub mod utils;
pub mod commands;
pub mod api;

#[cfg(test)]
mod tests;

pub use crate::api::{attach, attach_canvas, attach_webgl};
pub use crate::config::ExtractConfig;
pub use crate::errors::{ExtractError, ExtractResult};

pub use extractor::{scale, CanvasExtract, ExtractTarget, ExtractorStrategy, ExtractorStrategyFactory, WebGLExtract};
pub use geometry::Frame;
pub use host::{BackendKind, HostRenderer, SceneNode, SoftwareRenderer};
pub use surface::{Canvas, ExtractedImage, FillColor, PixelBuffer};
