//! Call-scoped offscreen textures
//!
//! Resolving a target may require the host to render a temporary texture.
//! `ScopedTexture` owns that texture for the duration of one extraction and
//! destroys it when dropped, including on early returns and errors.
//! Textures supplied by the caller are only borrowed and never destroyed.

use std::mem;

use log::debug;

use crate::errors::ExtractResult;
use crate::geometry::Frame;
use crate::host::{HostRenderer, RenderSource};

use super::extractor_strategy::{ExtractTarget, Target};

/// Surface an extraction reads from
enum Held<'t, T> {
    /// The renderer's root surface
    Root,
    /// A caller-owned texture
    Borrowed(&'t T),
    /// A texture generated for this call only
    Generated(T),
}

/// Resolved extraction surface with guaranteed release
pub struct ScopedTexture<'h, 't, H: HostRenderer> {
    host: &'h mut H,
    held: Held<'t, H::Texture>,
}

impl<'h, 't, H: HostRenderer> ScopedTexture<'h, 't, H> {
    /// Resolve an extraction target
    ///
    /// No target selects the root surface, a texture is used directly and a
    /// node is rendered to a new texture at its own bounds and the host's
    /// default resolution.
    pub fn resolve(host: &'h mut H, target: Option<Target<'t, H>>) -> ExtractResult<Self> {
        let held = match target {
            None => Held::Root,
            Some(ExtractTarget::Texture(texture)) => Held::Borrowed(texture),
            Some(ExtractTarget::Node(node)) => {
                Held::Generated(host.generate_texture(RenderSource::Node(node), None, None)?)
            }
        };

        Ok(ScopedTexture { host, held })
    }

    /// Render `source` into a new texture owned by this scope
    pub fn generate(
        host: &'h mut H,
        source: RenderSource<'_, H::Node, H::Texture>,
        region: Option<Frame>,
        resolution: Option<f64>,
    ) -> ExtractResult<Self> {
        let texture = host.generate_texture(source, region, resolution)?;
        Ok(ScopedTexture {
            host,
            held: Held::Generated(texture),
        })
    }

    /// Whether the texture was created by this scope
    pub fn generated(&self) -> bool {
        matches!(self.held, Held::Generated(_))
    }

    /// Host and the texture to read; None means the root surface
    pub fn parts(&mut self) -> (&mut H, Option<&H::Texture>) {
        let texture = match &self.held {
            Held::Root => None,
            Held::Borrowed(texture) => Some(*texture),
            Held::Generated(texture) => Some(texture),
        };
        (&mut *self.host, texture)
    }
}

impl<H: HostRenderer> Drop for ScopedTexture<'_, '_, H> {
    fn drop(&mut self) {
        if let Held::Generated(texture) = mem::replace(&mut self.held, Held::Root) {
            debug!("Releasing texture generated for extraction");
            self.host.destroy_texture(texture, true);
        }
    }
}
