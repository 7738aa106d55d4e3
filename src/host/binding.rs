//! Framebuffer binding
//!
//! The currently bound framebuffer is renderer-wide mutable state. Reads go
//! through `BoundFramebuffer`, which binds a target for its lifetime and puts
//! the previous binding back when dropped.

use log::debug;

use crate::geometry::PixelRect;

/// Framebuffer a host can bind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FramebufferTarget {
    /// The default framebuffer; rows are stored bottom to top
    Root,
    /// A texture's framebuffer; rows are stored top to bottom
    Texture(u32),
}

/// Binding and raw readback primitives of a GPU-style context
pub trait FramebufferContext {
    /// Currently bound framebuffer
    fn bound_target(&self) -> Option<FramebufferTarget>;

    /// Bind a framebuffer, or unbind with None
    fn bind_target(&mut self, target: Option<FramebufferTarget>);

    /// Blocking RGBA/UNSIGNED_BYTE read from the bound framebuffer
    ///
    /// Rows come back in framebuffer order. The returned vector holds
    /// `4 * rect.width * rect.height` bytes.
    fn read_pixels(&self, rect: PixelRect) -> Vec<u8>;
}

/// Scoped framebuffer binding
pub struct BoundFramebuffer<'a, C: FramebufferContext + ?Sized> {
    context: &'a mut C,
    target: FramebufferTarget,
    previous: Option<FramebufferTarget>,
}

impl<'a, C: FramebufferContext + ?Sized> BoundFramebuffer<'a, C> {
    /// Bind `target` until the returned guard is dropped
    pub fn bind(context: &'a mut C, target: FramebufferTarget) -> Self {
        let previous = context.bound_target();
        if previous != Some(target) {
            debug!("Binding framebuffer {:?} (was {:?})", target, previous);
            context.bind_target(Some(target));
        }
        BoundFramebuffer { context, target, previous }
    }

    /// Read pixels from the bound framebuffer
    pub fn read_pixels(&self, rect: PixelRect) -> Vec<u8> {
        self.context.read_pixels(rect)
    }
}

impl<C: FramebufferContext + ?Sized> Drop for BoundFramebuffer<'_, C> {
    fn drop(&mut self) {
        if self.previous != Some(self.target) {
            self.context.bind_target(self.previous);
        }
    }
}
