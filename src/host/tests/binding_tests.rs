//! Tests for framebuffer binding

extern crate std;

use crate::geometry::PixelRect;
use crate::host::{BoundFramebuffer, FramebufferContext, FramebufferTarget};

#[derive(Default)]
struct RecordingContext {
    bound: Option<FramebufferTarget>,
    binds: Vec<Option<FramebufferTarget>>,
}

impl FramebufferContext for RecordingContext {
    fn bound_target(&self) -> Option<FramebufferTarget> {
        self.bound
    }

    fn bind_target(&mut self, target: Option<FramebufferTarget>) {
        self.bound = target;
        self.binds.push(target);
    }

    fn read_pixels(&self, rect: PixelRect) -> Vec<u8> {
        let fill = match self.bound {
            Some(FramebufferTarget::Root) => 1,
            Some(FramebufferTarget::Texture(id)) => id as u8,
            None => 0,
        };
        vec![fill; rect.byte_len()]
    }
}

#[test]
fn test_binding_is_restored_on_drop() {
    let mut context = RecordingContext {
        bound: Some(FramebufferTarget::Texture(7)),
        ..Default::default()
    };

    {
        let bound = BoundFramebuffer::bind(&mut context, FramebufferTarget::Root);
        std::assert_eq!(bound.read_pixels(PixelRect::new(0, 0, 1, 1)), vec![1; 4]);
    }

    std::assert_eq!(context.bound, Some(FramebufferTarget::Texture(7)));
    std::assert_eq!(context.binds, vec![
        Some(FramebufferTarget::Root),
        Some(FramebufferTarget::Texture(7)),
    ]);
}

#[test]
fn test_rebinding_same_target_is_a_no_op() {
    let mut context = RecordingContext {
        bound: Some(FramebufferTarget::Root),
        ..Default::default()
    };

    drop(BoundFramebuffer::bind(&mut context, FramebufferTarget::Root));
    std::assert!(context.binds.is_empty());
}
