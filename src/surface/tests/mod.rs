//! Tests for pixel buffers, canvases, colours and image handles

mod canvas_tests;
mod pixel_tests;
