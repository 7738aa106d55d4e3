//! Backend tests driven through the software renderer

mod test_utils;
mod compositor_tests;
