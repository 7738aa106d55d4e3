//! Tests for the host interfaces and the software renderer

mod binding_tests;
mod renderer_tests;
