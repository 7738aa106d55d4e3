//! Tests for the utility modules

mod color_tests;
