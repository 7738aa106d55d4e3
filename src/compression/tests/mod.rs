//! Tests for payload compression

mod handler_tests;
