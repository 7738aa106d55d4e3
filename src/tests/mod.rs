//! Crate-level tests

mod config_tests;
