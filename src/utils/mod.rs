//! Utility modules for common functionality
//!
//! Logging, progress reporting, argument parsing helpers and the raw pixel
//! dump format used by the command line tool.

pub mod logger;
pub mod progress;
pub mod color_utils;
pub mod region_utils;
pub mod raw_utils;

#[cfg(test)]
mod tests;
