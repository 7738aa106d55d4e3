//! CLI command implementations
//!
//! This module contains implementations of various commands
//! supported by the CLI application using the Command pattern.

pub mod command_traits;
pub mod render_options;
pub mod output;
pub mod extract_command;
pub mod pixels_command;
pub mod scale_command;

#[cfg(test)]
mod tests;

pub use command_traits::{Command, CommandFactory};
pub use render_options::RenderOptions;
pub use output::OutputFormat;
pub use extract_command::ExtractCommand;
pub use pixels_command::PixelsCommand;
pub use scale_command::ScaleCommand;

use clap::ArgMatches;
use crate::config::ExtractConfig;
use crate::errors::ExtractResult;

/// Factory for creating command instances based on CLI arguments
///
/// `--scale` selects letterbox scaling, `--pixels` a raw dump, and
/// everything else is an image extraction.
pub struct ExtractCommandFactory;

impl ExtractCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExtractCommandFactory
    }
}

impl Default for ExtractCommandFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandFactory for ExtractCommandFactory {
    fn create_command(&self, args: &ArgMatches, config: &ExtractConfig) -> ExtractResult<Box<dyn Command>> {
        if args.get_one::<String>("scale").is_some() {
            Ok(Box::new(ScaleCommand::new(args, config)?))
        } else if args.get_flag("pixels") {
            Ok(Box::new(PixelsCommand::new(args, config)?))
        } else {
            Ok(Box::new(ExtractCommand::new(args, config)?))
        }
    }
}
