//! Letterbox scaling command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::output::OutputFormat;
use crate::config::ExtractConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::scale;
use crate::surface::{Canvas, FillColor};
use crate::utils::region_utils;

/// Command fitting an image into a fixed-size canvas
pub struct ScaleCommand {
    input_file: String,
    output_file: String,
    width: u32,
    height: u32,
    fill: FillColor,
    format: OutputFormat,
}

impl ScaleCommand {
    pub fn new(args: &ArgMatches, config: &ExtractConfig) -> ExtractResult<Self> {
        info!("Creating new scale command from arguments");

        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExtractError::GenericError("Missing input file".to_string()))?
            .clone();
        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| ExtractError::GenericError("Missing output file path for scaling".to_string()))?
            .clone();

        let size = args.get_one::<String>("scale")
            .ok_or_else(|| ExtractError::GenericError("Missing target size".to_string()))?;
        let (width, height) = region_utils::parse_size(size)?;

        let fill = match args.get_one::<String>("fill") {
            Some(color) => color.parse()?,
            None => config.scale_fill,
        };

        let format = args.get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or(config.output_format.as_str())
            .parse()?;

        Ok(ScaleCommand { input_file, output_file, width, height, fill, format })
    }
}

impl Command for ScaleCommand {
    fn execute(&self) -> ExtractResult<()> {
        info!("Scaling {} to {}x{} with fill {}", self.input_file, self.width, self.height, self.fill);
        let source = Canvas::from_image(image::open(&self.input_file)?.to_rgba8());
        let scaled = scale(&source, self.width, self.height, Some(self.fill));
        self.format.write(&scaled, &self.output_file)
    }
}
