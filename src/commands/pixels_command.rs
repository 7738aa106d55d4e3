//! Raw pixel dump command

use clap::ArgMatches;
use log::info;

use crate::commands::command_traits::Command;
use crate::commands::render_options::RenderOptions;
use crate::compression::CompressionFactory;
use crate::config::ExtractConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::{ExtractorStrategy, ExtractorStrategyFactory};
use crate::geometry::Frame;
use crate::surface::{FillColor, PixelBuffer};
use crate::utils::{raw_utils, region_utils};

/// Command writing extracted RGBA pixels as a raw dump
pub struct PixelsCommand {
    render: RenderOptions,
    output_file: String,
    region: Option<Frame>,
    fill: Option<FillColor>,
    compression: String,
}

impl PixelsCommand {
    pub fn new(args: &ArgMatches, config: &ExtractConfig) -> ExtractResult<Self> {
        info!("Creating new pixels command from arguments");
        let render = RenderOptions::from_args(args, config)?;

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| ExtractError::GenericError("Missing output file path for pixel dump".to_string()))?
            .clone();

        let region = args.get_one::<String>("region")
            .map(|s| region_utils::parse_region(s))
            .transpose()?;

        let fill = args.get_one::<String>("fill")
            .map(|s| s.parse::<FillColor>())
            .transpose()?;

        let compression = args.get_one::<String>("compression")
            .cloned()
            .unwrap_or_else(|| config.compression.clone());

        Ok(PixelsCommand { render, output_file, region, fill, compression })
    }
}

impl Command for PixelsCommand {
    fn execute(&self) -> ExtractResult<()> {
        info!("Executing pixels command");
        let handler = CompressionFactory::get_handler_by_name(&self.compression)?;

        let renderer = self.render.build_renderer()?;
        let mut extract = ExtractorStrategyFactory::create_strategy(&renderer)?;

        // Plain pixels() unless the caller asked for a region or a fill
        let pixels: ExtractResult<PixelBuffer> = if self.region.is_none() && self.fill.is_none() {
            extract.pixels(None)
        } else {
            extract.canvas(None, self.region, self.fill).map(|c| c.into_pixel_buffer())
        };
        extract.destroy();

        let pixels = pixels?;
        raw_utils::save_raw(&self.output_file, &pixels, handler.as_ref())?;
        info!("Dumped {}x{} pixels with {} compression", pixels.width(), pixels.height(), handler.name());
        Ok(())
    }
}
