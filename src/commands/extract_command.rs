//! Image extraction command
//!
//! Renders the input image on the reference renderer and extracts it, or a
//! batch of regions of it, through the extract plugin for the chosen
//! backend.

use clap::ArgMatches;
use log::{debug, info};

use crate::commands::command_traits::Command;
use crate::commands::output::{indexed_path, OutputFormat};
use crate::commands::render_options::RenderOptions;
use crate::config::ExtractConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::extractor::{ExtractorStrategy, ExtractorStrategyFactory};
use crate::geometry::Frame;
use crate::host::SoftwareRenderer;
use crate::surface::FillColor;
use crate::utils::progress::ProgressTracker;
use crate::utils::region_utils;

/// Command for extracting canvases from a rendered image
pub struct ExtractCommand {
    /// Renderer built from the input
    render: RenderOptions,
    /// Path to the output file
    output_file: String,
    /// Regions to extract; empty means the whole surface
    regions: Vec<Frame>,
    /// Colour written into transparent texels
    fill: Option<FillColor>,
    /// What to write
    format: OutputFormat,
    /// Hide the batch progress bar
    quiet: bool,
}

impl ExtractCommand {
    /// Create a new extract command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `config` - Settings used where an argument is absent
    ///
    /// # Returns
    /// A new ExtractCommand instance or an error
    pub fn new(args: &ArgMatches, config: &ExtractConfig) -> ExtractResult<Self> {
        info!("Creating new extract command from arguments");
        let render = RenderOptions::from_args(args, config)?;

        let output_file = args.get_one::<String>("output")
            .ok_or_else(|| ExtractError::GenericError("Missing output file path for extraction".to_string()))?
            .clone();

        let mut regions = Vec::new();
        if let Some(region) = args.get_one::<String>("region") {
            regions.push(region_utils::parse_region(region)?);
        }
        if let Some(list) = args.get_one::<String>("regions") {
            regions.extend(region_utils::parse_regions(list)?);
        }
        info!("Regions: {:?}", regions);

        let fill = args.get_one::<String>("fill")
            .map(|s| s.parse::<FillColor>())
            .transpose()?;

        let format = args.get_one::<String>("format")
            .map(String::as_str)
            .unwrap_or(config.output_format.as_str())
            .parse()?;

        Ok(ExtractCommand {
            render,
            output_file,
            regions,
            fill,
            format,
            quiet: args.get_flag("quiet"),
        })
    }

    /// Extract every requested canvas through `extract`
    fn extract_all(&self, extract: &dyn ExtractorStrategy<Host = SoftwareRenderer>) -> ExtractResult<usize> {
        if self.regions.is_empty() {
            let canvas = extract.canvas(None, None, self.fill)?;
            self.format.write(&canvas, &self.output_file)?;
            return Ok(1);
        }

        let count = self.regions.len();
        let progress = if self.quiet || count == 1 {
            ProgressTracker::hidden(count as u64)
        } else {
            ProgressTracker::new(count as u64, "Extracting regions")
        };

        for (index, region) in self.regions.iter().enumerate() {
            debug!("Extracting region {} of {}: {:?}", index + 1, count, region);
            progress.set_message(&format!("Region {}/{}", index + 1, count));
            let canvas = extract.canvas(None, Some(*region), self.fill)?;
            self.format.write(&canvas, &indexed_path(&self.output_file, index, count))?;
            progress.increment(1);
        }

        progress.finish();
        Ok(count)
    }
}

impl Command for ExtractCommand {
    fn execute(&self) -> ExtractResult<()> {
        info!("Executing extract command");
        let renderer = self.render.build_renderer()?;
        let mut extract = ExtractorStrategyFactory::create_strategy(&renderer)?;

        let result = self.extract_all(extract.as_ref());
        extract.destroy();

        let written = result?;
        info!("Extraction completed: {} output(s)", written);
        Ok(())
    }
}
