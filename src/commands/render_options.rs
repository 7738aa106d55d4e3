//! Renderer setup shared by the extraction commands

use std::cell::RefCell;
use std::rc::Rc;

use clap::ArgMatches;
use log::info;

use crate::config::ExtractConfig;
use crate::errors::{ExtractError, ExtractResult};
use crate::host::{BackendKind, SceneNode, SoftwareRenderer};
use crate::utils::region_utils;

/// How to build the renderer an input image is extracted from
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Image shown on the stage
    pub input_file: String,
    /// Backend the renderer emulates
    pub backend: BackendKind,
    /// Physical pixels per logical unit
    pub resolution: f64,
    /// Logical screen size, defaults to the image size
    pub screen: Option<(u32, u32)>,
}

impl RenderOptions {
    /// Read renderer options from CLI arguments, falling back to `config`
    pub fn from_args(args: &ArgMatches, config: &ExtractConfig) -> ExtractResult<Self> {
        let input_file = args.get_one::<String>("input")
            .ok_or_else(|| ExtractError::GenericError("Missing input file".to_string()))?
            .clone();

        let backend = match args.get_one::<String>("backend") {
            Some(name) => name.parse()?,
            None => config.backend,
        };

        let resolution = match args.get_one::<String>("resolution") {
            Some(value) => value.trim().parse::<f64>()
                .ok()
                .filter(|r| *r > 0.0 && r.is_finite())
                .ok_or_else(|| ExtractError::ConfigError(format!("Invalid resolution: {}", value)))?,
            None => config.resolution,
        };

        let screen = match args.get_one::<String>("screen") {
            Some(size) => Some(region_utils::parse_size(size)?),
            None => config.screen,
        };

        info!("Render options: {} on {} at resolution {}, screen {:?}", input_file, backend, resolution, screen);
        Ok(RenderOptions { input_file, backend, resolution, screen })
    }

    /// Load the input image and render it as the stage
    pub fn build_renderer(&self) -> ExtractResult<Rc<RefCell<SoftwareRenderer>>> {
        let image = image::open(&self.input_file)?.to_rgba8();
        info!("Loaded {} ({}x{})", self.input_file, image.width(), image.height());

        let renderer = match self.screen {
            Some((width, height)) => {
                let mut renderer = SoftwareRenderer::new(
                    self.backend, width as f64, height as f64, self.resolution);
                renderer.add_child(SceneNode::sprite(0.0, 0.0, image));
                renderer.render();
                renderer
            },
            None => SoftwareRenderer::with_image(self.backend, image, self.resolution),
        };

        Ok(Rc::new(RefCell::new(renderer)))
    }
}
