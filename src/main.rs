use clap::{Arg, Command as ClapCommand, ArgAction};
use std::process;
use log::{error, Level};

use rasterextract::config::ExtractConfig;
use rasterextract::utils::logger::{self, Logger};
use rasterextract::commands::{CommandFactory, ExtractCommandFactory};

fn main() {
    let matches = ClapCommand::new("rasterextract")
        .version("0.1.0")
        .author("Maurice Schilpp")
        .about("Extract pixels, canvases and data URLs from rendered images")
        .arg(
            Arg::new("input")
                .help("Input image shown on the renderer stage")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Output file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("backend")
                .short('b')
                .long("backend")
                .help("Renderer backend (canvas or webgl)")
                .value_name("BACKEND")
                .required(false),
        )
        .arg(
            Arg::new("resolution")
                .short('r')
                .long("resolution")
                .help("Physical pixels per logical unit")
                .value_name("RATIO")
                .required(false),
        )
        .arg(
            Arg::new("screen")
                .long("screen")
                .help("Logical screen size (WIDTHxHEIGHT), defaults to the image size")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .help("Region to extract in logical units (x,y,width,height)")
                .value_name("REGION")
                .required(false),
        )
        .arg(
            Arg::new("regions")
                .long("regions")
                .help("Several regions separated by ';', written to numbered files")
                .value_name("REGIONS")
                .required(false),
        )
        .arg(
            Arg::new("fill")
                .long("fill")
                .help("Colour for transparent pixels (#rrggbb, #rgb, 0xrrggbb or decimal)")
                .value_name("COLOR")
                .required(false),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format (png, jpeg, dataurl, dataurl-jpeg)")
                .value_name("FORMAT")
                .required(false),
        )
        .arg(
            Arg::new("pixels")
                .short('p')
                .long("pixels")
                .help("Write a raw RGBA dump instead of an image")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("compression")
                .long("compression")
                .help("Raw dump compression (none, deflate, zstd)")
                .value_name("NAME")
                .required(false),
        )
        .arg(
            Arg::new("scale")
                .short('s')
                .long("scale")
                .help("Letterbox the input into a WIDTHxHEIGHT canvas")
                .value_name("SIZE")
                .required(false),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("TOML configuration file")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Write log records to this file as well as stdout")
                .value_name("FILE")
                .required(false),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Hide progress output")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match ExtractConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading configuration: {}", e);
                process::exit(1);
            }
        },
        None => ExtractConfig::defaults().clone(),
    };

    match matches.get_one::<String>("log-file") {
        Some(log_file) => {
            let level = logger::parse_level(&config.log_level).unwrap_or(Level::Info);
            if let Err(e) = Logger::init_global_logger(log_file, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(logger::level_filter(&config.log_level))
                .parse_default_env()
                .init();
        }
    }

    let factory = ExtractCommandFactory::new();

    let command_result = factory.create_command(&matches, &config);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
