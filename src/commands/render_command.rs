//! Region rendering command
//!
//! The render command covers the three read paths of the contract:
//! arbitrary regions (with optional resampling), capped thumbnails,
//! and normalized tiles.

use clap::ArgMatches;
use log::info;

use crate::api::FormatKit;
use crate::commands::command_traits::Command;
use crate::format::errors::{FormatError, FormatResult};
use crate::format::region::PlaneSelector;
use crate::utils::progress::ProgressTracker;

/// What the command should render
enum RenderTarget {
    /// A pixel region, optionally resampled to an output size
    Region {
        region: Option<(u32, u32, u32, u32)>,
        out_size: Option<(u32, u32)>,
    },
    /// The whole image, fitted within a bounding box
    Thumbnail { max_width: u32, max_height: u32 },
    /// One tile of the normalized tile grid
    Tile { level: u32, tile_index: u32, tile_size: u32 },
}

/// Command that renders part of an image to a raster file
pub struct RenderCommand {
    input_path: String,
    output_path: String,
    target: RenderTarget,
    selector: PlaneSelector,
}

/// Parses a "x,y,width,height" region argument
fn parse_region_arg(value: &str) -> FormatResult<(u32, u32, u32, u32)> {
    let parts: Vec<&str> = value.split(',').map(|p| p.trim()).collect();
    if parts.len() != 4 {
        return Err(FormatError::GenericError(format!(
            "Region must be 'x,y,width,height', got {:?}", value
        )));
    }

    let mut numbers = [0u32; 4];
    for (target, part) in numbers.iter_mut().zip(&parts) {
        *target = part.parse::<u32>().map_err(|_| {
            FormatError::GenericError(format!("Invalid region component: {:?}", part))
        })?;
    }

    Ok((numbers[0], numbers[1], numbers[2], numbers[3]))
}

/// Parses a "WIDTHxHEIGHT" size argument
fn parse_size_arg(value: &str) -> FormatResult<(u32, u32)> {
    let parts: Vec<&str> = value.split('x').map(|p| p.trim()).collect();
    if parts.len() != 2 {
        return Err(FormatError::GenericError(format!(
            "Size must be 'WIDTHxHEIGHT', got {:?}", value
        )));
    }

    let width = parts[0].parse::<u32>().map_err(|_| {
        FormatError::GenericError(format!("Invalid width: {:?}", parts[0]))
    })?;
    let height = parts[1].parse::<u32>().map_err(|_| {
        FormatError::GenericError(format!("Invalid height: {:?}", parts[1]))
    })?;

    Ok((width, height))
}

impl RenderCommand {
    /// Creates a render command from CLI arguments
    pub fn new(args: &ArgMatches) -> FormatResult<Self> {
        let input_path = args
            .get_one::<String>("input")
            .expect("input is a required argument")
            .clone();

        let output_path = args
            .get_one::<String>("output")
            .ok_or_else(|| {
                FormatError::GenericError("Rendering requires --output".to_string())
            })?
            .clone();

        let selector = PlaneSelector {
            c: args.get_one::<u32>("channel").copied(),
            z: args.get_one::<u32>("z").copied(),
            t: args.get_one::<u32>("t").copied(),
        };

        let target = if let Some(size) = args.get_one::<String>("thumbnail") {
            let (max_width, max_height) = parse_size_arg(size)?;
            RenderTarget::Thumbnail { max_width, max_height }
        } else if let Some(tile_index) = args.get_one::<u32>("tile-index") {
            RenderTarget::Tile {
                level: args.get_one::<u32>("tile-level").copied().unwrap_or(0),
                tile_index: *tile_index,
                tile_size: args.get_one::<u32>("tile-size").copied().unwrap_or(256),
            }
        } else {
            let region = args
                .get_one::<String>("region")
                .map(|value| parse_region_arg(value))
                .transpose()?;
            let out_size = args
                .get_one::<String>("size")
                .map(|value| parse_size_arg(value))
                .transpose()?;
            RenderTarget::Region { region, out_size }
        };

        Ok(RenderCommand {
            input_path,
            output_path,
            target,
            selector,
        })
    }
}

impl Command for RenderCommand {
    fn execute(&self) -> FormatResult<()> {
        let kit = FormatKit::new(None)?;

        let progress = ProgressTracker::new(3, "Rendering");
        progress.set_message("Detecting format");
        // Detection failures should surface before any render work
        let descriptor = kit.detect(&self.input_path)?;
        info!("Rendering {} file {}", descriptor.name(), self.input_path);
        progress.increment(1);

        progress.set_message("Decoding region");
        let buffer = match &self.target {
            RenderTarget::Region { region, out_size } => {
                kit.render_region(&self.input_path, *region, *out_size, self.selector)?
            }
            RenderTarget::Thumbnail { max_width, max_height } => {
                kit.render_thumbnail(&self.input_path, *max_width, *max_height, self.selector)?
            }
            RenderTarget::Tile { level, tile_index, tile_size } => {
                kit.render_tile(&self.input_path, *level, *tile_index, *tile_size, self.selector)?
            }
        };
        progress.increment(1);

        progress.set_message("Encoding output");
        kit.save_buffer(&buffer, &self.output_path)?;
        progress.increment(1);
        progress.finish();

        println!(
            "Rendered {}x{}x{} buffer to {}",
            buffer.width(),
            buffer.height(),
            buffer.n_channels(),
            self.output_path
        );

        Ok(())
    }
}
