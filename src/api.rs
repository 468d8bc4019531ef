use std::path::PathBuf;

use log::info;

use crate::files;
use crate::format::buffer::PixelBuffer;
use crate::format::descriptor::FormatDescriptor;
use crate::format::errors::{FormatError, FormatResult};
use crate::format::extractor::{extract_all, ImageMetadata};
use crate::format::region::{tile_region, PlaneSelector, Region};
use crate::format::registry::{self, FormatRegistry};
use crate::utils::logger::Logger;

/// Main interface to the FormatKit library
///
/// Plays the role of the host: resolves processed-file artifacts, runs
/// detection against the global registry, and drives the matched
/// format's extractor and renderer.
pub struct FormatKit {
    registry: &'static FormatRegistry,
}

impl FormatKit {
    /// Create a new FormatKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to a log file; when given, a file
    ///   logger is installed as the global logger
    ///
    /// # Returns
    /// A FormatKit instance or an error if logger setup fails
    pub fn new(log_file: Option<&str>) -> FormatResult<Self> {
        if let Some(path) = log_file {
            Logger::init_global_logger(path)?;
        }
        Ok(FormatKit {
            registry: registry::global(),
        })
    }

    /// Resolves the path image data should be read from
    fn readable_path(&self, input_path: &str) -> PathBuf {
        files::resolve_readable(std::path::Path::new(input_path))
    }

    /// Detect the format of a file
    ///
    /// # Arguments
    /// * `input_path` - Path to the candidate file
    ///
    /// # Returns
    /// The matching format descriptor, or UnknownFormat
    pub fn detect(&self, input_path: &str) -> FormatResult<&FormatDescriptor> {
        let path = self.readable_path(input_path);
        info!("Detecting format of {}", path.display());
        self.registry.detect(&path)
    }

    /// Extract the full metadata of a file
    ///
    /// Runs detection and then the three-tier extraction sequence.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// Combined core/calibration/diagnostic metadata
    pub fn metadata(&self, input_path: &str) -> FormatResult<ImageMetadata> {
        let path = self.readable_path(input_path);
        let descriptor = self.registry.detect(&path)?;
        extract_all(descriptor.extractor(), &path)
    }

    /// Produce a human-readable description of a file
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    ///
    /// # Returns
    /// Multi-line text with identity, core metadata, calibration and
    /// diagnostic properties
    pub fn describe(&self, input_path: &str) -> FormatResult<String> {
        let path = self.readable_path(input_path);
        let descriptor = self.registry.detect(&path)?;
        let metadata = extract_all(descriptor.extractor(), &path)?;
        let core = &metadata.core;

        let mut result = format!("Image Description: {}\n", input_path);
        result.push_str(&format!("  Format: {}", descriptor.name()));
        if !descriptor.remarks().is_empty() {
            result.push_str(&format!(" ({})", descriptor.remarks()));
        }
        result.push('\n');
        result.push_str(&format!(
            "  Spatial: {}, pyramidal: {}, needs conversion: {}\n",
            descriptor.is_spatial(),
            descriptor.is_pyramidal(),
            descriptor.needs_conversion()
        ));
        result.push_str(&format!("  Extent: {}x{}\n", core.width, core.height));
        result.push_str(&format!("  Significant bits: {}\n", core.significant_bits));
        result.push_str(&format!("  Pixel type: {}\n", core.pixel_type.name()));
        result.push_str(&format!("  Depth: {}, duration: {}\n", core.depth, core.duration));

        result.push_str(&format!("  Channels: {}\n", core.n_channels));
        for channel in &core.channels {
            result.push_str(&format!("    #{}: {}\n", channel.index, channel.suggested_name));
        }

        if !metadata.calibration.is_empty() {
            result.push_str("  Calibration:\n");
            if let Some(size) = &metadata.calibration.pixel_size_x {
                result.push_str(&format!("    Pixel size X: {}\n", size));
            }
            if let Some(size) = &metadata.calibration.pixel_size_y {
                result.push_str(&format!("    Pixel size Y: {}\n", size));
            }
            if let Some(magnification) = metadata.calibration.magnification {
                result.push_str(&format!("    Magnification: {}\n", magnification));
            }
            if let Some(acquired_at) = &metadata.calibration.acquired_at {
                result.push_str(&format!("    Acquired at: {}\n", acquired_at));
            }
        }

        if !metadata.diagnostics.is_empty() {
            result.push_str("  Properties:\n");
            for (key, value) in metadata.diagnostics.iter() {
                result.push_str(&format!("    {}: {}\n", key, value));
            }
        }

        Ok(result)
    }

    /// Render a pixel region of a file to memory
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    /// * `region` - Optional region (x, y, width, height); None renders
    ///   the whole image
    /// * `out_size` - Optional output dimensions; None keeps the region's
    ///   own extent (no resampling)
    /// * `selector` - Channel/z/t selection
    ///
    /// # Returns
    /// The decoded pixel buffer
    pub fn render_region(
        &self,
        input_path: &str,
        region: Option<(u32, u32, u32, u32)>,
        out_size: Option<(u32, u32)>,
        selector: PlaneSelector,
    ) -> FormatResult<PixelBuffer> {
        let path = self.readable_path(input_path);
        let descriptor = self.registry.detect(&path)?;
        let metadata = extract_all(descriptor.extractor(), &path)?;

        let region = match region {
            Some((x, y, width, height)) => {
                info!("Rendering region x={}, y={}, width={}, height={}", x, y, width, height);
                Region::new(x, y, width, height)
            }
            None => {
                info!("No region specified, rendering entire image");
                metadata.core.full_region()
            }
        };

        let (out_width, out_height) = out_size.unwrap_or((region.width, region.height));
        descriptor.renderer().render(
            &path,
            &metadata.core,
            &region,
            out_width,
            out_height,
            &selector,
        )
    }

    /// Render a thumbnail of a file to memory
    ///
    /// The output fits within (max_width, max_height) with aspect ratio
    /// preserved and is never upsampled past the native extent.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    /// * `max_width` - Maximum thumbnail width
    /// * `max_height` - Maximum thumbnail height
    /// * `selector` - Channel/z/t selection
    ///
    /// # Returns
    /// The decoded thumbnail buffer
    pub fn render_thumbnail(
        &self,
        input_path: &str,
        max_width: u32,
        max_height: u32,
        selector: PlaneSelector,
    ) -> FormatResult<PixelBuffer> {
        let path = self.readable_path(input_path);
        let descriptor = self.registry.detect(&path)?;
        let metadata = extract_all(descriptor.extractor(), &path)?;

        info!("Rendering thumbnail capped at {}x{}", max_width, max_height);
        descriptor
            .renderer()
            .render_thumbnail(&path, &metadata.core, max_width, max_height, &selector)
    }

    /// Render a normalized tile of a file to memory
    ///
    /// The tile grid covers the image extent at the given pyramid level
    /// in row-major order; edge tiles are clipped to the image. For a
    /// non-pyramidal format a level above 0 reads the corresponding
    /// level-0 window and downsamples it to the tile extent.
    ///
    /// # Arguments
    /// * `input_path` - Path to the image file
    /// * `level` - Pyramid level (0 = full resolution)
    /// * `tile_index` - Row-major tile index
    /// * `tile_size` - Nominal tile side length
    /// * `selector` - Channel/z/t selection
    ///
    /// # Returns
    /// The decoded tile buffer
    pub fn render_tile(
        &self,
        input_path: &str,
        level: u32,
        tile_index: u32,
        tile_size: u32,
        selector: PlaneSelector,
    ) -> FormatResult<PixelBuffer> {
        if level > 30 {
            return Err(FormatError::GenericError(format!(
                "Pyramid level {} out of range", level
            )));
        }

        let path = self.readable_path(input_path);
        let descriptor = self.registry.detect(&path)?;
        let metadata = extract_all(descriptor.extractor(), &path)?;
        let core = &metadata.core;

        let tile = tile_region(core.width, core.height, level, tile_index, tile_size)?;
        info!("Rendering tile {} at level {} (region {})", tile_index, level, tile);

        // Map the tile back to level-0 coordinates, clipped to the image.
        let scale = 1u64 << level;
        let x = (tile.x as u64 * scale).min(core.width as u64) as u32;
        let y = (tile.y as u64 * scale).min(core.height as u64) as u32;
        let width = (tile.width as u64 * scale).min(core.width as u64 - x as u64) as u32;
        let height = (tile.height as u64 * scale).min(core.height as u64 - y as u64) as u32;
        let window = Region::new(x, y, width, height);

        descriptor
            .renderer()
            .render(&path, core, &window, tile.width, tile.height, &selector)
    }

    /// Encode a rendered buffer to a raster file
    ///
    /// The output format is inferred from the file extension (PNG, JPEG
    /// and the other formats the image crate can write).
    ///
    /// # Arguments
    /// * `buffer` - Buffer returned by one of the render methods
    /// * `output_path` - Path to write the encoded image to
    ///
    /// # Returns
    /// Result indicating success or an error
    pub fn save_buffer(&self, buffer: &PixelBuffer, output_path: &str) -> FormatResult<()> {
        let image = buffer.to_dynamic_image()?;
        image
            .save(output_path)
            .map_err(|e| FormatError::GenericError(format!("Failed to encode image: {}", e)))?;

        info!("Saved {}x{} image to {}", buffer.width(), buffer.height(), output_path);
        Ok(())
    }
}
