//! Region rendering contract
//!
//! A renderer turns a region request into an uncompressed pixel buffer.
//! Calls are independent and stateless: each one opens and reads the
//! file on its own, so the host may issue many render calls for one
//! imported file concurrently.

use std::path::Path;

use crate::format::buffer::PixelBuffer;
use crate::format::errors::{FormatError, FormatResult};
use crate::format::metadata::CoreMetadata;
use crate::format::region::{fit_within, PlaneSelector, Region};

/// Renders pixel regions of a matched file
///
/// The output buffer always carries the declared channel count and pixel
/// type; requesting different output dimensions changes the spatial
/// extent only.
pub trait RegionRenderer: Send + Sync {
    /// Renders a region, resampled to the given output dimensions
    ///
    /// Out-of-bounds regions are rejected with RegionOutOfBounds;
    /// implementations call `check_region` before touching the file.
    ///
    /// # Arguments
    /// * `path` - Path to the image file
    /// * `core` - Cached core metadata for the file
    /// * `region` - Region to render, in level-0 pixel coordinates
    /// * `out_width` - Output buffer width
    /// * `out_height` - Output buffer height
    /// * `selector` - Optional channel/z/t selection
    fn render(
        &self,
        path: &Path,
        core: &CoreMetadata,
        region: &Region,
        out_width: u32,
        out_height: u32,
        selector: &PlaneSelector,
    ) -> FormatResult<PixelBuffer>;

    /// Renders a thumbnail of the whole image
    ///
    /// Defined as a render over the full extent, fitted within the given
    /// bounding box with aspect ratio preserved and never upsampled past
    /// the native extent.
    fn render_thumbnail(
        &self,
        path: &Path,
        core: &CoreMetadata,
        max_width: u32,
        max_height: u32,
        selector: &PlaneSelector,
    ) -> FormatResult<PixelBuffer> {
        let (out_width, out_height) = fit_within(core.width, core.height, max_width, max_height);
        self.render(path, core, &core.full_region(), out_width, out_height, selector)
    }

    /// Renders a tile at its own pixel extent, without resampling
    fn render_tile(
        &self,
        path: &Path,
        core: &CoreMetadata,
        tile: &Region,
        selector: &PlaneSelector,
    ) -> FormatResult<PixelBuffer> {
        self.render(path, core, tile, tile.width, tile.height, selector)
    }
}

/// Validates a region request against the declared image extent
///
/// # Arguments
/// * `region` - The requested region
/// * `core` - Core metadata carrying the declared extent
///
/// # Returns
/// Ok if the region fits, RegionOutOfBounds otherwise
pub fn check_region(region: &Region, core: &CoreMetadata) -> FormatResult<()> {
    if !region.fits_within(core.width, core.height) {
        return Err(FormatError::RegionOutOfBounds {
            region: *region,
            width: core.width,
            height: core.height,
        });
    }
    Ok(())
}

/// Validates a plane selector against the declared channel/depth/duration
///
/// # Arguments
/// * `selector` - The requested channel/z/t selection
/// * `core` - Core metadata carrying the declared counts
///
/// # Returns
/// Ok if every populated index is in range, an error otherwise
pub fn check_selector(selector: &PlaneSelector, core: &CoreMetadata) -> FormatResult<()> {
    if let Some(c) = selector.c {
        if c >= core.n_channels {
            return Err(FormatError::GenericError(format!(
                "Channel index {} out of range (image has {} channels)",
                c, core.n_channels
            )));
        }
    }
    if let Some(z) = selector.z {
        if z >= core.depth {
            return Err(FormatError::GenericError(format!(
                "Z-slice index {} out of range (image has depth {})",
                z, core.depth
            )));
        }
    }
    if let Some(t) = selector.t {
        if t >= core.duration {
            return Err(FormatError::GenericError(format!(
                "Time-frame index {} out of range (image has duration {})",
                t, core.duration
            )));
        }
    }
    Ok(())
}
