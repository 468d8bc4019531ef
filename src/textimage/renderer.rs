//! Region renderer for the text image format
//!
//! Text images carry no real pixel data, so every region decodes to a
//! white image of the declared shape. The renderer still enforces the
//! full contract: bounds are rejected, selectors validated, and the
//! output buffer always carries the declared channel count and pixel
//! type.

use std::path::Path;

use log::debug;

use crate::format::buffer::PixelBuffer;
use crate::format::errors::FormatResult;
use crate::format::metadata::CoreMetadata;
use crate::format::region::{PlaneSelector, Region};
use crate::format::renderer::{check_region, check_selector, RegionRenderer};

/// Sample value used for every synthesized pixel
const FILL_VALUE: u8 = 255;

/// Renders white placeholder pixels for text image regions
pub struct TextImageRenderer;

impl RegionRenderer for TextImageRenderer {
    fn render(
        &self,
        path: &Path,
        core: &CoreMetadata,
        region: &Region,
        out_width: u32,
        out_height: u32,
        selector: &PlaneSelector,
    ) -> FormatResult<PixelBuffer> {
        check_region(region, core)?;
        check_selector(selector, core)?;

        debug!(
            "Rendering {} of {} to {}x{}",
            region,
            path.display(),
            out_width,
            out_height
        );

        let buffer = PixelBuffer::filled_u8(region.width, region.height, core.n_channels, FILL_VALUE);

        // resample_nearest is a no-op when the output extent equals the
        // region extent, so tile reads stay pixel-identical.
        Ok(buffer.resample_nearest(out_width, out_height))
    }
}
