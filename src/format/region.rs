//! Region structures for render requests
//!
//! This module defines the Region structure that specifies a rectangular
//! area of an image for rendering. The coordinates are in pixels and
//! follow the typical image coordinate system where (0,0) is the top-left
//! corner of the image.

use std::fmt;

use crate::format::errors::{FormatError, FormatResult};

/// Region for image rendering (in pixel coordinates)
///
/// Represents a rectangular area defined by its top-left corner coordinates
/// and dimensions. This is used to specify which portion of an image should
/// be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// X-coordinate of the top-left corner (pixels from left)
    pub x: u32,

    /// Y-coordinate of the top-left corner (pixels from top)
    pub y: u32,

    /// Width of the region in pixels
    pub width: u32,

    /// Height of the region in pixels
    pub height: u32,
}

impl Region {
    /// Create a new region
    ///
    /// # Arguments
    /// * `x` - X-coordinate of the top-left corner
    /// * `y` - Y-coordinate of the top-left corner
    /// * `width` - Width of the region in pixels
    /// * `height` - Height of the region in pixels
    ///
    /// # Returns
    /// A new Region instance with the specified coordinates and dimensions
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Region { x, y, width, height }
    }

    /// Get the rightmost X coordinate (exclusive)
    ///
    /// Computed in u64 so that regions near u32::MAX cannot overflow.
    pub fn end_x(&self) -> u64 {
        self.x as u64 + self.width as u64
    }

    /// Get the bottommost Y coordinate (exclusive)
    pub fn end_y(&self) -> u64 {
        self.y as u64 + self.height as u64
    }

    /// Whether origin + extent stays inside the given image dimensions
    ///
    /// # Arguments
    /// * `image_width` - Declared image width in pixels
    /// * `image_height` - Declared image height in pixels
    pub fn fits_within(&self, image_width: u32, image_height: u32) -> bool {
        self.end_x() <= image_width as u64 && self.end_y() <= image_height as u64
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{}) {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// Optional channel/depth/time selection for a render request
///
/// All fields default to None, meaning "first/all" as decided by the
/// format. Selection never changes the channel count of the output
/// buffer; it only picks which plane the samples come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlaneSelector {
    /// Channel index
    pub c: Option<u32>,
    /// Z-slice index
    pub z: Option<u32>,
    /// Time-frame index
    pub t: Option<u32>,
}

/// Computes the region covered by a tile in a normalized tile grid
///
/// The grid tiles the image extent at the given pyramid level in row-major
/// order, `tile_size` pixels per side. Tiles at the right and bottom edges
/// are clipped to the image, so edge tiles may be smaller than `tile_size`.
///
/// # Arguments
/// * `image_width` - Level-0 image width in pixels
/// * `image_height` - Level-0 image height in pixels
/// * `level` - Pyramid level (0 = full resolution, each level halves)
/// * `tile_index` - Row-major tile index within the grid at that level
/// * `tile_size` - Nominal tile side length in pixels
///
/// # Returns
/// The tile's region in level coordinates, or an error for an empty grid
/// or an index outside it
pub fn tile_region(
    image_width: u32,
    image_height: u32,
    level: u32,
    tile_index: u32,
    tile_size: u32,
) -> FormatResult<Region> {
    if tile_size == 0 {
        return Err(FormatError::GenericError("Tile size must be positive".to_string()));
    }
    if image_width == 0 || image_height == 0 {
        return Err(FormatError::GenericError("Image extent is empty".to_string()));
    }

    let level_width = (image_width >> level).max(1);
    let level_height = (image_height >> level).max(1);

    let tiles_across = level_width.div_ceil(tile_size);
    let tiles_down = level_height.div_ceil(tile_size);

    if tile_index as u64 >= tiles_across as u64 * tiles_down as u64 {
        return Err(FormatError::GenericError(format!(
            "Tile index {} out of range for a {}x{} grid at level {}",
            tile_index, tiles_across, tiles_down, level
        )));
    }

    // Grid coordinates stay within the level extent, so the u64
    // intermediates always fit back into u32.
    let x = (tile_index % tiles_across) as u64 * tile_size as u64;
    let y = (tile_index / tiles_across) as u64 * tile_size as u64;
    let width = (tile_size as u64).min(level_width as u64 - x);
    let height = (tile_size as u64).min(level_height as u64 - y);

    Ok(Region::new(x as u32, y as u32, width as u32, height as u32))
}

/// Fits a source extent inside a bounding box, preserving aspect ratio
///
/// The result never exceeds the source extent: thumbnails are downsampled,
/// never upsampled. A 256x256 request against a 200x80 image therefore
/// yields 200x80.
///
/// # Arguments
/// * `src_width` - Source width in pixels
/// * `src_height` - Source height in pixels
/// * `max_width` - Maximum output width
/// * `max_height` - Maximum output height
///
/// # Returns
/// The fitted (width, height) pair
pub fn fit_within(src_width: u32, src_height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if src_width == 0 || src_height == 0 || max_width == 0 || max_height == 0 {
        return (0, 0);
    }

    let scale_w = max_width as f64 / src_width as f64;
    let scale_h = max_height as f64 / src_height as f64;
    let scale = scale_w.min(scale_h).min(1.0);

    let out_width = ((src_width as f64 * scale).round() as u32).clamp(1, src_width);
    let out_height = ((src_height as f64 * scale).round() as u32).clamp(1, src_height);

    (out_width, out_height)
}
