//! Format plugin contract
//!
//! This module defines the extension points an image file format must
//! implement to plug into a host image server: signature-based
//! detection, layered metadata extraction, region rendering and a
//! capability descriptor binding them together.

pub mod errors;
pub mod pixel;
pub mod region;
pub mod units;
pub mod metadata;
pub mod buffer;
pub mod matcher;
pub mod extractor;
pub mod renderer;
pub mod descriptor;
pub mod registry;
#[cfg(test)]
mod tests;

pub use errors::{FormatError, FormatResult};
pub use pixel::PixelType;
pub use region::{fit_within, tile_region, PlaneSelector, Region};
pub use units::{PhysicalSize, PhysicalUnit};
pub use metadata::{CalibrationMetadata, ChannelInfo, CoreMetadata, DiagnosticMetadata};
pub use buffer::PixelBuffer;
pub use matcher::{read_signature, SignatureMatcher, MAX_SIGNATURE_LEN};
pub use extractor::{extract_all, ImageMetadata, MetadataExtractor};
pub use renderer::{check_region, check_selector, RegionRenderer};
pub use descriptor::{FormatDescriptor, FormatDescriptorBuilder};
pub use registry::FormatRegistry;
