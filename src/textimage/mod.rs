//! Text image reference format
//!
//! A deliberately small file format used to demonstrate the plugin
//! contract end to end. A text image is a line-based properties file:
//! the first line is the exact signature, every following line is a
//! `KEY=VALUE` property. Pixel data is synthesized (a white image), so
//! the format exercises detection, parsing and rendering without any
//! codec work.

mod matcher;
mod parser;
mod renderer;

pub use matcher::TextImageMatcher;
pub use parser::TextImageParser;
pub use renderer::TextImageRenderer;

use crate::format::descriptor::{FormatDescriptor, FormatDescriptorBuilder};

/// Exact signature bytes on the first line of a text image file
pub const SIGNATURE: &[u8] = b"textimage format v1";

/// Conventional file extension
pub const EXTENSION: &str = "txtimg";

/// Builds the registration descriptor for the text image format
pub fn descriptor() -> FormatDescriptor {
    FormatDescriptorBuilder::new("Text Image")
        .remarks("Reference format demonstrating the plugin contract")
        .spatial(true)
        .pyramidal(false)
        .needs_conversion(false)
        .matcher(Box::new(TextImageMatcher))
        .extractor(Box::new(TextImageParser))
        .renderer(Box::new(TextImageRenderer))
        .build()
        .expect("text image descriptor is fully bound")
}

#[cfg(test)]
mod tests;
