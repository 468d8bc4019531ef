pub mod format;
pub mod textimage;
pub mod files;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::FormatKit;

pub use format::{
    CoreMetadata, FormatDescriptor, FormatError, FormatRegistry, FormatResult, PixelBuffer,
    PixelType, PlaneSelector, Region,
};
