//! Layered image metadata records
//!
//! Metadata produced by a format plugin comes in three tiers with
//! different failure semantics. Core metadata is mandatory and its
//! extraction may fail the import; calibration metadata is optional and
//! absence is valid; diagnostic metadata is free-form, display-only text.

use crate::format::errors::{FormatError, FormatResult};
use crate::format::pixel::PixelType;
use crate::format::region::Region;
use crate::format::units::PhysicalSize;

/// Descriptor for a single image channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelInfo {
    /// Zero-based channel index
    pub index: u32,
    /// Suggested display name, e.g. "R"
    pub suggested_name: String,
}

impl ChannelInfo {
    /// Creates a channel descriptor
    pub fn new(index: u32, suggested_name: &str) -> Self {
        ChannelInfo {
            index,
            suggested_name: suggested_name.to_string(),
        }
    }
}

/// Mandatory image metadata
///
/// Everything the host needs before it can serve any read request.
/// Built once at import time and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct CoreMetadata {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Significant bits per sample
    pub significant_bits: u32,
    /// Number of channels
    pub n_channels: u32,
    /// Channel descriptors, one per channel
    pub channels: Vec<ChannelInfo>,
    /// Number of z-slices
    pub depth: u32,
    /// Number of time frames
    pub duration: u32,
    /// Sample numeric representation
    pub pixel_type: PixelType,
}

impl CoreMetadata {
    /// Checks the structural invariants of this record
    ///
    /// Width and height must be positive and the channel descriptor list
    /// must agree with the declared channel count.
    ///
    /// # Returns
    /// Ok if the record is consistent, a MalformedFile error otherwise
    pub fn validate(&self) -> FormatResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FormatError::MalformedFile(format!(
                "Image extent must be positive, got {}x{}",
                self.width, self.height
            )));
        }

        if self.n_channels as usize != self.channels.len() {
            return Err(FormatError::MalformedFile(format!(
                "Declared {} channels but {} channel descriptors",
                self.n_channels,
                self.channels.len()
            )));
        }

        Ok(())
    }

    /// The region spanning the full image extent
    pub fn full_region(&self) -> Region {
        Region::new(0, 0, self.width, self.height)
    }
}

/// Optional physical calibration metadata
///
/// All fields are optional; an entirely empty record is valid. Physical
/// sizes carry an explicit unit, see `units::PhysicalSize`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalibrationMetadata {
    /// Physical size of a pixel along the X axis
    pub pixel_size_x: Option<PhysicalSize>,
    /// Physical size of a pixel along the Y axis
    pub pixel_size_y: Option<PhysicalSize>,
    /// Objective magnification
    pub magnification: Option<f64>,
    /// Acquisition timestamp, verbatim from the source file
    pub acquired_at: Option<String>,
}

impl CalibrationMetadata {
    /// Whether no calibration field is populated
    pub fn is_empty(&self) -> bool {
        self.pixel_size_x.is_none()
            && self.pixel_size_y.is_none()
            && self.magnification.is_none()
            && self.acquired_at.is_none()
    }
}

/// Free-form diagnostic metadata
///
/// An ordered string-to-string map. The host displays these entries and
/// never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticMetadata {
    entries: Vec<(String, String)>,
}

impl DiagnosticMetadata {
    /// Creates an empty store
    pub fn new() -> Self {
        DiagnosticMetadata::default()
    }

    /// Sets a property, replacing an existing entry in place
    ///
    /// Insertion order is preserved so listings come out in the order the
    /// properties were discovered in the source file.
    pub fn set(&mut self, key: &str, value: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value.to_string();
        } else {
            self.entries.push((key.to_string(), value.to_string()));
        }
    }

    /// Looks up a property by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of stored properties
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store holds no properties
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
