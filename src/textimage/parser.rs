//! Metadata parser for the text image format
//!
//! Properties live on the lines after the signature, one `KEY=VALUE`
//! pair per line. Keys are case-insensitive; the parser lowercases them
//! for lookup but keeps the original spelling for diagnostics.

use std::fs;
use std::path::Path;

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::format::errors::{FormatError, FormatResult};
use crate::format::extractor::MetadataExtractor;
use crate::format::metadata::{CalibrationMetadata, ChannelInfo, CoreMetadata, DiagnosticMetadata};
use crate::format::pixel::PixelType;
use crate::format::units::{PhysicalSize, PhysicalUnit};

lazy_static! {
    // One property per line: KEY=VALUE, surrounding whitespace ignored
    static ref PROPERTY_LINE: Regex =
        Regex::new(r"^\s*([A-Za-z_][A-Za-z0-9_ ]*?)\s*=\s*(.*?)\s*$").unwrap();
}

// Properties consumed by the core and calibration tiers; everything else
// goes to diagnostics verbatim.
const CONSUMED_KEYS: [&str; 8] = [
    "width",
    "height",
    "bits_per_pixel",
    "pixel_size_x",
    "pixel_size_y",
    "pixel_size_unit",
    "magnification",
    "acquired_at",
];

/// Parser for text image property files
pub struct TextImageParser;

impl TextImageParser {
    /// Reads all properties from the lines after the signature
    ///
    /// Returns pairs of (original key, value) in file order. Lines that
    /// are not well-formed properties are skipped with a debug note.
    fn read_properties(path: &Path) -> FormatResult<Vec<(String, String)>> {
        let content = fs::read_to_string(path)?;
        let mut properties = Vec::new();

        for line in content.lines().skip(1) {
            match PROPERTY_LINE.captures(line) {
                Some(captures) => {
                    properties.push((captures[1].to_string(), captures[2].to_string()));
                }
                None => {
                    if !line.trim().is_empty() {
                        debug!("Skipping malformed property line: {:?}", line);
                    }
                }
            }
        }

        Ok(properties)
    }

    /// Looks up a property value by case-insensitive key
    fn lookup<'a>(properties: &'a [(String, String)], key: &str) -> Option<&'a str> {
        properties
            .iter()
            .find(|(k, _)| k.to_lowercase() == key)
            .map(|(_, v)| v.as_str())
    }

    /// Parses a mandatory positive integer property
    ///
    /// Missing or non-numeric values are a MalformedFile error; mandatory
    /// fields are never defaulted.
    fn mandatory_u32(properties: &[(String, String)], key: &str) -> FormatResult<u32> {
        let value = Self::lookup(properties, key).ok_or_else(|| {
            FormatError::MalformedFile(format!("Missing mandatory property: {}", key.to_uppercase()))
        })?;

        value.parse::<u32>().map_err(|_| {
            FormatError::MalformedFile(format!(
                "Property {} is not a valid integer: {:?}",
                key.to_uppercase(),
                value
            ))
        })
    }

    /// Parses an optional float property, skipping unparseable values
    fn optional_f64(properties: &[(String, String)], key: &str) -> Option<f64> {
        let value = Self::lookup(properties, key)?;
        match value.parse::<f64>() {
            Ok(parsed) => Some(parsed),
            Err(_) => {
                warn!("Ignoring non-numeric {} value: {:?}", key.to_uppercase(), value);
                None
            }
        }
    }
}

impl MetadataExtractor for TextImageParser {
    fn extract_core(&self, path: &Path) -> FormatResult<CoreMetadata> {
        let properties = Self::read_properties(path)?;

        let width = Self::mandatory_u32(&properties, "width")?;
        let height = Self::mandatory_u32(&properties, "height")?;
        let significant_bits = Self::mandatory_u32(&properties, "bits_per_pixel")?;

        // The format has a fixed structure: always three uint8 channels,
        // a single z-slice and a single time frame.
        Ok(CoreMetadata {
            width,
            height,
            significant_bits,
            n_channels: 3,
            channels: vec![
                ChannelInfo::new(0, "R"),
                ChannelInfo::new(1, "G"),
                ChannelInfo::new(2, "B"),
            ],
            depth: 1,
            duration: 1,
            pixel_type: PixelType::U8,
        })
    }

    fn extract_calibration(
        &self,
        path: &Path,
        _core: &CoreMetadata,
    ) -> FormatResult<CalibrationMetadata> {
        let properties = Self::read_properties(path)?;
        let mut calibration = CalibrationMetadata::default();

        // Unit applies to both axes; defaults to micrometers when absent.
        let unit = match Self::lookup(&properties, "pixel_size_unit") {
            Some(symbol) => match PhysicalUnit::parse(symbol) {
                Ok(unit) => unit,
                Err(e) => {
                    warn!("{} in {}, assuming micrometers", e, path.display());
                    PhysicalUnit::micrometer()
                }
            },
            None => PhysicalUnit::micrometer(),
        };

        if let Some(value) = Self::optional_f64(&properties, "pixel_size_x") {
            calibration.pixel_size_x = Some(PhysicalSize::new(value, unit.clone()));
        }
        if let Some(value) = Self::optional_f64(&properties, "pixel_size_y") {
            calibration.pixel_size_y = Some(PhysicalSize::new(value, unit));
        }
        calibration.magnification = Self::optional_f64(&properties, "magnification");
        calibration.acquired_at =
            Self::lookup(&properties, "acquired_at").map(|v| v.to_string());

        Ok(calibration)
    }

    fn extract_diagnostics(&self, path: &Path) -> DiagnosticMetadata {
        let mut diagnostics = DiagnosticMetadata::new();
        diagnostics.set("Model name", "Text image demonstration device");

        // Best-effort: an unreadable file just yields the fixed entries.
        let properties = match Self::read_properties(path) {
            Ok(properties) => properties,
            Err(e) => {
                warn!("Diagnostic properties unavailable for {}: {}", path.display(), e);
                return diagnostics;
            }
        };

        for (key, value) in &properties {
            if !CONSUMED_KEYS.contains(&key.to_lowercase().as_str()) {
                diagnostics.set(key, value);
            }
        }

        diagnostics
    }
}
