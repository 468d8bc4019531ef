//! Tests for metadata records and their invariants

use crate::format::errors::FormatError;
use crate::format::metadata::{CalibrationMetadata, ChannelInfo, CoreMetadata, DiagnosticMetadata};
use crate::format::pixel::PixelType;
use crate::format::region::Region;

fn rgb_core(width: u32, height: u32) -> CoreMetadata {
    CoreMetadata {
        width,
        height,
        significant_bits: 8,
        n_channels: 3,
        channels: vec![
            ChannelInfo::new(0, "R"),
            ChannelInfo::new(1, "G"),
            ChannelInfo::new(2, "B"),
        ],
        depth: 1,
        duration: 1,
        pixel_type: PixelType::U8,
    }
}

#[test]
fn test_core_metadata_validates() {
    let core = rgb_core(200, 80);
    assert!(core.validate().is_ok());
    assert_eq!(core.full_region(), Region::new(0, 0, 200, 80));
}

#[test]
fn test_core_metadata_rejects_zero_extent() {
    let core = rgb_core(0, 80);
    assert!(matches!(core.validate(), Err(FormatError::MalformedFile(_))));
}

#[test]
fn test_core_metadata_rejects_channel_mismatch() {
    let mut core = rgb_core(200, 80);
    core.channels.pop();
    assert!(matches!(core.validate(), Err(FormatError::MalformedFile(_))));
}

#[test]
fn test_calibration_default_is_empty() {
    assert!(CalibrationMetadata::default().is_empty());
}

#[test]
fn test_diagnostics_preserve_insertion_order() {
    let mut diagnostics = DiagnosticMetadata::new();
    diagnostics.set("first", "1");
    diagnostics.set("second", "2");
    diagnostics.set("third", "3");

    let keys: Vec<&str> = diagnostics.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["first", "second", "third"]);
}

#[test]
fn test_diagnostics_set_replaces_in_place() {
    let mut diagnostics = DiagnosticMetadata::new();
    diagnostics.set("first", "1");
    diagnostics.set("second", "2");
    diagnostics.set("first", "updated");

    assert_eq!(diagnostics.len(), 2);
    assert_eq!(diagnostics.get("first"), Some("updated"));

    let keys: Vec<&str> = diagnostics.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, vec!["first", "second"]);
}
