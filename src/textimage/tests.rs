//! Tests for the text image reference format

use std::fs;
use std::path::PathBuf;

use crate::format::errors::FormatError;
use crate::format::extractor::{extract_all, MetadataExtractor};
use crate::format::matcher::SignatureMatcher;
use crate::format::pixel::PixelType;
use crate::format::region::{PlaneSelector, Region};
use crate::format::renderer::RegionRenderer;
use crate::textimage::{TextImageMatcher, TextImageParser, TextImageRenderer, SIGNATURE};

fn write_fixture(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("formatkit_textimage_{}.txtimg", name));
    fs::write(&path, content).unwrap();
    path
}

fn basic_file(name: &str) -> PathBuf {
    write_fixture(
        name,
        "textimage format v1\nWIDTH=200\nHEIGHT=80\nTILE_WIDTH=256\nTILE_HEIGHT=256\nBITS_PER_PIXEL=8",
    )
}

#[test]
fn test_matcher_accepts_exact_signature() {
    assert!(TextImageMatcher.matches(SIGNATURE));
}

#[test]
fn test_matcher_accepts_signature_with_trailing_bytes() {
    let mut prefix = SIGNATURE.to_vec();
    prefix.extend_from_slice(b"\nWIDTH=200");
    assert!(TextImageMatcher.matches(&prefix));
}

#[test]
fn test_matcher_rejects_truncated_prefix() {
    // One byte short of the signature must be false, never an error
    assert!(!TextImageMatcher.matches(&SIGNATURE[..SIGNATURE.len() - 1]));
    assert!(!TextImageMatcher.matches(b""));
}

#[test]
fn test_matcher_rejects_corrupted_signature() {
    let mut prefix = SIGNATURE.to_vec();
    prefix[0] ^= 0x01;
    assert!(!TextImageMatcher.matches(&prefix));
}

#[test]
fn test_core_metadata_from_valid_file() {
    let path = basic_file("core");
    let core = TextImageParser.extract_core(&path).unwrap();

    assert_eq!(core.width, 200);
    assert_eq!(core.height, 80);
    assert_eq!(core.significant_bits, 8);
    assert_eq!(core.n_channels, 3);
    assert_eq!(core.channels.len(), 3);
    assert_eq!(core.channels[0].suggested_name, "R");
    assert_eq!(core.depth, 1);
    assert_eq!(core.duration, 1);
    assert_eq!(core.pixel_type, PixelType::U8);
    assert!(core.validate().is_ok());
}

#[test]
fn test_core_extraction_is_idempotent() {
    let path = basic_file("idempotent");
    let first = TextImageParser.extract_core(&path).unwrap();
    let second = TextImageParser.extract_core(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_missing_width_is_malformed() {
    let path = write_fixture("no_width", "textimage format v1\nHEIGHT=80\nBITS_PER_PIXEL=8");
    assert!(matches!(
        TextImageParser.extract_core(&path),
        Err(FormatError::MalformedFile(_))
    ));
}

#[test]
fn test_non_numeric_height_is_malformed() {
    let path = write_fixture(
        "bad_height",
        "textimage format v1\nWIDTH=200\nHEIGHT=tall\nBITS_PER_PIXEL=8",
    );
    assert!(matches!(
        TextImageParser.extract_core(&path),
        Err(FormatError::MalformedFile(_))
    ));
}

#[test]
fn test_properties_are_case_insensitive() {
    let path = write_fixture(
        "lowercase",
        "textimage format v1\nwidth=10\nheight=20\nbits_per_pixel=8",
    );
    let core = TextImageParser.extract_core(&path).unwrap();
    assert_eq!(core.width, 10);
    assert_eq!(core.height, 20);
}

#[test]
fn test_calibration_extraction() {
    let path = write_fixture(
        "calibration",
        "textimage format v1\nWIDTH=200\nHEIGHT=80\nBITS_PER_PIXEL=8\n\
         PIXEL_SIZE_X=0.25\nPIXEL_SIZE_Y=0.5\nPIXEL_SIZE_UNIT=mm\n\
         MAGNIFICATION=40\nACQUIRED_AT=2020-01-01T00:00:00",
    );

    let core = TextImageParser.extract_core(&path).unwrap();
    let calibration = TextImageParser.extract_calibration(&path, &core).unwrap();

    let size_x = calibration.pixel_size_x.unwrap();
    assert_eq!(size_x.value, 0.25);
    assert_eq!(size_x.unit.symbol(), "mm");
    assert_eq!(calibration.pixel_size_y.unwrap().value, 0.5);
    assert_eq!(calibration.magnification, Some(40.0));
    assert_eq!(calibration.acquired_at.as_deref(), Some("2020-01-01T00:00:00"));
}

#[test]
fn test_calibration_absent_fields_are_valid() {
    let path = basic_file("no_calibration");
    let core = TextImageParser.extract_core(&path).unwrap();
    let calibration = TextImageParser.extract_calibration(&path, &core).unwrap();
    assert!(calibration.is_empty());
}

#[test]
fn test_calibration_defaults_to_micrometers() {
    let path = write_fixture(
        "default_unit",
        "textimage format v1\nWIDTH=200\nHEIGHT=80\nBITS_PER_PIXEL=8\nPIXEL_SIZE_X=0.25",
    );
    let core = TextImageParser.extract_core(&path).unwrap();
    let calibration = TextImageParser.extract_calibration(&path, &core).unwrap();
    assert_eq!(calibration.pixel_size_x.unwrap().unit.symbol(), "um");
}

#[test]
fn test_diagnostics_carry_unconsumed_properties() {
    let path = basic_file("diagnostics");
    let diagnostics = TextImageParser.extract_diagnostics(&path);

    assert_eq!(diagnostics.get("Model name"), Some("Text image demonstration device"));
    assert_eq!(diagnostics.get("TILE_WIDTH"), Some("256"));
    assert_eq!(diagnostics.get("TILE_HEIGHT"), Some("256"));
    // Core properties are not repeated as diagnostics
    assert!(diagnostics.get("WIDTH").is_none());
}

#[test]
fn test_diagnostics_survive_unreadable_file() {
    let path = std::env::temp_dir().join("formatkit_textimage_missing.txtimg");
    let _ = fs::remove_file(&path);

    let diagnostics = TextImageParser.extract_diagnostics(&path);
    assert_eq!(diagnostics.get("Model name"), Some("Text image demonstration device"));
}

#[test]
fn test_render_region_is_white_with_declared_shape() {
    let path = basic_file("render");
    let metadata = extract_all(&TextImageParser, &path).unwrap();

    let region = Region::new(10, 10, 32, 16);
    let buffer = TextImageRenderer
        .render(&path, &metadata.core, &region, 32, 16, &PlaneSelector::default())
        .unwrap();

    assert_eq!(buffer.width(), 32);
    assert_eq!(buffer.height(), 16);
    assert_eq!(buffer.n_channels(), 3);
    assert_eq!(buffer.pixel_type(), PixelType::U8);
    assert!(buffer.data().iter().all(|&b| b == 255));
}

#[test]
fn test_render_rejects_out_of_bounds_region() {
    let path = basic_file("oob");
    let metadata = extract_all(&TextImageParser, &path).unwrap();

    let region = Region::new(150, 0, 100, 40);
    let result = TextImageRenderer.render(
        &path,
        &metadata.core,
        &region,
        100,
        40,
        &PlaneSelector::default(),
    );

    assert!(matches!(result, Err(FormatError::RegionOutOfBounds { .. })));
}

#[test]
fn test_render_rejects_out_of_range_selector() {
    let path = basic_file("selector");
    let metadata = extract_all(&TextImageParser, &path).unwrap();

    let selector = PlaneSelector { c: Some(3), z: None, t: None };
    let result = TextImageRenderer.render(
        &path,
        &metadata.core,
        &metadata.core.full_region(),
        200,
        80,
        &selector,
    );
    assert!(result.is_err());
}

#[test]
fn test_full_tile_equals_native_thumbnail() {
    // A tile spanning the whole image and a thumbnail at native size
    // must be pixel-identical: neither path resamples
    let path = basic_file("roundtrip");
    let metadata = extract_all(&TextImageParser, &path).unwrap();
    let selector = PlaneSelector::default();

    let tile = TextImageRenderer
        .render_tile(&path, &metadata.core, &metadata.core.full_region(), &selector)
        .unwrap();
    let thumbnail = TextImageRenderer
        .render_thumbnail(&path, &metadata.core, 200, 80, &selector)
        .unwrap();

    assert_eq!(tile, thumbnail);
}

#[test]
fn test_thumbnail_respects_cap_and_aspect() {
    let path = basic_file("thumbnail");
    let metadata = extract_all(&TextImageParser, &path).unwrap();

    // Source smaller than the cap keeps its native extent
    let thumbnail = TextImageRenderer
        .render_thumbnail(&path, &metadata.core, 256, 256, &PlaneSelector::default())
        .unwrap();
    assert_eq!((thumbnail.width(), thumbnail.height()), (200, 80));

    // A tighter cap downsamples, preserving the 200:80 aspect
    let small = TextImageRenderer
        .render_thumbnail(&path, &metadata.core, 100, 100, &PlaneSelector::default())
        .unwrap();
    assert_eq!((small.width(), small.height()), (100, 40));
    assert_eq!(small.n_channels(), 3);
}
