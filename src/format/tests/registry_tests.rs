//! Tests for the format registry and detection order

use std::fs;
use std::path::{Path, PathBuf};

use crate::format::buffer::PixelBuffer;
use crate::format::descriptor::FormatDescriptorBuilder;
use crate::format::errors::{FormatError, FormatResult};
use crate::format::extractor::MetadataExtractor;
use crate::format::matcher::SignatureMatcher;
use crate::format::metadata::{ChannelInfo, CoreMetadata};
use crate::format::pixel::PixelType;
use crate::format::region::{PlaneSelector, Region};
use crate::format::registry::{self, FormatRegistry};
use crate::format::renderer::RegionRenderer;

struct PrefixMatcher(&'static [u8]);

impl SignatureMatcher for PrefixMatcher {
    fn matches(&self, prefix: &[u8]) -> bool {
        prefix.len() >= self.0.len() && &prefix[..self.0.len()] == self.0
    }
}

struct StubExtractor;

impl MetadataExtractor for StubExtractor {
    fn extract_core(&self, _path: &Path) -> FormatResult<CoreMetadata> {
        Ok(CoreMetadata {
            width: 1,
            height: 1,
            significant_bits: 8,
            n_channels: 1,
            channels: vec![ChannelInfo::new(0, "L")],
            depth: 1,
            duration: 1,
            pixel_type: PixelType::U8,
        })
    }
}

struct StubRenderer;

impl RegionRenderer for StubRenderer {
    fn render(
        &self,
        _path: &Path,
        core: &CoreMetadata,
        region: &Region,
        out_width: u32,
        out_height: u32,
        _selector: &PlaneSelector,
    ) -> FormatResult<PixelBuffer> {
        crate::format::renderer::check_region(region, core)?;
        Ok(PixelBuffer::filled_u8(out_width, out_height, core.n_channels, 0))
    }
}

fn stub_descriptor(name: &str, signature: &'static [u8]) -> crate::format::FormatDescriptor {
    FormatDescriptorBuilder::new(name)
        .matcher(Box::new(PrefixMatcher(signature)))
        .extractor(Box::new(StubExtractor))
        .renderer(Box::new(StubRenderer))
        .build()
        .unwrap()
}

fn temp_file(name: &str, content: &[u8]) -> PathBuf {
    let path = std::env::temp_dir().join(format!("formatkit_registry_{}", name));
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_builder_requires_all_components() {
    let result = FormatDescriptorBuilder::new("incomplete")
        .matcher(Box::new(PrefixMatcher(b"x")))
        .build();
    assert!(result.is_err());
}

#[test]
fn test_detection_in_registration_order() {
    // Both formats accept the same prefix; the first registered wins
    let mut local = FormatRegistry::new();
    local.register(stub_descriptor("first", b"DUP"));
    local.register(stub_descriptor("second", b"DUP"));

    let path = temp_file("tie.bin", b"DUP data");
    let detected = local.detect(&path).unwrap();
    assert_eq!(detected.name(), "first");
}

#[test]
fn test_detection_skips_non_matching_formats() {
    let mut local = FormatRegistry::new();
    local.register(stub_descriptor("alpha", b"AAAA"));
    local.register(stub_descriptor("beta", b"BBBB"));

    let path = temp_file("beta.bin", b"BBBB data");
    assert_eq!(local.detect(&path).unwrap().name(), "beta");
}

#[test]
fn test_detection_unknown_format() {
    let mut local = FormatRegistry::new();
    local.register(stub_descriptor("alpha", b"AAAA"));

    let path = temp_file("unknown.bin", b"ZZZZ data");
    assert!(matches!(
        local.detect(&path),
        Err(FormatError::UnknownFormat(_))
    ));
}

#[test]
fn test_global_registry_has_text_image() {
    let global = registry::global();
    assert!(!global.is_empty());
    assert!(global.get("Text Image").is_some());
}

#[test]
fn test_descriptor_capability_flags() {
    let descriptor = registry::global().get("Text Image").unwrap();
    assert!(descriptor.is_spatial());
    assert!(!descriptor.is_pyramidal());
    assert!(!descriptor.needs_conversion());
}
