//! Tests for the physical unit registry

use crate::format::units::{PhysicalSize, PhysicalUnit};

#[test]
fn test_unit_parse_known_symbols() {
    let um = PhysicalUnit::parse("um").unwrap();
    assert_eq!(um.symbol(), "um");
    assert_eq!(um.name(), "micrometer");

    let mm = PhysicalUnit::parse("mm").unwrap();
    assert_eq!(mm.name(), "millimeter");
}

#[test]
fn test_unit_parse_is_case_insensitive() {
    let unit = PhysicalUnit::parse(" UM ").unwrap();
    assert_eq!(unit, PhysicalUnit::micrometer());
}

#[test]
fn test_unit_parse_unknown_symbol() {
    assert!(PhysicalUnit::parse("furlong").is_err());
}

#[test]
fn test_physical_size_in_meters() {
    let size = PhysicalSize::new(0.25, PhysicalUnit::micrometer());
    assert!((size.in_meters() - 0.25e-6).abs() < 1e-18);

    let size = PhysicalSize::new(2.0, PhysicalUnit::parse("mm").unwrap());
    assert!((size.in_meters() - 2e-3).abs() < 1e-12);
}

#[test]
fn test_physical_size_display_carries_unit() {
    let size = PhysicalSize::new(0.25, PhysicalUnit::micrometer());
    assert_eq!(format!("{}", size), "0.25 um");
}
