//! Tests for region math: bounds, tile grids and thumbnail fitting

use crate::format::region::{fit_within, tile_region, Region};

#[test]
fn test_region_fits_within_interior() {
    let region = Region::new(10, 20, 30, 40);
    assert!(region.fits_within(100, 100));
}

#[test]
fn test_region_fits_within_exact_edge() {
    // origin + extent landing exactly on the edge is still inside
    let region = Region::new(50, 50, 50, 50);
    assert!(region.fits_within(100, 100));
}

#[test]
fn test_region_exceeding_extent() {
    let region = Region::new(50, 50, 51, 50);
    assert!(!region.fits_within(100, 100));
}

#[test]
fn test_region_near_u32_max_does_not_overflow() {
    let region = Region::new(u32::MAX, 0, 2, 1);
    assert!(!region.fits_within(u32::MAX, 1));
}

#[test]
fn test_tile_region_first_tile_small_image() {
    // An image smaller than the tile size yields a single clipped tile
    let tile = tile_region(200, 80, 0, 0, 256).unwrap();
    assert_eq!(tile, Region::new(0, 0, 200, 80));
}

#[test]
fn test_tile_region_grid_interior_and_edges() {
    // 600x500 at tile size 256: 3 tiles across, 2 down
    assert_eq!(tile_region(600, 500, 0, 0, 256).unwrap(), Region::new(0, 0, 256, 256));
    assert_eq!(tile_region(600, 500, 0, 2, 256).unwrap(), Region::new(512, 0, 88, 256));
    assert_eq!(tile_region(600, 500, 0, 3, 256).unwrap(), Region::new(0, 256, 256, 244));
    assert_eq!(tile_region(600, 500, 0, 5, 256).unwrap(), Region::new(512, 256, 88, 244));
}

#[test]
fn test_tile_region_index_out_of_range() {
    assert!(tile_region(600, 500, 0, 6, 256).is_err());
}

#[test]
fn test_tile_region_higher_level_halves_extent() {
    // Level 1 of 600x500 is 300x250: 2 tiles across, 1 down
    assert_eq!(tile_region(600, 500, 1, 1, 256).unwrap(), Region::new(256, 0, 44, 250));
    assert!(tile_region(600, 500, 1, 2, 256).is_err());
}

#[test]
fn test_tile_region_rejects_zero_tile_size() {
    assert!(tile_region(600, 500, 0, 0, 0).is_err());
}

#[test]
fn test_fit_within_smaller_source_keeps_native_extent() {
    // No upsampling: a 256 cap on a 200x80 image stays 200x80
    assert_eq!(fit_within(200, 80, 256, 256), (200, 80));
}

#[test]
fn test_fit_within_downsamples_preserving_aspect() {
    assert_eq!(fit_within(1000, 500, 256, 256), (256, 128));
    assert_eq!(fit_within(500, 1000, 256, 256), (128, 256));
}

#[test]
fn test_fit_within_exact_cap() {
    assert_eq!(fit_within(256, 256, 256, 256), (256, 256));
}

#[test]
fn test_fit_within_degenerate_input() {
    assert_eq!(fit_within(0, 100, 256, 256), (0, 0));
    assert_eq!(fit_within(100, 100, 0, 256), (0, 0));
}
