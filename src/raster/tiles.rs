//! Solid-color tile synthesis and tile file naming

use image::{Rgb, RgbImage};

/// A square raster filled with one color
pub fn solid_tile(color: Rgb<u8>, size: u32) -> RgbImage {
    RgbImage::from_pixel(size, size, color)
}

/// File name of the tile for grid position `(row, col)`
pub fn tile_file_name(row: u32, col: u32) -> String {
    format!("tile_r{row}_c{col}.png")
}
